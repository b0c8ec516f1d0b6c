//! Noyau : évaluation (pipeline réel)
//!
//! trim -> tokenize -> RPN -> pile -> contrôle fini -> lecture 12 décimales
//!
//! Aucune mémoire entre deux appels : même entrée, même sortie.

use tracing::debug;

use super::erreur::{ErreurNoyau, Resultat};
use super::jetons::{format_tokens, tokenize};
use super::lecture::lecture_decimale;
use super::rpn::{eval_rpn, to_rpn};

/// Issue d'une évaluation réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sortie {
    /// Entrée vide ou blanche : rien à faire, l'écran ne change pas.
    Vide,
    /// Valeur finie, déjà normalisée pour l'affichage.
    Valeur(String),
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression.
///
/// Toute erreur (syntaxe, pile, résultat NaN/∞) sort en `Err` ; l'appelant
/// affiche alors le marqueur d'erreur.
pub fn eval_expression(expr_str: &str) -> Resultat<Sortie> {
    eval_detaille(expr_str).map(|(sortie, _d)| sortie)
}

/// Comme `eval_expression`, avec la démarche (jetons + RPN) en plus.
pub fn eval_detaille(expr_str: &str) -> Resultat<(Sortie, DemarcheNoyau)> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Ok((Sortie::Vide, DemarcheNoyau::default()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!(expr = s, jetons = %d.jetons, rpn = %d.rpn, "expression convertie");

    // 3) Pile
    let valeur = eval_rpn(&rpn)?;

    // 4) NaN (division par zéro) ou ±∞ (débordement) : refusé
    if !valeur.is_finite() {
        return Err(ErreurNoyau::ResultatNonFini(valeur));
    }

    Ok((Sortie::Valeur(lecture_decimale(valeur)), d))
}
