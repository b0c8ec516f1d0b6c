// src/noyau/erreur.rs

use super::jetons::Op;

/// Toutes les façons dont une évaluation peut échouer.
///
/// La vue ne fait aucune différence entre elles (marqueur "E"),
/// mais on garde le détail pour les logs et les tests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErreurNoyau {
    #[error("caractère inattendu '{caractere}' à la position {position}")]
    ExpressionMalformee { position: usize, caractere: char },

    #[error("expression vide")]
    ExpressionVide,

    #[error("opérateur '{0}' sans opérande à gauche")]
    OperateurMalPlace(Op),

    #[error("l'expression se termine par un opérateur")]
    OperateurFinal,

    #[error("pile insuffisante : opérateur sans deux opérandes")]
    PileInsuffisante,

    #[error("résultat malformé : {0} valeur(s) restante(s) sur la pile")]
    ResultatMalforme(usize),

    #[error("résultat non fini : {0}")]
    ResultatNonFini(f64),
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
