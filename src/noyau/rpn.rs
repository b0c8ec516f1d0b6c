// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans parenthèses
// - Puis réduire la RPN avec une pile de f64
//
// Règles:
// - `*` `/` (2) avant `+` `-` (1), égalité => gauche d'abord (pop si >=)
// - Moins unaire:
//    - si '-' arrive quand on attend un opérande, on injecte 0 : "-x" => "0 x -"
//    - le moins unaire colle à l'opérande qui suit : "3*-5" => "3 0 5 - *"
// - Division par zéro : NaN (jamais ±∞), c'est la façade qui refuse le non-fini.

use tracing::trace;

use super::erreur::{ErreurNoyau, Resultat};
use super::jetons::{Op, Tok};

/// Ce que le convertisseur attend comme prochain jeton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attente {
    /// début d'expression ou juste après un opérateur
    Operande,
    /// juste après un nombre
    Operateur,
}

/// Entrée de la pile d'opérateurs.
#[derive(Clone, Copy, Debug)]
enum SurPile {
    Binaire(Op),
    /// moins unaire ; le 0 est déjà en sortie, il ressort comme `-` binaire
    Negation,
}

impl SurPile {
    fn precedence(self) -> u8 {
        match self {
            SurPile::Binaire(op) => op.precedence(),
            SurPile::Negation => 3,
        }
    }

    fn en_jeton(self) -> Tok {
        match self {
            SurPile::Binaire(op) => Tok::Op(op),
            SurPile::Negation => Tok::Op(Op::Moins),
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Fois, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Fois, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    if tokens.is_empty() {
        return Err(ErreurNoyau::ExpressionVide);
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() + 4);
    let mut ops: Vec<SurPile> = Vec::new();
    let mut attente = Attente::Operande;

    for &tok in tokens {
        match (tok, attente) {
            (Tok::Num(_), _) => {
                out.push(tok);
                attente = Attente::Operateur;
            }

            (Tok::Op(Op::Moins), Attente::Operande) => {
                // moins unaire : rien ne lie plus fort, donc rien à dépiler
                out.push(Tok::Num(0.0));
                ops.push(SurPile::Negation);
            }

            (Tok::Op(op), Attente::Operande) => {
                return Err(ErreurNoyau::OperateurMalPlace(op));
            }

            (Tok::Op(op), Attente::Operateur) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(top.en_jeton());
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(SurPile::Binaire(op));
                attente = Attente::Operande;
            }
        }
    }

    if attente == Attente::Operande {
        return Err(ErreurNoyau::OperateurFinal);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        out.push(top.en_jeton());
    }

    Ok(out)
}

/// Réduit une RPN à une valeur.
///
/// La RPN produite par `to_rpn` est toujours bien formée, mais on vérifie
/// quand même la pile : une RPN construite à la main peut ne pas l'être.
pub fn eval_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),
            Tok::Op(op) => {
                let b = pile.pop().ok_or(ErreurNoyau::PileInsuffisante)?;
                let a = pile.pop().ok_or(ErreurNoyau::PileInsuffisante)?;
                let r = applique(op, a, b);
                trace!(%op, a, b, r, "réduction");
                pile.push(r);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        reste => Err(ErreurNoyau::ResultatMalforme(reste.len())),
    }
}

fn applique(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Moins => a - b,
        Op::Fois => a * b,
        // x/0 => NaN, même si x != 0
        Op::Divise if b == 0.0 => f64::NAN,
        Op::Divise => a / b,
    }
}
