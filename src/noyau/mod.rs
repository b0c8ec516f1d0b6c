//! Noyau arithmétique (f64)
//!
//! Organisation interne :
//! - erreur.rs   : ErreurNoyau (toutes les façons d'échouer)
//! - jetons.rs   : tokenisation (nombres + - * /)
//! - rpn.rs      : shunting-yard + réduction de la RPN
//! - lecture.rs  : texte affiché (12 décimales)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{eval_detaille, eval_expression, Sortie};
