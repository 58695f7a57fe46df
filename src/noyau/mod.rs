//! Noyau calculatrice de caisse
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (nombres, moins unaire, + - * /)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - eval.rs     : pipeline complet + démarche
//! - erreur.rs   : erreur typée de l’évaluation
//! - lecture.rs  : lecture souple des montants ("1.234,56", "$ 119000"...)
//! - format.rs   : affichage calculatrice + format es-CO

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_avec_demarche, eval_expression, DemarcheNoyau};
pub use format::{format_monnaie, format_nombre_local, format_resultat};
pub use lecture::parse_loose_number;
