//! Calculatrice de caisse : noyau d’évaluation `+ - * /` et lecture souple
//! des montants, plus l’état d’afficheur qui s’en sert.

pub mod app;
pub mod noyau;

pub use noyau::{eval_expression, parse_loose_number, ErreurEval};
