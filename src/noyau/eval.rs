//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de f64
//!
//! Aucun état partagé : chaque appel construit puis jette ses jetons et ses piles.

use tracing::debug;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression `+ - * /` et retourne sa valeur (toujours finie).
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    eval_avec_demarche(expr_str).map(|(v, _d)| v)
}

/// Comme `eval_expression`, avec la démarche (jetons, RPN) en texte.
pub fn eval_avec_demarche(expr_str: &str) -> Result<(f64, DemarcheNoyau), ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str).inspect_err(|e| debug!(expr = expr_str, %e, "jetons"))?;

    // 2) RPN
    let rpn = to_rpn(&jetons);

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!(expr = expr_str, jetons = %d.jetons, rpn = %d.rpn, "pipeline");

    // 3) Pile
    let v = eval_rpn(&rpn).inspect_err(|e| debug!(expr = expr_str, %e, "évaluation"))?;

    Ok((v, d))
}
