// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - + - : précédence 1 ; * / : précédence 2 ; tout associatif à gauche
// - pas de parenthèses : le moins unaire est déjà collé au nombre (jetons.rs)
// - division par zéro => NaN (pas d’erreur sur place) ; c’est le contrôle
//   "fini" des opérandes / du résultat qui la rattrape ensuite

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        if !tok.is_operateur() {
            out.push(tok);
            continue;
        }

        // dépile tant que le sommet lie au moins aussi fort (associativité gauche)
        while let Some(top) = ops.last() {
            if precedence(top) >= precedence(&tok) {
                out.extend(ops.pop());
            } else {
                break;
            }
        }
        ops.push(tok);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}

/// Dépile un opérande ; absent ou non fini => expression incomplète.
fn pop_fini(st: &mut Vec<f64>) -> Result<f64, ErreurEval> {
    st.pop()
        .filter(|v| v.is_finite())
        .ok_or(ErreurEval::ExpressionIncomplete)
}

/// Dépile b (sommet) puis a ; retourne (a, b).
fn pop_paire(st: &mut Vec<f64>) -> Result<(f64, f64), ErreurEval> {
    let b = pop_fini(st)?;
    let a = pop_fini(st)?;
    Ok((a, b))
}

/// Évalue une RPN.
///
/// - opérateur : b = sommet, a = second ; applique a (op) b
/// - à la fin : exactement une valeur, et finie
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for &tok in rpn {
        let r = match tok {
            Tok::Num(v) => v,
            Tok::Plus => {
                let (a, b) = pop_paire(&mut st)?;
                a + b
            }
            Tok::Minus => {
                let (a, b) = pop_paire(&mut st)?;
                a - b
            }
            Tok::Star => {
                let (a, b) = pop_paire(&mut st)?;
                a * b
            }
            Tok::Slash => {
                let (a, b) = pop_paire(&mut st)?;
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        };
        st.push(r);
    }

    match st.as_slice() {
        [v] if v.is_finite() => Ok(*v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
