//! Propriétés (proptest) : aller-retour, opérations de base, lecture souple.

use proptest::prelude::*;

use super::erreur::ErreurEval;
use super::{eval_expression, format_resultat, parse_loose_number};

/// Opérandes bornés : produits et sommes restent finis.
fn operande() -> impl Strategy<Value = f64> {
    -1e6f64..1e6f64
}

proptest! {
    #[test]
    fn aller_retour_nombre_seul(x in -1e300f64..1e300f64) {
        // Display de f64 : positionnel, sans exposant, aller-retour exact
        prop_assert_eq!(eval_expression(&x.to_string()), Ok(x));
    }

    #[test]
    fn addition(a in operande(), b in operande()) {
        prop_assert_eq!(eval_expression(&format!("{a}+{b}")), Ok(a + b));
    }

    #[test]
    fn soustraction(a in operande(), b in operande()) {
        prop_assert_eq!(eval_expression(&format!("{a}-{b}")), Ok(a - b));
    }

    #[test]
    fn multiplication(a in operande(), b in operande()) {
        prop_assert_eq!(eval_expression(&format!("{a}*{b}")), Ok(a * b));
    }

    #[test]
    fn division_par_zero_jamais_de_panique(a in operande()) {
        let r = eval_expression(&format!("{a}/0"));
        prop_assert_eq!(r, Err(ErreurEval::ExpressionInvalide));
    }

    #[test]
    fn precedence_mul_avant_add(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let attendu = f64::from(a) + f64::from(b) * f64::from(c);
        prop_assert_eq!(eval_expression(&format!("{a}+{b}*{c}")), Ok(attendu));
    }

    #[test]
    fn idempotence(s in "[0-9.+*/ -]{0,16}") {
        prop_assert_eq!(eval_expression(&s), eval_expression(&s));
    }

    #[test]
    fn resultat_ok_toujours_fini(s in "[0-9.+*/-]{1,12}") {
        if let Ok(v) = eval_expression(&s) {
            prop_assert!(v.is_finite());
            prop_assert!(!format_resultat(v).is_empty());
        }
    }

    #[test]
    fn lecture_entier_groupe(n in 1_000u64..1_000_000_000) {
        // 1234567 -> "1.234.567" et "1,234,567" (groupes de 3 => milliers)
        let brut = n.to_string();
        let mut groupes: Vec<String> = Vec::new();
        let mut reste = brut.as_str();
        while reste.len() > 3 {
            let (tete, queue) = reste.split_at(reste.len() - 3);
            groupes.insert(0, queue.to_string());
            reste = tete;
        }
        groupes.insert(0, reste.to_string());

        let avec_points = groupes.join(".");
        let avec_virgules = groupes.join(",");
        prop_assert_eq!(parse_loose_number(&avec_points), Some(n as f64));
        prop_assert_eq!(parse_loose_number(&avec_virgules), Some(n as f64));
        prop_assert_eq!(parse_loose_number(&format!("$ {brut}")), Some(n as f64));
    }

    #[test]
    fn lecture_jamais_de_panique(s in "\\PC{0,24}") {
        if let Some(v) = parse_loose_number(&s) {
            prop_assert!(v.is_finite());
        }
    }
}
