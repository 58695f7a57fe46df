//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : Ok(v) => v fini, et l’affichage ne panique pas

use std::time::{Duration, Instant};

use super::{eval_expression, format_resultat, parse_loose_number};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100_000);
    match rng.pick(4) {
        0 => format!("{entier}.{}", rng.pick(100)),
        1 => format!(".{}", rng.pick(1000)),
        _ => format!("{entier}"),
    }
}

fn gen_op(rng: &mut Rng) -> char {
    ['+', '-', '*', '/'][rng.pick(4) as usize]
}

/// Expression bien formée (sauf division par zéro possible).
fn gen_expr(rng: &mut Rng, termes: usize) -> String {
    let mut s = gen_nombre(rng);
    for _ in 1..termes {
        s.push(gen_op(rng));
        if rng.pick(6) == 0 {
            s.push('-');
        }
        s.push_str(&gen_nombre(rng));
    }
    s
}

/// Bruit : alphabet calculatrice + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '.', '+', '-', '-', '*', '/', ' ', ',', '$', 'x',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let termes = 1 + rng.pick(8) as usize;
        let expr = gen_expr(&mut rng, termes);

        match eval_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                let _ = format_resultat(v);
                seen_ok += 1;
            }
            // seule la division par zéro peut échouer ici
            Err(e) => {
                assert!(
                    ["/0", "/.0", "/-0", "/-.0"].iter().any(|z| expr.contains(z)),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_bruit_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes entrées => mêmes sorties
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = rng_a.clone();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..600 {
        budget(t0, max);

        let len = rng_a.pick(14) as usize;
        let a = gen_bruit(&mut rng_a, len);
        let len_b = rng_b.pick(14) as usize;
        let b = gen_bruit(&mut rng_b, len_b);
        assert_eq!(a, b);

        let ra = eval_expression(&a);
        assert_eq!(ra, eval_expression(&b));
        match ra {
            Ok(v) => {
                assert!(v.is_finite());
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }

        if let Some(v) = parse_loose_number(&a) {
            assert!(v.is_finite(), "lecture={a:?} v={v}");
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop “méchant”");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2000 termes "0.5" additionnés : piles longues, pas de récursion
    let expr = vec!["0.5"; 2000].join("+");
    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 1000.0);
}
