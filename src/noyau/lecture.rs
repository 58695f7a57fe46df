// src/noyau/lecture.rs
//
// Lecture "souple" d’un montant saisi à la main :
// "119.000", "119,000", "$ 119000", "1.234,56", "1,234.56"...
//
// Heuristique séparateurs (à garder telle quelle) :
// - virgule ET point : le dernier séparateur de la chaîne est le décimal
// - un seul type : décimal seulement s’il apparaît une fois avec <= 2 chiffres après,
//   sinon séparateur de milliers
//   => "1.234" vaut 1234, "1.23" vaut 1.23

use tracing::trace;

/// Nombre max de chiffres après un séparateur unique pour le lire comme décimal.
const DECIMALES_MAX: usize = 2;

/// Lit un nombre tapé librement. `None` si illisible (jamais de panique).
/// Le résultat, quand il existe, est toujours fini.
pub fn parse_loose_number(entree: &str) -> Option<f64> {
    // chiffres, séparateurs et signe seulement (espaces, $, lettres... disparaissent)
    let s: String = entree
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if s.is_empty() {
        return None;
    }

    let normalise = match (s.rfind(','), s.rfind('.')) {
        (Some(virgule), Some(point)) => {
            let (dec, groupe) = if virgule > point {
                (",", ".")
            } else {
                (".", ",")
            };
            // seule la première occurrence du décimal devient '.'
            s.replace(groupe, "").replacen(dec, ".", 1)
        }
        (Some(_), None) => separateur_unique(&s, ','),
        _ => separateur_unique(&s, '.').replace(',', ""),
    };

    trace!(entree, normalise = %normalise, "lecture souple");

    if normalise.is_empty() {
        return None;
    }
    normalise.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Un seul type de séparateur `sep` : décimal (une occurrence, <= 2 chiffres après)
/// ou séparateur de milliers (supprimé).
fn separateur_unique(s: &str, sep: char) -> String {
    let autre = if sep == ',' { '.' } else { ',' };
    let parts: Vec<&str> = s.split(sep).collect();

    match parts.as_slice() {
        [entier, frac] if frac.len() <= DECIMALES_MAX => {
            format!("{}.{frac}", entier.replace(autre, ""))
        }
        _ => s.replace(sep, ""),
    }
}
