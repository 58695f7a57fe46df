// src/noyau/format.rs
//
// Présentation des résultats (couche au-dessus du noyau) :
// - format_resultat     : affichage calculatrice (arrondi 10 décimales sous 1e12)
// - format_nombre_local : style es-CO, milliers '.', décimal ',', <= 2 décimales
// - format_monnaie      : "$" + format_nombre_local
//
// L’affichage calculatrice suit la mise en page de Number#toString (JS) pour que
// les sorties soient identiques à celles de l’outil web d’origine.

/// Au-delà, pas d’arrondi : on affiche la valeur brute.
const SEUIL_BRUT: f64 = 1e12;

/// Décimales gardées par l’arrondi d’affichage.
const DECIMALES_AFFICHAGE: usize = 10;

/// Décimales max du format es-CO.
const DECIMALES_LOCALES: usize = 2;

/* ------------------------ Mise en page "Number#toString" ------------------------ */

/// Chiffres significatifs les plus courts (round-trip) + exposant décimal n,
/// tels que |x| = 0.d1d2...dk × 10^n. x fini et non nul.
fn chiffres_et_exposant(x: f64) -> (String, i32) {
    // "{:e}" donne déjà la forme la plus courte : "1.2345e6", "1e-7"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let e: i32 = exp.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    (chiffres, e + 1)
}

/// Rend un f64 comme le ferait `String(x)` en JavaScript.
///
/// - notation positionnelle pour 1e-6 <= |x| < 1e21
/// - sinon exposant : "1e-7", "1.5e+21"
/// - -0 s’affiche "0"
pub fn format_js(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (d, n) = chiffres_et_exposant(x);
    let k = d.len() as i32;

    let corps = if k <= n && n <= 21 {
        format!("{d}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = d.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{d}", "0".repeat((-n) as usize))
    } else {
        let (tete, reste) = d.split_at(1);
        let e = n - 1;
        let signe_e = if e < 0 { '-' } else { '+' };
        if reste.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/* ------------------------ Arrondi décimal ------------------------ */

/// Assez de décimales pour l’écriture EXACTE de tout f64 (plus petit sous-normal : 2^-1074).
const DECIMALES_EXACTES: usize = 1074;

/// Arrondit un texte décimal sans signe ("123.4567") à `garder` décimales,
/// demi vers l’extérieur (sur les chiffres donnés, pas sur le binaire).
/// Retourne (partie entière, partie fractionnaire de longueur `garder`).
fn arrondir_chiffres(txt: &str, garder: usize) -> (String, String) {
    let (entier, frac) = txt.split_once('.').unwrap_or((txt, ""));

    let mut chiffres: Vec<u8> = entier
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(garder))
        .collect();

    // le premier chiffre écarté décide : >= 5 => on monte (retenue)
    if frac.as_bytes().get(garder).is_some_and(|&c| c >= b'5') {
        let mut i = chiffres.len();
        loop {
            if i == 0 {
                chiffres.insert(0, b'1');
                break;
            }
            i -= 1;
            if chiffres[i] == b'9' {
                chiffres[i] = b'0';
            } else {
                chiffres[i] += 1;
                break;
            }
        }
    }

    let coupe = chiffres.len() - garder;
    let ent: String = chiffres[..coupe].iter().map(|&b| b as char).collect();
    let fr: String = chiffres[coupe..].iter().map(|&b| b as char).collect();
    (ent, fr)
}

/* ------------------------ Affichage calculatrice ------------------------ */

/// Affichage d’un résultat de calculatrice.
///
/// |x| >= 1e12 : valeur brute. Sinon arrondi à 10 décimales (comme toFixed :
/// sur la valeur exacte, demi vers l’extérieur), zéros finaux retirés.
pub fn format_resultat(x: f64) -> String {
    if x.abs() >= SEUIL_BRUT {
        return format_js(x);
    }
    let exact = format!("{:.prec$}", x.abs(), prec = DECIMALES_EXACTES);
    let (ent, frac) = arrondir_chiffres(&exact, DECIMALES_AFFICHAGE);
    let arrondi = format!("{ent}.{frac}").parse::<f64>().unwrap_or(x.abs());
    format_js(if x < 0.0 { -arrondi } else { arrondi })
}

/* ------------------------ Style es-CO ------------------------ */

/// Groupe les chiffres d’une partie entière par milliers avec '.'.
fn grouper_milliers(entier: &str) -> String {
    let mut out = String::with_capacity(entier.len() + entier.len() / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (entier.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Nombre au format local es-CO : "1.234,5", "119.000", "-0,75".
/// Au plus 2 décimales (arrondi au plus proche, demi vers l’extérieur).
pub fn format_nombre_local(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let signe = if x.is_sign_negative() { "-" } else { "" };
    // chiffres les plus courts ("1.005"), puis arrondi sur ces chiffres
    let (entier, frac) = arrondir_chiffres(&format!("{}", x.abs()), DECIMALES_LOCALES);
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        format!("{signe}{}", grouper_milliers(&entier))
    } else {
        format!("{signe}{},{frac}", grouper_milliers(&entier))
    }
}

/// Montant affiché : "$119.000", "$1.234,5". Non fini => "$0".
pub fn format_monnaie(x: f64) -> String {
    if !x.is_finite() {
        return "$0".to_string();
    }
    format!("${}", format_nombre_local(x))
}
