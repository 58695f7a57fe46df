// src/noyau/jetons.rs

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::ErreurEval;

lazy_static! {
    /// Forme acceptée d’un nombre : signe optionnel, chiffres, point optionnel, chiffres.
    /// ".5" passe, "5." et "1.2.3" non.
    static ref NOMBRE: Regex =
        Regex::new(r"^-?\d*\.?\d+$").expect("motif constant de nombre");
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
}

impl Tok {
    /// Jeton opérateur pour un caractère, si c’en est un.
    pub fn operateur(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        }
    }

    pub fn is_operateur(&self) -> bool {
        !matches!(self, Tok::Num(_))
    }
}

fn is_op_char(c: char) -> bool {
    Tok::operateur(c).is_some()
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 12.5, .5)
/// - moins unaire collé au nombre : en tête, ou juste après un opérateur ("2*-3")
/// - opérateurs + - * /
///
/// Les espaces sont ignorés. Entrée vide => liste vide.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let debut_nombre = c.is_ascii_digit()
            || c == '.'
            || (c == '-' && (i == 0 || is_op_char(chars[i - 1])));

        if debut_nombre {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if !NOMBRE.is_match(&txt) {
                return Err(ErreurEval::NombreInvalide(txt));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        if let Some(op) = Tok::operateur(c) {
            out.push(op);
            i += 1;
            continue;
        }

        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
