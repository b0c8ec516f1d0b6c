// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{ErreurNoyau, Resultat};

/// Les quatre opérateurs binaires du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
        }
    }

    /// `*` et `/` lient plus fort que `+` et `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux (ex: 1.5) et décimaux sans partie entière (ex: .5)
/// - opérateurs + - * /
///
/// Toute la chaîne doit être consommée : un espace interne, une lettre
/// ou un point isolé ("12.", ".") est une erreur.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let octets = s.as_bytes();
    let mut i: usize = 0;

    while i < octets.len() {
        let c = octets[i];

        if let Some(op) = Op::depuis_char(c as char) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == b'.' {
            let start = i;
            while i < octets.len() && octets[i].is_ascii_digit() {
                i += 1;
            }

            // partie fractionnaire : le point doit être suivi d'au moins un chiffre
            if i < octets.len() && octets[i] == b'.' {
                let apres_point = i + 1;
                if apres_point < octets.len() && octets[apres_point].is_ascii_digit() {
                    i = apres_point;
                    while i < octets.len() && octets[i].is_ascii_digit() {
                        i += 1;
                    }
                } else {
                    return Err(malformee(s, i));
                }
            }

            // que des chiffres ASCII et au plus un point : le slice est sur une frontière UTF-8
            let texte = &s[start..i];
            let valeur = texte.parse::<f64>().map_err(|_| malformee(s, start))?;
            out.push(Tok::Num(valeur));
            continue;
        }

        return Err(malformee(s, i));
    }

    Ok(out)
}

fn malformee(s: &str, position: usize) -> ErreurNoyau {
    let caractere = s[position..].chars().next().unwrap_or('\u{FFFD}');
    ErreurNoyau::ExpressionMalformee {
        position,
        caractere,
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
