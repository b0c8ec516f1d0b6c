// src/noyau/lecture.rs

/// Nombre de décimales gardées à l'affichage.
/// Assez pour un écran de calculatrice, assez peu pour masquer
/// les artefacts binaires (0.1+0.2 = 0.30000000000000004).
pub const CHIFFRES_DECIMAUX: usize = 12;

/// Texte affiché pour une valeur FINIE.
///
/// - entier : forme entière exacte ("4", "-2", "100000000000000000000")
/// - sinon : arrondi à 12 décimales, puis forme la plus courte ("0.3")
/// - -0 s'affiche "0"
pub fn lecture_decimale(valeur: f64) -> String {
    debug_assert!(valeur.is_finite());

    if valeur.fract() == 0.0 {
        return format_court(valeur);
    }

    let fixe = format!("{valeur:.prec$}", prec = CHIFFRES_DECIMAUX);
    let arrondie = fixe.parse::<f64>().unwrap_or(valeur);
    format_court(arrondie)
}

/// Display de f64 = plus courte forme qui se relit à l'identique, sans exposant.
fn format_court(v: f64) -> String {
    // + 0.0 : -0 devient 0
    format!("{}", v + 0.0)
}
