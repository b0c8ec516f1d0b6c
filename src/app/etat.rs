//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'écran de la calculatrice et les règles de saisie
//! (opérateur doublé, point décimal doublé) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

/// Marqueur affiché quand l'évaluation échoue (syntaxe, ÷0, débordement…).
pub const MARQUEUR_ERREUR: &str = "E";

const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,

    // --- démarche (dernier calcul réussi) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'écran après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute un caractère en respectant les règles de saisie.
    ///
    /// - opérateur sur écran vide : seul '-' passe (nombre négatif)
    /// - opérateur après opérateur : remplace le précédent
    /// - '.' : une seule fois par nombre ; "0." si le nombre est encore vide
    pub fn saisir(&mut self, c: char) {
        if est_operateur(c) {
            if self.affichage.is_empty() {
                if c == '-' {
                    self.affichage.push('-');
                }
                return;
            }
            if self.affichage.ends_with(est_operateur) {
                self.affichage.pop();
                self.affichage.push(c);
                return;
            }
        }

        if c == '.' {
            let dernier_nombre = self
                .affichage
                .rsplit(est_operateur)
                .next()
                .unwrap_or_default();
            if dernier_nombre.contains('.') {
                return;
            }
            if dernier_nombre.is_empty() {
                self.affichage.push_str("0.");
                return;
            }
        }

        self.affichage.push(c);
    }

    /// C : efface l'écran (et la démarche, qui ne le décrit plus).
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.affichage.pop();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (remplace l'écran).
    pub fn set_resultat(&mut self, texte: impl Into<String>, demarche: Demarche) {
        self.affichage = texte.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : échec, quelle qu'en soit la cause.
    pub fn set_erreur(&mut self) {
        self.affichage = MARQUEUR_ERREUR.to_string();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saisie(touches: &str) -> String {
        let mut app = AppCalc::default();
        for c in touches.chars() {
            app.saisir(c);
        }
        app.affichage
    }

    #[test]
    fn chiffres_et_operateurs() {
        assert_eq!(saisie("12+3*4"), "12+3*4");
    }

    #[test]
    fn operateur_sur_ecran_vide() {
        assert_eq!(saisie("+"), "");
        assert_eq!(saisie("*/"), "");
        assert_eq!(saisie("-"), "-");
        assert_eq!(saisie("-5"), "-5");
    }

    #[test]
    fn operateur_remplace_le_precedent() {
        assert_eq!(saisie("2+*"), "2*");
        assert_eq!(saisie("2+-/3"), "2/3");
        // le '-' initial est aussi remplaçable
        assert_eq!(saisie("-+"), "+");
    }

    #[test]
    fn point_decimal() {
        assert_eq!(saisie("."), "0.");
        assert_eq!(saisie("1.5.2"), "1.52");
        assert_eq!(saisie("1.5+."), "1.5+0.");
        assert_eq!(saisie("1.5+2.5"), "1.5+2.5");
        assert_eq!(saisie("3..."), "3.");
    }

    #[test]
    fn effacer_et_retour_arriere() {
        let mut app = AppCalc::default();
        for c in "12+".chars() {
            app.saisir(c);
        }
        app.retour_arriere();
        assert_eq!(app.affichage, "12");

        app.demarche.jetons = "1 2".into();
        app.effacer();
        assert!(app.affichage.is_empty());
        assert_eq!(app.demarche, Demarche::default());

        // sans effet sur un écran vide
        app.retour_arriere();
        assert!(app.affichage.is_empty());
    }

    #[test]
    fn erreur_affiche_le_marqueur() {
        let mut app = AppCalc::default();
        app.set_resultat("4", Demarche::default());
        app.set_erreur();
        assert_eq!(app.affichage, MARQUEUR_ERREUR);
    }
}
