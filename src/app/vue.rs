// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Écran : TextEdit une ligne, Enter calcule
// - Pavé : chiffres, opérateurs, '.', '=', C, DEL
// - Démarche : jetons + RPN du dernier calcul

use eframe::egui;
use tracing::debug;

use super::etat::{AppCalc, Demarche};
use crate::noyau::{eval_detaille, Sortie};

/// Pavé 4 colonnes, ligne par ligne.
const PAVE: [[Touche; 4]; 4] = [
    [Touche::Car('7'), Touche::Car('8'), Touche::Car('9'), Touche::Car('/')],
    [Touche::Car('4'), Touche::Car('5'), Touche::Car('6'), Touche::Car('*')],
    [Touche::Car('1'), Touche::Car('2'), Touche::Car('3'), Touche::Car('-')],
    [Touche::Car('0'), Touche::Car('.'), Touche::Egal, Touche::Car('+')],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_demarche(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_source("ecran_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter calcule (seulement si l'écran a le focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }

                self.bouton(ui, Touche::Effacer);
                self.bouton(ui, Touche::RetourArriere);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(&self.demarche.jetons);
                ui.add_space(4.0);
                ui.label("RPN :");
                ui.monospace(&self.demarche.rpn);
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(touche.libelle()));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Car(c) => self.saisir(c),
            Touche::Egal => self.calculer(),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
        }
        self.focus_entree = true;
    }

    /// Évalue l'écran via le noyau.
    ///
    /// - écran vide : rien ne change
    /// - succès : l'écran affiche la valeur
    /// - échec (toute cause) : l'écran affiche "E"
    pub fn calculer(&mut self) {
        match eval_detaille(&self.affichage) {
            Ok((Sortie::Vide, _)) => {}
            Ok((Sortie::Valeur(texte), d)) => {
                let demarche = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                };
                self.set_resultat(texte, demarche);
            }
            Err(e) => {
                debug!(expr = %self.affichage, erreur = %e, "évaluation refusée");
                self.set_erreur();
            }
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Car(char),
    Egal,
    Effacer,
    RetourArriere,
}

impl Touche {
    fn libelle(self) -> String {
        match self {
            Touche::Car(c) => c.to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::RetourArriere => "DEL".to_string(),
        }
    }
}
