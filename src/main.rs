// src/main.rs
//
// Calculatrice : point d'entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF : options clap, logs tracing, puis fenêtre eframe
//           (ou évaluation directe avec --expr, sans fenêtre)
// - WEB   : eframe::WebRunner sur <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
mod noyau;

use app::etat::MARQUEUR_ERREUR;
use app::AppCalc;
use noyau::Sortie;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Texte à imprimer pour une évaluation sans fenêtre (None : rien à évaluer).
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn texte_sans_fenetre(expr: &str) -> Option<String> {
    match noyau::eval_expression(expr) {
        Ok(Sortie::Vide) => None,
        Ok(Sortie::Valeur(texte)) => Some(texte),
        Err(e) => {
            tracing::warn!(expr, erreur = %e, "évaluation refusée");
            Some(MARQUEUR_ERREUR.to_string())
        }
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn init_logs(filtre_defaut: &str) {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filtre_defaut))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let options = config::Options::parse();
    init_logs(&options.log);

    if let Some(expr) = options.expr.as_deref() {
        if let Some(texte) = texte_sans_fenetre(expr) {
            println!("{texte}");
        }
        return Ok(());
    }

    tracing::info!(
        largeur = options.largeur,
        hauteur = options.hauteur,
        "ouverture de la fenêtre"
    );

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([options.largeur, options.hauteur])
            .with_min_inner_size([280.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d'entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l'élément trouvé n'est pas un <canvas>"))?;

        tracing::info!("démarrage web");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
