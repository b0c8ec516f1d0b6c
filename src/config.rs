// src/config.rs
//
// Options de lancement (natif seulement : pas de ligne de commande en wasm).

use clap::Parser;

/// Calculatrice quatre opérations (shunting-yard + RPN).
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Options {
    /// Évalue une expression sans ouvrir de fenêtre, puis affiche le résultat (ou "E")
    #[arg(short, long, allow_hyphen_values = true)]
    pub expr: Option<String>,

    /// Filtre de logs par défaut (syntaxe RUST_LOG), ignoré si RUST_LOG est défini
    #[arg(long, default_value = "info")]
    pub log: String,

    /// Largeur initiale de la fenêtre
    #[arg(long, default_value_t = 360.0)]
    pub largeur: f32,

    /// Hauteur initiale de la fenêtre
    #[arg(long, default_value_t = 520.0)]
    pub hauteur: f32,
}
