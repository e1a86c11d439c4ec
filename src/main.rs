// src/main.rs
//
// Calculatrice Flottante : point d'entrée natif
// ---------------------------------------------
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: options de lancement + démarrage eframe
//
// Options de lancement :
//   --naif              stratégie naïve (sans parenthèses)
//   --marqueur=<c>      marqueur unaire (défaut: n)
//   --fermeture=<mot>   mot de fermeture (défaut: quit)

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;
use noyau::{Reglages, Strategie};

const TITRE_APP: &str = "Calculatrice Flottante";

fn reglages_depuis_args() -> Result<Reglages, String> {
    let base = Reglages::default();
    let mut marqueur = base.marqueur;
    let mut mot_fermeture = base.mot_fermeture;
    let mut strategie = base.strategie;

    for arg in std::env::args().skip(1) {
        if arg == "--naif" {
            strategie = Strategie::Naif;
        } else if let Some(v) = arg.strip_prefix("--marqueur=") {
            let mut it = v.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => marqueur = c,
                _ => return Err(format!("--marqueur attend un seul caractère, reçu '{v}'")),
            }
        } else if let Some(v) = arg.strip_prefix("--fermeture=") {
            mot_fermeture = v.to_string();
        } else {
            return Err(format!("option inconnue: '{arg}'"));
        }
    }

    Reglages::nouveau(marqueur, mot_fermeture, strategie).map_err(|e| e.to_string())
}

fn main() -> eframe::Result<()> {
    let reglages = match reglages_depuis_args() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(reglages)))),
    )
}
