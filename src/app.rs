// src/app.rs
//
// Calculatrice Flottante : module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App
//
// Important:
// - La gestion d'Enter est faite dans vue.rs (quand le champ a le focus).
// - La demande de fermeture (mot de fermeture tapé) s'exécute ici : la
//   vue la pose dans l'état, update() la traduit en commande viewport.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Le mot de fermeture a été tapé : on ferme la fenêtre.
        if self.fermeture_demandee {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Raccourci clavier global minimal :
        // ESC = effacer seulement l'entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
