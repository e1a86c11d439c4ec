// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Les parenthèses n'apparaissent qu'en stratégie RPN
//
// Le glue d'évaluation vit ici (eval_via_noyau) : c'est l'hôte qui
// retire les espaces et qui agit sur le mot de fermeture, le noyau ne
// fait que refuser ce mot.

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use crate::noyau::{evaluer, format_reponse, Strategie};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Flottante");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let indication = format!(
            "Ex: (2+3)*4, 2^3^2, {m}5+{m}3 — '{q}' pour quitter",
            m = self.reglages.marqueur,
            q = self.reglages.mot_fermeture
        );
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(indication)
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ.
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue, seulement si le champ est focus (pas de
        // déclenchement global quand l'utilisateur clique ailleurs).
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + stratégie
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface réponse + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Stratégie :");
            let mut strategie = self.reglages.strategie;
            ui.radio_value(&mut strategie, Strategie::Rpn, "RPN (parenthèses)")
                .on_hover_text("Shunting-yard puis machine à pile");
            ui.radio_value(&mut strategie, Strategie::Naif, "Naïf")
                .on_hover_text("Listes parallèles, sans parenthèses");
            if strategie != self.reglages.strategie {
                self.choisir_strategie(strategie);
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        // Touches rapides + "="
        ui.horizontal_wrapped(|ui| {
            if matches!(self.reglages.strategie, Strategie::Rpn) {
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                ui.separator();
            }

            self.bouton_insert(ui, "+", "+");
            self.bouton_insert(ui, "-", "-");
            self.bouton_insert(ui, "*", "*");
            self.bouton_insert(ui, "/", "/");
            self.bouton_insert(ui, "^", "^");

            ui.separator();

            // marqueur unaire (négatif), distinct du '-' binaire
            let marqueur = self.reglages.marqueur.to_string();
            self.bouton_insert(ui, &marqueur, &marqueur);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_flottant")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "/", "/");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn backspace_entree(&mut self) {
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Réponse :");
        if self.reponse_dispo {
            Self::champ_monospace(ui, "reponse_out", &self.reponse, 2);
        } else {
            ui.monospace("—");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() && !to_insert.is_empty() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Évalue l'entrée via le noyau et dépose réponse ou erreur.
    ///
    /// Contrat d'hôte : les espaces se retirent ICI (le noyau exige une
    /// chaîne sans espaces), et le mot de fermeture se traite ICI (le
    /// noyau se contente de le refuser).
    fn eval_via_noyau(&mut self) {
        let s: String = self.entree.chars().filter(|c| !c.is_whitespace()).collect();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        if self.reglages.est_mot_fermeture(&s) {
            self.demander_fermeture();
            return;
        }

        match evaluer(&s, &self.reglages) {
            Ok((reponse, demarche)) => {
                self.set_reponse(
                    format_reponse(reponse),
                    Demarche {
                        jetons: demarche.jetons,
                        rpn: demarche.rpn,
                    },
                );
            }
            Err(e) => {
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
