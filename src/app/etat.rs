//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, réponse, erreur,
//! réglages, démarche) et offrir des opérations simples (C/CLR/AC) sans
//! logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Sur erreur, JAMAIS de réponse périmée à l'écran : la réponse
//!   précédente s'efface avec l'erreur qui la remplace.
//! - La fermeture (mot de fermeture tapé) est une demande ; c'est
//!   app.rs qui l'exécute.

use crate::noyau::{Reglages, Strategie};

/// Démarche côté UI (jetons + RPN en texte).
#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub reponse: String,     // réponse décimale (∞ / -∞ / NaN compris)
    pub erreur: String,      // message d'erreur (étape + détail)
    pub reponse_dispo: bool, // false si erreur ou rien d'évalué

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- réglages du noyau ---
    pub reglages: Reglages,

    // --- cycle de vie ---
    // Mot de fermeture reçu : l'hôte doit fermer la fenêtre.
    pub fermeture_demandee: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            reponse: String::new(),
            erreur: String::new(),
            reponse_dispo: false,
            demarche: Demarche::default(),
            reglages: Reglages::default(),
            fermeture_demandee: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// État initial avec des réglages choisis au lancement.
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats). Les réglages de
    /// lancement (marqueur, mot de fermeture, stratégie) survivent.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer réponse + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.reponse.clear();
        self.erreur.clear();
        self.reponse_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Déposer une erreur. La réponse précédente disparaît avec elle :
    /// pas de réponse périmée à côté d'une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        self.reponse.clear();
        self.reponse_dispo = false;
        self.demarche = Demarche::default();

        self.focus_entree = true;
    }

    /// Déposer une réponse complète (texte décimal + démarche).
    pub fn set_reponse(&mut self, reponse: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.reponse = reponse.into();
        self.reponse_dispo = true;
        self.demarche = demarche;

        self.focus_entree = true;
    }

    /// Changer de stratégie. Les résultats de l'ancienne stratégie ne
    /// décrivent plus ce que ferait "=" : on les efface.
    pub fn choisir_strategie(&mut self, strategie: Strategie) {
        if self.reglages.strategie != strategie {
            self.reglages.strategie = strategie;
            self.clear_resultats();
        }
    }

    /// Le mot de fermeture a été tapé : demander la fermeture à app.rs.
    pub fn demander_fermeture(&mut self) {
        self.fermeture_demandee = true;
    }
}
