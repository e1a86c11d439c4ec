//! Noyau : évaluation (pipeline réel)
//!
//! mot de fermeture -> pré-scan (liste blanche) -> jetons
//!        -> (shunting-yard -> machine à pile)  [stratégie Rpn]
//!        ou (listes parallèles -> réduction)   [stratégie Naïf]
//!
//! Tout l'état (tampon du tokeniseur, piles, listes) est local à
//! l'appel : pas de remise à zéro à faire entre deux évaluations, et
//! deux threads peuvent évaluer en parallèle sans se gêner.

use super::erreurs::ErreurEval;
use super::jetons::{analyser, caractere_admis, format_jetons};
use super::naif::{listes_depuis_jetons, reduire};
use super::rpn::{evaluer_rpn, vers_rpn};

/* ------------------------ Réglages ------------------------ */

/// Marqueur unaire par défaut ('n' comme négatif).
const MARQUEUR_DEFAUT: char = 'n';

/// Mot de fermeture par défaut.
const MOT_FERMETURE_DEFAUT: &str = "quit";

/// Garde-fou : un mot de fermeture trop court (ou numérique) se
/// confondrait avec une expression.
const MOT_FERMETURE_MIN: usize = 4;

/// Les deux stratégies d'évaluation, interchangeables côté appelant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategie {
    /// Shunting-yard + machine à pile ; parenthèses admises.
    #[default]
    Rpn,
    /// Réduction par listes parallèles ; sans parenthèses.
    Naif,
}

#[derive(Clone, Debug)]
pub struct Reglages {
    pub marqueur: char,
    pub mot_fermeture: String,
    pub strategie: Strategie,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            marqueur: MARQUEUR_DEFAUT,
            mot_fermeture: MOT_FERMETURE_DEFAUT.to_string(),
            strategie: Strategie::Rpn,
        }
    }
}

impl Reglages {
    /// Construit des réglages validés :
    /// - le marqueur ne doit pas entrer en collision avec un caractère
    ///   réservé (chiffre, point, opérateur, parenthèse),
    /// - le mot de fermeture fait au moins 4 caractères et n'est pas
    ///   lisible comme un nombre.
    pub fn nouveau(
        marqueur: char,
        mot_fermeture: impl Into<String>,
        strategie: Strategie,
    ) -> Result<Self, ErreurEval> {
        if marqueur.is_ascii_digit()
            || marqueur == '.'
            || marqueur == '('
            || marqueur == ')'
            || super::jetons::Op::depuis(marqueur).is_some()
        {
            return Err(ErreurEval::ExpressionInvalide(format!(
                "'{marqueur}' est réservé, il ne peut pas servir de marqueur unaire"
            )));
        }

        let mot_fermeture = mot_fermeture.into();
        if mot_fermeture.chars().count() < MOT_FERMETURE_MIN
            || mot_fermeture.parse::<f64>().is_ok()
        {
            return Err(ErreurEval::ExpressionInvalide(format!(
                "mot de fermeture '{mot_fermeture}' trop court ou numérique"
            )));
        }

        Ok(Self {
            marqueur,
            mot_fermeture,
            strategie,
        })
    }

    /// Vrai si l'entrée est le mot de fermeture (insensible à la casse).
    /// La décision de fermer l'hôte appartient à l'appelant.
    pub fn est_mot_fermeture(&self, s: &str) -> bool {
        s.eq_ignore_ascii_case(&self.mot_fermeture)
    }

    /// Les parenthèses ne sont admises qu'en stratégie RPN.
    pub fn parentheses(&self) -> bool {
        matches!(self.strategie, Strategie::Rpn)
    }
}

/* ------------------------ Pipeline ------------------------ */

/// Démarche (jetons + RPN en texte), pour le panneau d'explication.
/// `rpn` reste vide en stratégie naïve.
#[derive(Clone, Debug, Default)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne la réponse + la
/// démarche (jetons, rpn).
///
/// Contrat d'entrée : une seule expression, déjà débarrassée de ses
/// espaces par l'appelant. Contrat de sortie : une réponse f64 (y
/// compris ±∞ / NaN) ou la première erreur, jamais les deux.
pub fn evaluer(expression: &str, reglages: &Reglages) -> Result<(f64, Demarche), ErreurEval> {
    if expression.is_empty() {
        return Err(ErreurEval::ExpressionInvalide("entrée vide".into()));
    }

    // Le mot de fermeture n'est pas une expression : on le rejette
    // avant le tokeniseur, l'hôte décide quoi en faire.
    if reglages.est_mot_fermeture(expression) {
        return Err(ErreurEval::ExpressionInvalide(format!(
            "'{expression}' est le mot de fermeture, pas une expression"
        )));
    }

    // Pré-scan : liste blanche sur toute la chaîne, indépendante de la
    // position. Un caractère inconnu se signale avant toute grammaire.
    for c in expression.chars() {
        if !caractere_admis(c, reglages.marqueur, reglages.parentheses()) {
            return Err(ErreurEval::ExpressionInvalide(format!("'{c}' non reconnu")));
        }
    }

    let jetons = analyser(expression, reglages.marqueur, reglages.parentheses())?;

    match reglages.strategie {
        Strategie::Rpn => {
            let rpn = vers_rpn(&jetons)?;
            let reponse = evaluer_rpn(&rpn)?;
            let demarche = Demarche {
                jetons: format_jetons(&jetons),
                rpn: format_jetons(&rpn),
            };
            Ok((reponse, demarche))
        }
        Strategie::Naif => {
            let (valeurs, operations) = listes_depuis_jetons(&jetons)?;
            let reponse = reduire(valeurs, operations)?;
            let demarche = Demarche {
                jetons: format_jetons(&jetons),
                rpn: String::new(),
            };
            Ok((reponse, demarche))
        }
    }
}

/* ------------------------ Tests ------------------------ */
