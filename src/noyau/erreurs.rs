// src/noyau/erreurs.rs
//
// Erreurs typées du noyau.
// ------------------------
// Une seule faute suffit : la première violation rencontrée (balayage
// gauche → droite) interrompt le pipeline, aucun résultat partiel.
//
// Les étapes :
// - ExpressionInvalide : pré-scan (caractère hors liste blanche, mot de
//   fermeture, entrée vide), avant toute tokenisation.
// - Analyse            : grammaire infixe (tokeniseur).
// - ShuntingYard       : parenthèses non appariées (conversion RPN).
// - Interne            : invariant cassé (pile RPN sous-alimentée, listes
//   parallèles incohérentes). Ne doit jamais se produire pour une entrée
//   qui a passé l'analyse.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Expression invalide — {0}")]
    ExpressionInvalide(String),

    #[error("Analyse — {0}")]
    Analyse(String),

    #[error("Shunting-yard — {0}")]
    ShuntingYard(String),

    #[error("Interne — {0}")]
    Interne(String),
}
