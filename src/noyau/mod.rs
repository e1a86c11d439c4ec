//! Noyau flottant (f64)
//!
//! Organisation interne :
//! - erreurs.rs : erreurs typées (étape + détail)
//! - jetons.rs  : classification + tokenisation
//! - rpn.rs     : shunting-yard + machine à pile
//! - naif.rs    : réduction par listes parallèles (sans parenthèses)
//! - format.rs  : réponse en texte décimal
//! - eval.rs    : réglages + pipeline complet

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod naif;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::ErreurEval;
pub use eval::{evaluer, Demarche, Reglages, Strategie};
pub use format::format_reponse;
