// src/noyau/format.rs

/// Réponse en texte décimal pour l'hôte.
///
/// Les valeurs spéciales IEEE sont des réponses, pas des erreurs : on
/// les épelle ∞ / -∞ / NaN au lieu du "inf" de l'affichage f64 brut.
pub fn format_reponse(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == f64::INFINITY {
        return "∞".to_string();
    }
    if x == f64::NEG_INFINITY {
        return "-∞".to_string();
    }
    format!("{x}")
}
