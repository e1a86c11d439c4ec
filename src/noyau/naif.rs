// src/noyau/naif.rs
//
// Stratégie naïve (sans parenthèses).
// -----------------------------------
// Deux listes parallèles (valeurs et opérations) réduites sur place
// jusqu'à une seule valeur, sans passer par la RPN :
//   1. la DERNIÈRE occurrence de '^' d'abord (associativité à droite),
//   2. sinon la première de '*' ou '/' (gauche → droite),
//   3. sinon '+' / '-' en tête de liste.
//
// Invariant à chaque tour : valeurs.len() == operations.len() + 1.
// Boucle explicite, jamais de récursion : chaque tour retire exactement
// une opération.

use super::erreurs::ErreurEval;
use super::jetons::{Jeton, Op};

/// Sépare une suite de jetons sans parenthèses en listes parallèles.
pub fn listes_depuis_jetons(jetons: &[Jeton]) -> Result<(Vec<f64>, Vec<Op>), ErreurEval> {
    let mut valeurs = Vec::new();
    let mut operations = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(x) => valeurs.push(x),
            Jeton::Operateur(op) => operations.push(op),
            Jeton::ParG | Jeton::ParD => {
                // le pré-scan de la stratégie naïve ne laisse pas passer
                // de parenthèse : invariant cassé si on en voit une
                return Err(ErreurEval::Interne(
                    "parenthèse dans la stratégie naïve".into(),
                ));
            }
        }
    }

    Ok((valeurs, operations))
}

/// Réduit les listes parallèles jusqu'à une seule valeur.
pub fn reduire(mut valeurs: Vec<f64>, mut operations: Vec<Op>) -> Result<f64, ErreurEval> {
    if valeurs.len() != operations.len() + 1 {
        return Err(ErreurEval::Interne(format!(
            "listes parallèles incohérentes: {} valeurs pour {} opérations",
            valeurs.len(),
            operations.len()
        )));
    }

    // Garde-fou : chaque tour retire exactement une opération, la boucle
    // ne peut donc pas dépasser le nombre d'opérations de départ.
    let max_tours = operations.len();
    let mut tours = 0usize;
    while !operations.is_empty() {
        tours += 1;
        if tours > max_tours {
            return Err(ErreurEval::Interne("réduction naïve sans fin".into()));
        }

        let i = if let Some(i) = operations.iter().rposition(|o| *o == Op::Puissance) {
            // toujours l'exposant le plus à droite : "2^3^2" = 2^(3^2)
            i
        } else if let Some(i) = operations
            .iter()
            .position(|o| matches!(o, Op::Fois | Op::Division))
        {
            i
        } else {
            0
        };

        valeurs[i] = operations[i].appliquer(valeurs[i], valeurs[i + 1]);
        valeurs.remove(i + 1);
        operations.remove(i);
    }

    Ok(valeurs[0])
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::analyser;

    fn reduit(s: &str) -> f64 {
        let jetons = analyser(s, 'n', false).unwrap();
        let (valeurs, operations) = listes_depuis_jetons(&jetons).unwrap();
        reduire(valeurs, operations).unwrap_or_else(|e| panic!("reduire({s:?}) erreur: {e}"))
    }

    #[test]
    fn valeur_seule() {
        assert_eq!(reduit("42"), 42.0);
        assert_eq!(reduit("n3.5"), -3.5);
    }

    #[test]
    fn priorites() {
        assert_eq!(reduit("2+3*4"), 14.0);
        assert_eq!(reduit("20/4*5"), 25.0);
        assert_eq!(reduit("2^3^2"), 512.0);
        assert_eq!(reduit("n5+n3"), -8.0);
    }

    #[test]
    fn melange_fois_division_gauche_droite() {
        // le plus à gauche de '*' / '/' s'applique en premier
        assert_eq!(reduit("8/2*2/4"), 2.0);
        assert_eq!(reduit("3*4/2"), 6.0);
    }

    #[test]
    fn exposants_en_chaine() {
        // 2^(2^(2^2)) = 2^16
        assert_eq!(reduit("2^2^2^2"), 65536.0);
    }

    #[test]
    fn valeurs_speciales() {
        assert_eq!(reduit("1/0"), f64::INFINITY);
        assert!(reduit("0/0").is_nan());
        assert_eq!(reduit("0^0"), 1.0);
    }

    #[test]
    fn invariant_des_listes() {
        // deux valeurs, zéro opération : invariant cassé
        let e = reduire(vec![1.0, 2.0], vec![]).unwrap_err();
        assert!(matches!(e, ErreurEval::Interne(_)));

        let e = reduire(vec![1.0], vec![Op::Plus]).unwrap_err();
        assert!(matches!(e, ErreurEval::Interne(_)));
    }

    #[test]
    fn parenthese_refusee() {
        let e = listes_depuis_jetons(&[Jeton::ParG]).unwrap_err();
        assert!(matches!(e, ErreurEval::Interne(_)));
    }

    #[test]
    fn longue_chaine_iterative() {
        // 800 additions : la boucle explicite ne consomme pas de pile
        let expr = vec!["1"; 800].join("+");
        assert_eq!(reduit(&expr), 800.0);
    }

    #[test]
    fn pas_de_plafond_arbitraire() {
        // le garde-fou suit la taille de l'entrée : 12 000 opérations
        // valides se réduisent jusqu'au bout
        let expr = vec!["1"; 12_001].join("+");
        assert_eq!(reduit(&expr), 12_001.0);
    }
}
