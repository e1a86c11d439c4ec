// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> machine à pile
// --------------------------------------
// - `vers_rpn`    : infixe (avec parenthèses) → postfixe.
// - `evaluer_rpn` : balayage postfixe avec une pile de f64.
//
// Règles :
// - on dépile tant que l'opérateur au sommet a une priorité strictement
//   supérieure, OU égale quand l'opérateur entrant s'associe à gauche ;
// - '(' bloque le dépilage, ')' vide jusqu'à la '(' correspondante ;
// - une parenthèse restante en fin de conversion est une faute.

use super::erreurs::ErreurEval;
use super::jetons::Jeton;

/// Convertit une suite de jetons infixe en RPN (notation postfixe).
///
/// Cas dégénéré : un seul Nombre ressort tel quel, sans conversion.
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    if let [seul @ Jeton::Nombre(_)] = jetons {
        return Ok(vec![*seul]);
    }

    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(_) => sortie.push(jeton),

            Jeton::ParG => ops.push(jeton),

            Jeton::ParD => loop {
                match ops.pop() {
                    Some(Jeton::ParG) => break,
                    Some(autre) => sortie.push(autre),
                    None => {
                        return Err(ErreurEval::ShuntingYard(
                            "parenthèse fermante sans ouvrante".into(),
                        ));
                    }
                }
            },

            Jeton::Operateur(op) => {
                while let Some(&Jeton::Operateur(haut)) = ops.last() {
                    let doit_sortir = haut.priorite() > op.priorite()
                        || (haut.priorite() == op.priorite() && !op.associatif_droite());
                    if doit_sortir {
                        ops.pop();
                        sortie.push(Jeton::Operateur(haut));
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops ; une '(' restante n'a jamais été fermée
    while let Some(reste) = ops.pop() {
        if matches!(reste, Jeton::ParG) {
            return Err(ErreurEval::ShuntingYard("parenthèses non fermées".into()));
        }
        sortie.push(reste);
    }

    Ok(sortie)
}

/// Évalue une suite postfixe : Nombre → empiler, opérateur → dépiler b
/// puis a, empiler a op b.
///
/// Une pile sous-alimentée signale une RPN mal formée : c'est un
/// invariant cassé (`Interne`), pas une faute de l'utilisateur : une
/// entrée passée par l'analyse et la conversion ne peut pas en produire.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Nombre(x) => pile.push(x),

            Jeton::Operateur(op) => {
                let b = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::Interne("pile RPN sous-alimentée".into()))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::Interne("pile RPN sous-alimentée".into()))?;
                pile.push(op.appliquer(a, b));
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurEval::Interne("parenthèse inattendue en RPN".into()));
            }
        }
    }

    let reponse = pile
        .pop()
        .ok_or_else(|| ErreurEval::Interne("RPN vide".into()))?;
    if !pile.is_empty() {
        return Err(ErreurEval::Interne("RPN mal formée: valeurs restantes".into()));
    }
    Ok(reponse)
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{analyser, format_jetons};

    fn rpn_de(s: &str) -> Vec<Jeton> {
        let jetons = analyser(s, 'n', true).unwrap();
        vers_rpn(&jetons).unwrap_or_else(|e| panic!("vers_rpn({s:?}) erreur: {e}"))
    }

    fn eval_de(s: &str) -> f64 {
        evaluer_rpn(&rpn_de(s)).unwrap_or_else(|e| panic!("evaluer_rpn({s:?}) erreur: {e}"))
    }

    #[test]
    fn ordre_postfixe() {
        assert_eq!(format_jetons(&rpn_de("2+3*4")), "2 3 4 * +");
        assert_eq!(format_jetons(&rpn_de("(2+3)*4")), "2 3 + 4 *");
        // ^ à droite : 2 (3 ^ 2) et non (2 ^ 3) 2
        assert_eq!(format_jetons(&rpn_de("2^3^2")), "2 3 2 ^ ^");
        // priorités égales à gauche : (20 / 4) * 5
        assert_eq!(format_jetons(&rpn_de("20/4*5")), "20 4 / 5 *");
    }

    #[test]
    fn nombre_seul_court_circuite() {
        assert_eq!(rpn_de("42"), vec![Jeton::Nombre(42.0)]);
        assert_eq!(rpn_de("n7"), vec![Jeton::Nombre(-7.0)]);
    }

    #[test]
    fn parentheses_non_appariees() {
        let jetons = analyser("(2+3", 'n', true).unwrap();
        assert!(matches!(
            vers_rpn(&jetons),
            Err(ErreurEval::ShuntingYard(_))
        ));

        // "2+3)" passe l'analyse jeton par jeton mais pas la conversion
        let jetons = analyser("2+3)", 'n', true).unwrap();
        assert!(matches!(
            vers_rpn(&jetons),
            Err(ErreurEval::ShuntingYard(_))
        ));
    }

    #[test]
    fn machine_a_pile() {
        assert_eq!(eval_de("2+3*4"), 14.0);
        assert_eq!(eval_de("(2+3)*4"), 20.0);
        assert_eq!(eval_de("2^3^2"), 512.0);
        assert_eq!(eval_de("20/4*5"), 25.0);
        assert_eq!(eval_de("n5+n3"), -8.0);
    }

    #[test]
    fn valeurs_speciales_ieee() {
        assert_eq!(eval_de("1/0"), f64::INFINITY);
        assert_eq!(eval_de("n1/0"), f64::NEG_INFINITY);
        assert!(eval_de("0/0").is_nan());
        assert_eq!(eval_de("0^0"), 1.0);
    }

    #[test]
    fn pile_sous_alimentee_est_interne() {
        use crate::noyau::jetons::Op;
        // RPN forgée à la main : un opérateur sans ses deux opérandes
        let rpn = vec![Jeton::Nombre(1.0), Jeton::Operateur(Op::Plus)];
        assert!(matches!(evaluer_rpn(&rpn), Err(ErreurEval::Interne(_))));
    }
}
