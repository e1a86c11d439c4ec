//! Tests de propriétés : accord des deux stratégies + robustesse.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - expressions générées VALIDES (le fuzz de grammaire vit dans jetons.rs)
//! - budget temps global
//! - propriété clé : sur toute expression sans parenthèses, la stratégie
//!   naïve et la stratégie RPN répondent pareil (à la tolérance
//!   flottante près, NaN compris)

use std::time::{Duration, Instant};

use super::eval::{evaluer, Reglages, Strategie};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions valides ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    // petits littéraux, marqueur unaire et point inclus ; zéro présent
    // (les divisions par zéro doivent rester des réponses, pas des fautes)
    let mut s = String::new();
    if rng.coin() {
        s.push('n');
    }
    match rng.pick(10) {
        0 => s.push('0'),
        k => s.push(char::from(b'0' + k as u8)),
    }
    if rng.coin() {
        s.push('.');
        s.push(char::from(b'0' + rng.pick(10) as u8));
    }
    s
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    }
}

/// Expression plate (sans parenthèses) : littéral (op littéral)*.
fn gen_expr_plate(rng: &mut Rng, nb_ops: usize) -> String {
    let mut s = gen_litteral(rng);
    for _ in 0..nb_ops {
        s.push(gen_operateur(rng));
        s.push_str(&gen_litteral(rng));
    }
    s
}

/// Expression parenthésée valide : atome = littéral | (expr).
fn gen_expr_parenthesee(rng: &mut Rng, profondeur: usize) -> String {
    let atome = |rng: &mut Rng, profondeur: usize| -> String {
        if profondeur == 0 || rng.pick(3) > 0 {
            gen_litteral(rng)
        } else {
            format!("({})", gen_expr_parenthesee(rng, profondeur - 1))
        }
    };

    let mut s = atome(rng, profondeur);
    for _ in 0..rng.pick(3) {
        s.push(gen_operateur(rng));
        s.push_str(&atome(rng, profondeur));
    }
    s
}

/* ------------------------ Comparaison flottante ------------------------ */

fn accord(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a == b {
        return true; // couvre ±∞ et les égalités exactes
    }
    let ecart = (a - b).abs();
    ecart <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn accord_naif_rpn_sur_expressions_plates() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let naif = Reglages {
        strategie: Strategie::Naif,
        ..Reglages::default()
    };
    let rpn = Reglages::default();

    for _ in 0..300 {
        budget(t0, max);

        let nb_ops = 1 + rng.pick(6) as usize;
        let expr = gen_expr_plate(&mut rng, nb_ops);

        let (a, _) = evaluer(&expr, &naif)
            .unwrap_or_else(|e| panic!("naïf a rejeté {expr:?}: {e}"));
        let (b, _) = evaluer(&expr, &rpn)
            .unwrap_or_else(|e| panic!("rpn a rejeté {expr:?}: {e}"));

        assert!(accord(a, b), "désaccord sur {expr:?}: naïf={a} rpn={b}");
    }
}

#[test]
fn expressions_parenthesees_toujours_acceptees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let reglages = Reglages::default();

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr_parenthesee(&mut rng, 4);
        // générée valide : toute erreur ici est un défaut du pipeline
        evaluer(&expr, &reglages).unwrap_or_else(|e| panic!("rejet de {expr:?}: {e}"));
    }
}

#[test]
fn determinisme_du_pipeline() {
    let reglages = Reglages::default();

    let tirage = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let nb_ops = 1 + rng.pick(5) as usize;
                let expr = gen_expr_plate(&mut rng, nb_ops);
                format!("{:?}", evaluer(&expr, &reglages))
            })
            .collect()
    };

    // même seed => mêmes expressions => mêmes réponses, bit à bit
    assert_eq!(tirage(0xFEED_u64), tirage(0xFEED_u64));
}

#[test]
fn longue_expression_sans_debordement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 900 termes : les deux boucles sont itératives, pas de pile à creuser
    let expr = vec!["1"; 900].join("+");
    budget(t0, max);

    let naif = Reglages {
        strategie: Strategie::Naif,
        ..Reglages::default()
    };
    assert_eq!(evaluer(&expr, &naif).unwrap().0, 900.0);
    assert_eq!(evaluer(&expr, &Reglages::default()).unwrap().0, 900.0);
}
