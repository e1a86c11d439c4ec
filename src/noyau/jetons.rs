// src/noyau/jetons.rs
//
// Classification + tokenisation.
// ------------------------------
// Entrée : une chaîne non vide, sans espaces (l'hôte les retire), déjà
// passée par la liste blanche de caractères (`caractere_admis`).
// Sortie : la suite de jetons, ou la PREMIÈRE violation de grammaire.
//
// Le tokeniseur est une petite machine à états sur la catégorie du
// caractère précédent {Nombre, Point, Operateur, ParG, ParD}, avec :
// - un tampon pour le littéral en cours,
// - un drapeau "point déjà vu" remis à zéro à chaque opérateur émis,
// - un drapeau "marqueur déjà vu" remis à zéro de la même façon.
//
// Le marqueur unaire (configurable, 'n' par défaut) n'est PAS une
// catégorie : il se classe en Nombre et préfixe un '-' au littéral en
// cours d'assemblage.

use super::erreurs::ErreurEval;

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    Puissance,
}

impl Op {
    pub fn depuis(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Division),
            '^' => Some(Op::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Division => '/',
            Op::Puissance => '^',
        }
    }

    /// Priorité : ^ avant */ avant +-.
    pub fn priorite(self) -> u8 {
        match self {
            Op::Puissance => 3,
            Op::Fois | Op::Division => 2,
            Op::Plus | Op::Moins => 1,
        }
    }

    /// Seul ^ s'associe à droite.
    pub fn associatif_droite(self) -> bool {
        matches!(self, Op::Puissance)
    }

    /// Sémantique IEEE-754 : la division par zéro et 0^0 passent par
    /// les règles standard (±∞, NaN, powf), jamais par une erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Division => a / b,
            Op::Puissance => a.powf(b),
        }
    }
}

/* ------------------------ Jetons ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Operateur(Op),
    ParG,
    ParD,
}

/// Liste de jetons en texte (panneau "Démarche" + messages de test).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(x) => format!("{x}"),
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

/* ------------------------ Classification ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Atome {
    Nombre,
    Point,
    Operateur,
    ParG,
    ParD,
}

/// Catégorie lexicale d'un caractère.
///
/// Les parenthèses ne sont reconnues que dans la variante qui les
/// supporte (stratégie RPN). Tout le reste se classe en Nombre : le
/// pré-scan a déjà écarté les caractères inconnus.
pub fn classer(c: char, parentheses: bool) -> Atome {
    if parentheses && c == '(' {
        return Atome::ParG;
    }
    if parentheses && c == ')' {
        return Atome::ParD;
    }
    if c == '.' {
        return Atome::Point;
    }
    if Op::depuis(c).is_some() {
        return Atome::Operateur;
    }
    Atome::Nombre
}

/// Liste blanche du pré-scan : chiffres, point, opérateurs, marqueur
/// unaire, et parenthèses si la variante les supporte. Indépendante de
/// la position dans la chaîne.
pub fn caractere_admis(c: char, marqueur: char, parentheses: bool) -> bool {
    c.is_ascii_digit()
        || c == '.'
        || c == marqueur
        || Op::depuis(c).is_some()
        || (parentheses && (c == '(' || c == ')'))
}

/* ------------------------ Tokenisation ------------------------ */

fn erreur_analyse(msg: impl Into<String>) -> ErreurEval {
    ErreurEval::Analyse(msg.into())
}

fn vider_tampon(tampon: &mut String, jetons: &mut Vec<Jeton>) -> Result<(), ErreurEval> {
    let jeton = tampon
        .parse::<f64>()
        .map(Jeton::Nombre)
        .map_err(|_| ErreurEval::Interne(format!("littéral illisible: '{tampon}'")))?;
    jetons.push(jeton);
    tampon.clear();
    Ok(())
}

/// Tokenise une expression en un seul balayage gauche → droite.
///
/// Échoue sur la première violation (pas d'accumulation d'erreurs) :
/// - opérateur binaire ou ')' en tête,
/// - symbole redondant (opérateur/point doublé, marqueur mal placé),
/// - opérande manquante après un opérateur, un point, un marqueur ou '(',
/// - opérateur manquant avant '(' ou après ')'.
pub fn analyser(s: &str, marqueur: char, parentheses: bool) -> Result<Vec<Jeton>, ErreurEval> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Err(erreur_analyse("entrée vide"));
    }

    let mut jetons: Vec<Jeton> = Vec::new();
    let mut tampon = String::new();
    let mut point_utilise = false;
    let mut marqueur_utilise = false;
    // vrai si le caractère PRÉCÉDENT est le marqueur (littéral "-" nu)
    let mut marqueur_pendant = false;

    // Premier caractère : pas d'opérateur binaire ni de ')' en tête.
    let c0 = chars[0];
    let mut prec = classer(c0, parentheses);
    if c0 == marqueur {
        tampon.push('-');
        marqueur_utilise = true;
        marqueur_pendant = true;
        prec = Atome::Nombre;
    } else {
        match prec {
            Atome::Operateur => {
                return Err(erreur_analyse(format!("opérande manquante avant '{c0}'")));
            }
            Atome::ParD => {
                return Err(erreur_analyse("opérande manquante avant ')'"));
            }
            Atome::ParG => jetons.push(Jeton::ParG),
            Atome::Point => {
                tampon.push('.');
                point_utilise = true;
            }
            Atome::Nombre => tampon.push(c0),
        }
    }

    for i in 1..chars.len() {
        let c = chars[i];

        // Marqueur unaire : ouvre un littéral négatif. Interdit après un
        // nombre, un point, une ')' ou un autre marqueur.
        if c == marqueur {
            if marqueur_utilise || point_utilise || prec == Atome::Nombre || prec == Atome::ParD {
                return Err(erreur_analyse("symbole redondant"));
            }
            tampon.clear();
            tampon.push('-');
            marqueur_utilise = true;
            marqueur_pendant = true;
            prec = Atome::Nombre;
            continue;
        }

        match classer(c, parentheses) {
            Atome::Nombre => {
                if prec == Atome::ParD {
                    return Err(erreur_analyse(format!("opérateur manquant avant '{c}'")));
                }
                if prec == Atome::Operateur || prec == Atome::ParG {
                    tampon.clear();
                }
                tampon.push(c);
                marqueur_pendant = false;
                prec = Atome::Nombre;
            }

            Atome::Point => {
                if prec == Atome::Point || (point_utilise && prec == Atome::Nombre) {
                    return Err(erreur_analyse("symbole redondant"));
                }
                if prec == Atome::ParD {
                    return Err(erreur_analyse("opérateur manquant avant '.'"));
                }
                if prec == Atome::Operateur || prec == Atome::ParG {
                    tampon.clear();
                }
                tampon.push('.');
                point_utilise = true;
                marqueur_pendant = false;
                prec = Atome::Point;
            }

            Atome::Operateur => {
                if marqueur_pendant {
                    return Err(erreur_analyse(format!("opérande manquante après '{marqueur}'")));
                }
                if prec == Atome::Point {
                    return Err(erreur_analyse("opérande manquante après '.'"));
                }
                if prec == Atome::Operateur {
                    return Err(erreur_analyse("symbole redondant"));
                }
                if prec == Atome::ParG {
                    return Err(erreur_analyse(format!("opérande manquante avant '{c}'")));
                }
                if prec == Atome::Nombre {
                    vider_tampon(&mut tampon, &mut jetons)?;
                }
                // prec == ParD : rien à vider
                point_utilise = false;
                marqueur_utilise = false;
                let op = Op::depuis(c)
                    .ok_or_else(|| ErreurEval::Interne(format!("opérateur inconnu '{c}'")))?;
                jetons.push(Jeton::Operateur(op));
                prec = Atome::Operateur;
            }

            Atome::ParG => {
                // "2(", "2.(", ")(" : il manque un opérateur.
                if matches!(prec, Atome::Nombre | Atome::Point | Atome::ParD) {
                    return Err(erreur_analyse("opérateur manquant avant '('"));
                }
                jetons.push(Jeton::ParG);
                prec = Atome::ParG;
            }

            Atome::ParD => {
                if marqueur_pendant
                    || matches!(prec, Atome::Operateur | Atome::ParG | Atome::Point)
                {
                    return Err(erreur_analyse("opérande manquante avant ')'"));
                }
                if prec == Atome::Nombre {
                    vider_tampon(&mut tampon, &mut jetons)?;
                }
                jetons.push(Jeton::ParD);
                prec = Atome::ParD;
            }
        }
    }

    // Fin de chaîne : le littéral en cours se termine ici, ou il manque
    // une opérande.
    if marqueur_pendant {
        return Err(erreur_analyse(format!("opérande manquante après '{marqueur}'")));
    }
    match prec {
        Atome::Operateur | Atome::ParG => {
            let dernier = chars[chars.len() - 1];
            Err(erreur_analyse(format!("opérande manquante après '{dernier}'")))
        }
        Atome::Point => Err(erreur_analyse("opérande manquante après '.'")),
        Atome::Nombre => {
            vider_tampon(&mut tampon, &mut jetons)?;
            Ok(jetons)
        }
        Atome::ParD => Ok(jetons),
    }
}

/* ------------------------ Tests ------------------------ */
