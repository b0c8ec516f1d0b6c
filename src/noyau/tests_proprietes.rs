//! Tests propriétés : deux opérandes, déterminisme, limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - référence : le même calcul f64 fait directement, passé par la même lecture

use std::time::{Duration, Instant};

use super::erreur::ErreurNoyau;
use super::lecture::lecture_decimale;
use super::{eval_expression, Sortie};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Nombre positif sous forme texte + sa valeur (telle que le tokenizer la lira).
fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(1000);
    let txt = match rng.pick(3) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", rng.pick(100)),
        _ => format!(".{}", rng.pick(1000) + 1),
    };
    let v = txt.parse::<f64>().unwrap_or_else(|e| panic!("{txt:?}: {e}"));
    (txt, v)
}

fn reference(op: char, a: f64, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => a / b,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn deux_operandes_valeur_correcte() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let (ta, a) = gen_nombre(&mut rng);
        let (tb, b) = gen_nombre(&mut rng);
        let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
        if op == '/' && b == 0.0 {
            continue;
        }

        let expr = format!("{ta}{op}{tb}");
        let attendu = lecture_decimale(reference(op, a, b));

        match eval_expression(&expr) {
            Ok(Sortie::Valeur(v)) => assert_eq!(v, attendu, "expr={expr:?}"),
            autre => panic!("expr={expr:?} => {autre:?}"),
        }
    }
}

#[test]
fn division_par_zero_toujours_refusee() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let (ta, _a) = gen_nombre(&mut rng);
        for zero in ["0", "0.0", ".0", "00"] {
            let expr = format!("{ta}/{zero}");
            assert!(
                matches!(eval_expression(&expr), Err(ErreurNoyau::ResultatNonFini(v)) if v.is_nan()),
                "expr={expr:?}"
            );
        }
    }
}

#[test]
fn negatif_en_tete_comme_soustraction_depuis_zero() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let (ta, _) = gen_nombre(&mut rng);
        let (tb, _) = gen_nombre(&mut rng);
        let op = ['+', '-'][rng.pick(2) as usize];

        let unaire = eval_expression(&format!("-{ta}{op}{tb}"));
        let explicite = eval_expression(&format!("0-{ta}{op}{tb}"));
        assert_eq!(unaire, explicite, "a={ta} op={op} b={tb}");
    }
}

#[test]
fn longue_chaine_sans_pile_recursive() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 10 000 termes : tout est itératif
    let expr = vec!["1"; 10_000].join("+");
    budget(t0, max);

    assert_eq!(eval_expression(&expr), Ok(Sortie::Valeur("10000".into())));

    let expr = vec!["2"; 2_000].join("*-");
    assert!(eval_expression(&expr).is_err(), "2^2000 déborde");
}
