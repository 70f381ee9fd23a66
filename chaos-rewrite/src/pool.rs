//! Pools of random parameters shared by the rules.
//!
//! Every value drawn from these pools is valid for the role it plays: bases are positive and not
//! 1, multipliers and divisors are positive, "one" forms evaluate to 1, and "zero" forms evaluate
//! to 0.

use chaos_expr::Expr;
use log::warn;
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng, RngCore};

/// Bases for change of base, nested logarithms and the exponent-log relation.
static BASES: Lazy<Vec<Expr>> = Lazy::new(|| vec![
    Expr::int(2),
    Expr::int(3),
    Expr::int(5),
    Expr::int(10),
    Expr::e(),
    Expr::pow(Expr::int(2), Expr::int(2)),
    Expr::pow(Expr::int(3), Expr::int(2)),
]);

/// `lg(n)`
fn lg(n: i64) -> Expr {
    Expr::log(Expr::int(10), Expr::int(n))
}

/// `expr^2`
fn square(expr: Expr) -> Expr {
    Expr::pow(expr, Expr::int(2))
}

/// Builds the candidate identities over `lg(2)` and `lg(5)`, all of which equal 1 because
/// `lg(2) + lg(5) = lg(10) = 1`.
fn log10_identities() -> Vec<Expr> {
    vec![
        // lg 2 + lg 5
        Expr::add(lg(2), lg(5)),
        // lg^2 2 + lg 2 lg 5 + lg 5
        Expr::add(Expr::add(square(lg(2)), Expr::mul(lg(2), lg(5))), lg(5)),
        // lg^2 5 + lg 2 lg 5 + lg 2
        Expr::add(Expr::add(square(lg(5)), Expr::mul(lg(2), lg(5))), lg(2)),
        // (lg 2 + lg 5)^2
        square(Expr::add(lg(2), lg(5))),
        // lg^2 2 + 2 lg 2 lg 5 + lg^2 5
        Expr::add(
            Expr::add(square(lg(2)), Expr::mul(Expr::mul(Expr::int(2), lg(2)), lg(5))),
            square(lg(5)),
        ),
        // lg^2 5 + lg 2 lg 50
        Expr::add(square(lg(5)), Expr::mul(lg(2), lg(50))),
    ]
}

/// Identities equal to 1, verified numerically before first use.
static LOG10_IDENTITIES: Lazy<Vec<Expr>> = Lazy::new(|| {
    let mut identities = log10_identities();
    identities.retain(|identity| {
        let ok = identity.approx_eq(1.0, 1e-12);
        if !ok {
            warn!("dropping log identity `{}`, which does not evaluate to 1", identity);
        }
        ok
    });
    identities
});

/// Draws a logarithm base.
pub fn base(rng: &mut dyn RngCore) -> Expr {
    BASES.choose(&mut *rng).cloned().unwrap_or_else(|| Expr::int(2))
}

/// Draws a positive multiplier / divisor for the argument of a logarithm with the given base.
///
/// Most of the time this is a small power of the base itself, so that the extra logarithm
/// simplifies to an integer; otherwise it is a small integer or a fraction of small integers.
pub fn multiplier(base: &Expr, rng: &mut dyn RngCore) -> Expr {
    let roll: f64 = rng.gen();
    if roll < 0.6 {
        Expr::pow(base.clone(), Expr::int(rng.gen_range(1..=3)))
    } else if roll < 0.85 {
        Expr::int(rng.gen_range(2..=5))
    } else {
        let num = rng.gen_range(2..=5);
        let mut den = rng.gen_range(2..=5);
        while den == num {
            den = rng.gen_range(2..=5);
        }
        Expr::div(Expr::int(num), Expr::int(den))
    }
}

/// Draws a small nonzero integer factor.
pub fn factor(rng: &mut dyn RngCore) -> i64 {
    rng.gen_range(2..=9)
}

/// Draws an expression that evaluates to exactly 1.
pub fn one(rng: &mut dyn RngCore) -> Expr {
    match rng.gen_range(0..5) {
        0 => Expr::int(1),
        1 => Expr::div(Expr::int(2), Expr::int(2)),
        2 => Expr::pow(Expr::int(1), Expr::int(rng.gen_range(2..=5))),
        3 => Expr::log(Expr::int(2), Expr::int(2)),
        _ => {
            let k = rng.gen_range(3..=9);
            Expr::div(Expr::int(k), Expr::int(k))
        },
    }
}

/// Draws an expression that evaluates to exactly 0.
pub fn zero(rng: &mut dyn RngCore) -> Expr {
    match rng.gen_range(0..4) {
        0 => Expr::int(0),
        1 => Expr::sub(Expr::int(2), Expr::int(2)),
        2 => Expr::mul(Expr::int(0), Expr::int(rng.gen_range(2..=5))),
        _ => Expr::log(Expr::int(3), Expr::int(1)),
    }
}

/// Draws an identity over `lg(2)` and `lg(5)` that evaluates to 1.
pub fn log10_one(rng: &mut dyn RngCore) -> Expr {
    LOG10_IDENTITIES.choose(&mut *rng)
        .cloned()
        .unwrap_or_else(|| Expr::add(lg(2), lg(5)))
}

#[cfg(test)]
mod tests {
    use chaos_expr::Latex;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn every_identity_is_one() {
        for identity in log10_identities() {
            assert!(identity.approx_eq(1.0, 1e-12), "{} != 1", identity);
        }
        assert_eq!(LOG10_IDENTITIES.len(), log10_identities().len());
    }

    #[test]
    fn identity_markup() {
        assert_eq!(
            log10_identities()[1].as_display().to_string(),
            "\\lg^{2}{2} + \\lg{2} \\lg{5} + \\lg{5}",
        );
    }

    #[test]
    fn draws_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let b = base(&mut rng).eval().unwrap();
            assert!(b > 0.0 && b != 1.0);

            let m = multiplier(&Expr::int(3), &mut rng).eval().unwrap();
            assert!(m > 0.0);

            assert_eq!(one(&mut rng).eval().unwrap(), 1.0);
            assert_eq!(zero(&mut rng).eval().unwrap(), 0.0);
            assert!(log10_one(&mut rng).approx_eq(1.0, 1e-12));
        }
    }
}
