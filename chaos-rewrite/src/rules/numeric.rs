//! Rewrite rules for numeric literals.

use chaos_expr::{BinOpKind, Expr, Literal};
use rand::{seq::SliceRandom, Rng, RngCore};
use crate::{ctxt::Ctxt, pool, rules::do_numeric};

/// Bases used to express integers `n >= 3` as `log_p(p^n)`.
const POWER_BASES: [i64; 4] = [2, 3, 5, 10];

/// The largest argument `p^n` produced when expressing an integer as a logarithm.
const MAX_POWER: i64 = 100_000;

/// Integers larger than this in magnitude are never searched for factors.
const MAX_FACTORED: u64 = 1_000_000;

/// `v = m + n`, for a random integer `m` strictly between 0 and `v`.
///
/// Applies to integers with `|v| > 1`, and to floats `v > 1` (where `m` is an integer no larger
/// than `v`).
pub fn split_sum(lit: Literal, rng: &mut dyn RngCore) -> Option<Expr> {
    match lit {
        Literal::Integer(v) if v > 1 => {
            let m = rng.gen_range(1..v);
            Some(Expr::add(Expr::int(m), Expr::int(v - m)))
        },
        Literal::Integer(v) if v < -1 => {
            let m = rng.gen_range(v + 1..0);
            Some(Expr::add(Expr::int(m), Expr::int(v - m)))
        },
        Literal::Float(v) if v > 1.0 && v < 1e15 => {
            let m = rng.gen_range(1..=v.floor() as i64);
            Some(Expr::add(Expr::int(m), Expr::Literal(Literal::Float(v - m as f64))))
        },
        _ => None,
    }
}

/// Returns the nontrivial positive factors of `n`, that is, the factors in `2..n`.
fn factors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            small.push(i);
            if i * i != n {
                large.push(n / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// `v = m * n` for a random nontrivial factor `m` of the integer `v`, or `v = (v*r) / r` for a
/// random `r` if `v` is prime.
///
/// Applies to integers with `|v| > 1`. Integers above [`MAX_FACTORED`] in magnitude always take
/// the fraction form.
pub fn split_product(lit: Literal, rng: &mut dyn RngCore) -> Option<Expr> {
    let v = lit.as_integer().filter(|v| v.unsigned_abs() > 1)?;
    let candidates = if v.unsigned_abs() <= MAX_FACTORED {
        factors(v.unsigned_abs())
    } else {
        Vec::new()
    };
    match candidates.choose(&mut *rng) {
        Some(&m) => {
            let m = m as i64;
            Some(Expr::mul(Expr::int(m), Expr::int(v / m)))
        },
        None => {
            let r = rng.gen_range(2..=5);
            Some(Expr::div(Expr::int(v.checked_mul(r)?), Expr::int(r)))
        },
    }
}

/// Splits a numeric literal into a sum or a product, each with probability 1/2. Floats are only
/// ever split into sums.
pub fn split(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_numeric(expr, |lit| {
        if lit.as_integer().is_some() && ctxt.rng.gen_bool(0.5) {
            split_product(lit, ctxt.rng)
        } else {
            split_sum(lit, ctxt.rng)
        }
    })
}

/// Replaces a small constant with a logarithm of the same value.
///
/// - `0` becomes `log_b(1)`
/// - `1` becomes `log_b(b)`
/// - `2` becomes `log_b(b^2)`
/// - an integer `n >= 3` becomes `log_p(p^n)` half of the time, for `p` in 2, 3, 5 and 10, as long
/// as `p^n` stays reasonably small
pub fn constant_to_log(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_numeric(expr, |lit| {
        let rng = &mut *ctxt.rng;
        let choices = if lit.is(0) {
            vec![
                Expr::log(Expr::int(2), Expr::int(1)),
                Expr::log(Expr::int(3), Expr::int(1)),
                Expr::log(Expr::int(10), Expr::int(1)),
                Expr::log(Expr::e(), Expr::int(1)),
            ]
        } else if lit.is(1) {
            vec![
                Expr::log(Expr::int(2), Expr::int(2)),
                Expr::log(Expr::int(3), Expr::int(3)),
                Expr::log(Expr::int(5), Expr::int(5)),
                Expr::log(Expr::int(10), Expr::int(10)),
                Expr::log(Expr::e(), Expr::e()),
            ]
        } else if lit.is(2) {
            vec![
                Expr::log(Expr::int(2), Expr::int(4)),
                Expr::log(Expr::int(3), Expr::int(9)),
                Expr::log(Expr::int(5), Expr::int(25)),
                Expr::log(Expr::int(10), Expr::int(100)),
                Expr::log(Expr::e(), Expr::pow(Expr::e(), Expr::int(2))),
            ]
        } else {
            let n = lit.as_integer().filter(|&n| n >= 3)?;
            if !rng.gen_bool(0.5) {
                return None;
            }
            let exponent = u32::try_from(n).ok()?;
            POWER_BASES.iter()
                .filter_map(|&p| {
                    let power = p.checked_pow(exponent).filter(|&power| power <= MAX_POWER)?;
                    Some(Expr::log(Expr::int(p), Expr::int(power)))
                })
                .collect()
        };

        choices.choose(&mut *rng).cloned()
    })
}

/// `v = c^(log_c(v))` for a positive numeric literal `v` and a random base `c`.
pub fn exponent_log(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_numeric(expr, |lit| {
        if lit.value() <= 0.0 {
            return None;
        }

        let c = pool::base(ctxt.rng);
        Some(Expr::pow(c.clone(), Expr::log(c, Expr::Literal(lit))))
    })
}

/// Rewrites a numeric literal `v > 1` as `(v*p) / p`, or a sum / difference as a fraction over a
/// common denominator, `(a*d ± b*d) / d`, for random `p` and `d`.
pub fn fraction_padding(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    match expr {
        Expr::Literal(lit) if lit.is_numeric() && lit.value() > 1.0 => {
            let p = pool::factor(ctxt.rng);
            Some(Expr::div(Expr::mul(expr.clone(), Expr::int(p)), Expr::int(p)))
        },
        Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) => {
            let op = if matches!(expr, Expr::Add(..)) { BinOpKind::Add } else { BinOpKind::Sub };
            let d = pool::factor(ctxt.rng);
            Some(Expr::div(
                Expr::binary(
                    op,
                    Expr::mul((**lhs).clone(), Expr::int(d)),
                    Expr::mul((**rhs).clone(), Expr::int(d)),
                ),
                Expr::int(d),
            ))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn factor_list() {
        assert_eq!(factors(12), vec![2, 3, 4, 6]);
        assert_eq!(factors(16), vec![2, 4, 8]);
        assert!(factors(13).is_empty());
    }

    #[test]
    fn product_split_of_twelve() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let expr = split_product(Literal::Integer(12), &mut rng).unwrap();
            let Expr::Mul(m, n) = &expr else {
                panic!("expected a product, got {}", expr);
            };
            let (m, n) = (m.as_integer().unwrap(), n.as_integer().unwrap());
            assert_eq!(m * n, 12);
            assert!((2..12).contains(&m));
        }
    }

    #[test]
    fn product_split_of_prime() {
        let mut rng = StdRng::seed_from_u64(1);
        let expr = split_product(Literal::Integer(7), &mut rng).unwrap();
        let Expr::Div(num, den) = &expr else {
            panic!("expected a fraction, got {}", expr);
        };
        assert_eq!(num.as_integer().unwrap(), 7 * den.as_integer().unwrap());
    }

    #[test]
    fn large_integers_are_not_factored() {
        // 999983 is prime, so trial division would run up to 999983 before finding a factor
        let v = 999_983_i64.pow(3);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let expr = split_product(Literal::Integer(v), &mut rng).unwrap();
            let Expr::Div(num, den) = &expr else {
                panic!("expected a fraction, got {}", expr);
            };
            let den = den.as_integer().unwrap();
            assert!((2..=5).contains(&den));
            assert_eq!(num.as_integer().unwrap(), v * den);
        }

        // the bound itself is still factored
        let mut rng = StdRng::seed_from_u64(0);
        let expr = split_product(Literal::Integer(MAX_FACTORED as i64), &mut rng).unwrap();
        assert!(matches!(expr, Expr::Mul(..)));
    }

    #[test]
    fn sum_split() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for v in [2, 9, 100, -5] {
                let expr = split_sum(Literal::Integer(v), &mut rng).unwrap();
                assert!(matches!(expr, Expr::Add(..)));
                assert_eq!(expr.eval().unwrap(), v as f64);
            }

            let expr = split_sum(Literal::Float(2.5), &mut rng).unwrap();
            assert_eq!(expr.eval().unwrap(), 2.5);
        }
    }

    #[test]
    fn small_values_do_not_split() {
        let mut rng = StdRng::seed_from_u64(0);
        for v in [-1, 0, 1] {
            assert_eq!(split_sum(Literal::Integer(v), &mut rng), None);
            assert_eq!(split_product(Literal::Integer(v), &mut rng), None);
        }
        assert_eq!(split_product(Literal::Float(6.0), &mut rng), None);
    }
}
