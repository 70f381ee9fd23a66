//! Rewrite rules for logarithms.

use chaos_expr::Expr;
use log::debug;
use rand::Rng;
use crate::{ctxt::Ctxt, pool, rules::{do_log, preserves_value}, step::Step};

/// `log_b(a) = log_c(a) / log_c(b)`
fn change_base(base: &Expr, arg: &Expr, new_base: Expr) -> Expr {
    Expr::div(
        Expr::log(new_base.clone(), arg.clone()),
        Expr::log(new_base, base.clone()),
    )
}

/// `log_b(a) = log_b(a*c) - log_b(c)`
pub fn log_addition(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let c = pool::multiplier(base, ctxt.rng);
        Some(Expr::sub(
            Expr::log(base.clone(), Expr::mul(arg.clone(), c.clone())),
            Expr::log(base.clone(), c),
        ))
    })
}

/// `log_b(a) = log_b(a/c) + log_b(c)`
pub fn log_subtraction(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let c = pool::multiplier(base, ctxt.rng);
        Some(Expr::add(
            Expr::log(base.clone(), Expr::div(arg.clone(), c.clone())),
            Expr::log(base.clone(), c),
        ))
    })
}

/// `log_b(a) = 1/k * log_b(a^k)`, or the dual form `log_b(a) = k * log_b(a^(1/k))`, for a
/// random `k` in `2..=4`.
pub fn power_rule(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let k = ctxt.rng.gen_range(2..=4);
        Some(if ctxt.rng.gen_bool(0.5) {
            Expr::mul(
                Expr::div(Expr::int(1), Expr::int(k)),
                Expr::log(base.clone(), Expr::pow(arg.clone(), Expr::int(k))),
            )
        } else {
            Expr::mul(
                Expr::int(k),
                Expr::log(base.clone(), Expr::pow(arg.clone(), Expr::div(Expr::int(1), Expr::int(k)))),
            )
        })
    })
}

/// `log_b(a) = log_c(a) / log_c(b)`, for a random base `c`.
pub fn change_of_base(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| Some(change_base(base, arg, pool::base(ctxt.rng))))
}

/// Applies [`change_of_base`], then runs the whole rewrite procedure again on the result, one
/// level deeper.
///
/// The result is evaluated and compared with the input. If they disagree, the attempt and the
/// steps of its nested rewrite are discarded, a new base is drawn, and the rule tries again, up to
/// [`Ctxt::retries`] more times before giving up.
pub fn double_change_of_base(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        for _ in 0..=ctxt.retries() {
            let changed = change_base(base, arg, pool::base(ctxt.rng));
            let mut nested: Vec<Step> = Vec::new();
            let candidate = ctxt.rewrite_nested(changed, &mut nested);
            if preserves_value(expr, &candidate) {
                nested.into_iter().for_each(|step| ctxt.steps.push(step));
                return Some(candidate);
            }
            debug!("double-change-of-base: rejected `{}` for `{}`", candidate, expr);
        }
        None
    })
}

/// `k * log_b(a) = log_b(a^k)`
///
/// Only applies when the left factor is a numeric literal and the right factor a logarithm.
pub fn log_multiplication(expr: &Expr, _: &mut Ctxt) -> Option<Expr> {
    let Expr::Mul(lhs, rhs) = expr else {
        return None;
    };

    match (&**lhs, &**rhs) {
        (Expr::Literal(k), Expr::Log(base, arg)) if k.is_numeric() => Some(Expr::log(
            (**base).clone(),
            Expr::pow((**arg).clone(), Expr::Literal(*k)),
        )),
        _ => None,
    }
}

/// `log_b(a) = 1 / log_a(b)`
///
/// Only applies when `a` is positive and not 1, so that it is a valid base.
pub fn reciprocal(expr: &Expr, _: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let a = arg.eval().ok()?;
        let b = base.eval().ok()?;
        if !(a > 0.0) || (a - 1.0).abs() <= 1e-9 || !(b > 0.0) {
            return None;
        }

        Some(Expr::div(Expr::int(1), Expr::log(arg.clone(), base.clone())))
    })
}

/// `log_b(a) = log_b(log_c(c^a))`, for a random base `c`.
///
/// Bases for which `c^a` would overflow are rejected; if no acceptable base is drawn within
/// [`Ctxt::retries`] extra attempts, the rule does not apply.
pub fn nested_log(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let a = arg.eval().ok()?;
        for _ in 0..=ctxt.retries() {
            let c = pool::base(ctxt.rng);
            let exponent = a * c.eval().ok()?.ln();
            if exponent.abs() > 600.0 {
                continue;
            }

            return Some(Expr::log(
                base.clone(),
                Expr::log(c.clone(), Expr::pow(c, arg.clone())),
            ));
        }
        None
    })
}

/// Applies [`change_of_base`], then [`power_rule`] to the new numerator.
///
/// `log_b(a) = (1/k * log_c(a^k)) / log_c(b)`
pub fn combined(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    do_log(expr, |base, arg| {
        let new_base = pool::base(ctxt.rng);
        let numerator = power_rule(&Expr::log(new_base.clone(), arg.clone()), ctxt)?;
        Some(Expr::div(numerator, Expr::log(new_base, base.clone())))
    })
}

#[cfg(test)]
mod tests {
    use chaos_expr::Expr;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::{
        options::{RewriteOptionsBuilder, RuleSet},
        rewrite::Rewriter,
        rules::{padding, Rule, RuleFn},
    };
    use super::*;

    fn apply_with(rewriter: &Rewriter, rule: RuleFn, expr: &Expr, seed: u64) -> Option<Expr> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut steps = ();
        let mut ctxt = Ctxt::new(rewriter, &mut rng, &mut steps, 0);
        rule(expr, &mut ctxt)
    }

    fn apply(rule: RuleFn, expr: &Expr, seed: u64) -> Option<Expr> {
        apply_with(&Rewriter::default(), rule, expr, seed)
    }

    fn log_2_8() -> Expr {
        Expr::log(Expr::int(2), Expr::int(8))
    }

    #[test]
    fn only_logarithms_match() {
        let not_logs = [
            Expr::int(8),
            Expr::add(Expr::int(1), Expr::int(2)),
            Expr::pow(Expr::int(2), Expr::int(3)),
        ];
        let rules: [RuleFn; 7] = [
            log_addition,
            log_subtraction,
            power_rule,
            change_of_base,
            reciprocal,
            nested_log,
            combined,
        ];
        for rule in rules {
            for expr in &not_logs {
                assert_eq!(apply(rule, expr, 0), None);
            }
        }
    }

    #[test]
    fn log_addition_shape() {
        for seed in 0..20 {
            let Some(Expr::Sub(lhs, rhs)) = apply(log_addition, &log_2_8(), seed) else {
                panic!("expected a difference");
            };
            let (Expr::Log(b1, product), Expr::Log(b2, c)) = (&*lhs, &*rhs) else {
                panic!("expected a difference of logarithms");
            };
            assert_eq!(**b1, Expr::int(2));
            assert_eq!(**b2, Expr::int(2));
            assert_eq!(**product, Expr::mul(Expr::int(8), (**c).clone()));
        }
    }

    #[test]
    fn log_subtraction_shape() {
        for seed in 0..20 {
            let Some(Expr::Add(lhs, rhs)) = apply(log_subtraction, &log_2_8(), seed) else {
                panic!("expected a sum");
            };
            let (Expr::Log(_, quotient), Expr::Log(_, c)) = (&*lhs, &*rhs) else {
                panic!("expected a sum of logarithms");
            };
            assert_eq!(**quotient, Expr::div(Expr::int(8), (**c).clone()));
        }
    }

    #[test]
    fn power_rule_value() {
        for seed in 0..50 {
            let rewritten = apply(power_rule, &log_2_8(), seed).unwrap();
            assert!(matches!(rewritten, Expr::Mul(..)));
            assert!(rewritten.approx_eq(3.0, 1e-12), "{}", rewritten);
        }
    }

    #[test]
    fn reciprocal_of_log() {
        assert_eq!(
            apply(reciprocal, &log_2_8(), 0),
            Some(Expr::div(Expr::int(1), Expr::log(Expr::int(8), Expr::int(2)))),
        );
    }

    #[test]
    fn reciprocal_rejects_invalid_base() {
        assert_eq!(apply(reciprocal, &Expr::log(Expr::int(2), Expr::int(1)), 0), None);
        assert_eq!(apply(reciprocal, &Expr::log(Expr::int(2), Expr::int(-4)), 0), None);
        assert_eq!(apply(reciprocal, &Expr::log(Expr::int(2), Expr::int(0)), 0), None);
    }

    #[test]
    fn log_multiplication_shape() {
        let expr = Expr::mul(Expr::int(3), Expr::log(Expr::int(2), Expr::int(5)));
        assert_eq!(
            apply(log_multiplication, &expr, 0),
            Some(Expr::log(Expr::int(2), Expr::pow(Expr::int(5), Expr::int(3)))),
        );

        let swapped = Expr::mul(Expr::log(Expr::int(2), Expr::int(5)), Expr::int(3));
        assert_eq!(apply(log_multiplication, &swapped, 0), None);

        let symbolic = Expr::mul(Expr::e(), Expr::log(Expr::int(2), Expr::int(5)));
        assert_eq!(apply(log_multiplication, &symbolic, 0), None);
    }

    #[test]
    fn nested_log_shape() {
        for seed in 0..20 {
            let Some(Expr::Log(base, inner)) = apply(nested_log, &log_2_8(), seed) else {
                panic!("expected a logarithm");
            };
            assert_eq!(*base, Expr::int(2));
            let Expr::Log(c, power) = &*inner else {
                panic!("expected a nested logarithm");
            };
            assert_eq!(**power, Expr::pow((**c).clone(), Expr::int(8)));
        }
    }

    #[test]
    fn nested_log_rejects_huge_powers() {
        // every base in the pool overflows for this argument
        let expr = Expr::log(Expr::int(2), Expr::int(100_000));
        assert_eq!(apply(nested_log, &expr, 0), None);
    }

    #[test]
    fn double_change_of_base_at_depth_limit() {
        // with nothing left to rewrite, the nested pass returns the changed base unchanged
        let rewriter = Rewriter::new(RewriteOptionsBuilder::new().max_depth(0).build());
        for seed in 0..20 {
            let rewritten = apply_with(&rewriter, double_change_of_base, &log_2_8(), seed).unwrap();
            let Expr::Div(num, den) = &rewritten else {
                panic!("expected a fraction");
            };
            assert!(matches!((&**num, &**den), (Expr::Log(..), Expr::Log(..))));
            assert!(rewritten.approx_eq(3.0, 1e-9));
        }
    }

    /// Adds 1 to any expression, which never preserves its value.
    fn shift(expr: &Expr, _: &mut Ctxt) -> Option<Expr> {
        Some(Expr::add(expr.clone(), Expr::int(1)))
    }

    fn apply_collecting(rewriter: &Rewriter, rule: RuleFn, expr: &Expr, seed: u64) -> (Option<Expr>, Vec<Step>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut steps = Vec::new();
        let mut ctxt = Ctxt::new(rewriter, &mut rng, &mut steps, 0);
        let result = rule(expr, &mut ctxt);
        (result, steps)
    }

    #[test]
    fn double_change_of_base_drops_steps_of_rejected_attempts() {
        // every nested rewrite changes the value, so every attempt is rejected
        let rewriter = Rewriter::new(RewriteOptionsBuilder::new()
            .max_depth(2)
            .retries(4)
            .rule_set(RuleSet::Custom(vec![Rule::new("shift", Step::NumericSplit, shift)]))
            .build());
        for seed in 0..20 {
            let (result, steps) = apply_collecting(&rewriter, double_change_of_base, &log_2_8(), seed);
            assert_eq!(result, None);
            assert!(steps.is_empty(), "{:?}", steps);
        }
    }

    #[test]
    fn double_change_of_base_keeps_steps_of_accepted_attempt() {
        let rewriter = Rewriter::new(RewriteOptionsBuilder::new()
            .max_depth(2)
            .rule_set(RuleSet::Custom(vec![
                Rule::new("identity-padding", Step::IdentityPadding, padding::identity_padding),
            ]))
            .build());
        for seed in 0..40 {
            let (result, steps) = apply_collecting(&rewriter, double_change_of_base, &log_2_8(), seed);
            let rewritten = result.unwrap();
            assert!(rewritten.approx_eq(3.0, 1e-9));

            // the nested pass only visits the fraction, which is padded or left alone
            let Expr::Div(num, _) = &rewritten else {
                panic!("expected a fraction, got {}", rewritten);
            };
            if matches!(&**num, Expr::Mul(..)) {
                assert_eq!(steps, vec![Step::IdentityPadding]);
            } else {
                assert!(steps.is_empty());
            }
        }
    }

    #[test]
    fn combined_shape() {
        for seed in 0..20 {
            let rewritten = apply(combined, &log_2_8(), seed).unwrap();
            let Expr::Div(num, den) = &rewritten else {
                panic!("expected a fraction");
            };
            assert!(matches!(&**num, Expr::Mul(..)));
            assert!(matches!(&**den, Expr::Log(..)));
            assert!(rewritten.approx_eq(3.0, 1e-9));
        }
    }
}
