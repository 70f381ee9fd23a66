//! The catalog of rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to rewrite and the rewrite
//! [`Ctxt`], and returns `Some(expr)` with an equivalent, more complicated expression if the rule
//! applies, or `None` if it does not. A rule that does not apply is not an error: the rewriter
//! simply keeps the node unchanged.
//!
//! Rules never mutate their input. Any randomness is drawn from [`Ctxt::rng`].

pub mod logarithm;
pub mod numeric;
pub mod padding;

use chaos_expr::{Expr, Literal};
use crate::{ctxt::Ctxt, step::Step};
use std::fmt;

/// The signature shared by every rule.
pub type RuleFn = fn(&Expr, &mut Ctxt<'_>) -> Option<Expr>;

/// A named entry in a rule registry.
#[derive(Clone, Copy)]
pub struct Rule {
    /// A short, unique name for the rule, used in logs.
    pub name: &'static str,

    /// The step recorded when the rule fires.
    pub step: Step,

    /// The transformation.
    pub apply: RuleFn,
}

impl Rule {
    /// Creates a new rule.
    pub const fn new(name: &'static str, step: Step, apply: RuleFn) -> Self {
        Self { name, step, apply }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("step", &self.step)
            .finish()
    }
}

/// If the expression is a logarithm, calls the given transformation function with the base and
/// the argument.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_log(
    expr: &Expr,
    f: impl FnOnce(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Log(base, arg) = expr {
        f(&**base, &**arg)
    } else {
        None
    }
}

/// If the expression is a numeric literal (not `e` or `pi`), calls the given transformation
/// function with it.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_numeric(
    expr: &Expr,
    f: impl FnOnce(Literal) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Literal(lit) if lit.is_numeric() => f(*lit),
        _ => None,
    }
}

/// Returns true if `candidate` evaluates to the same value as `original`, within a relative
/// tolerance of `1e-9`.
///
/// If `original` cannot be evaluated, there is no value to preserve and any candidate is
/// accepted.
pub(crate) fn preserves_value(original: &Expr, candidate: &Expr) -> bool {
    match original.eval() {
        Ok(value) => candidate.approx_eq(value, 1e-9),
        Err(_) => true,
    }
}

/// The rules of the simple rule set.
pub fn simple() -> Vec<Rule> {
    vec![
        Rule::new("log-addition", Step::LogAddition, logarithm::log_addition),
        Rule::new("log-subtraction", Step::LogSubtraction, logarithm::log_subtraction),
        Rule::new("power-rule", Step::PowerRule, logarithm::power_rule),
        Rule::new("change-of-base", Step::ChangeOfBase, logarithm::change_of_base),
        Rule::new("numeric-split", Step::NumericSplit, numeric::split),
        Rule::new("identity-padding", Step::IdentityPadding, padding::identity_padding),
    ]
}

/// The rules of the rich rule set, which contains every rule in the catalog.
pub fn rich() -> Vec<Rule> {
    vec![
        Rule::new("log-addition", Step::LogAddition, logarithm::log_addition),
        Rule::new("log-subtraction", Step::LogSubtraction, logarithm::log_subtraction),
        Rule::new("power-rule", Step::PowerRule, logarithm::power_rule),
        Rule::new("change-of-base", Step::ChangeOfBase, logarithm::change_of_base),
        Rule::new("double-change-of-base", Step::DoubleChangeOfBase, logarithm::double_change_of_base),
        Rule::new("log-multiplication", Step::LogMultiplication, logarithm::log_multiplication),
        Rule::new("numeric-split", Step::NumericSplit, numeric::split),
        Rule::new("constant-to-log", Step::ConstantToLog, numeric::constant_to_log),
        Rule::new("polynomial-log-padding", Step::PolynomialLogPadding, padding::polynomial_log_padding),
        Rule::new("fraction-padding", Step::FractionPadding, numeric::fraction_padding),
        Rule::new("reciprocal", Step::Reciprocal, logarithm::reciprocal),
        Rule::new("exponent-log", Step::ExponentLog, numeric::exponent_log),
        Rule::new("nested-log", Step::NestedLog, logarithm::nested_log),
        Rule::new("identity-padding", Step::IdentityPadding, padding::identity_padding),
        Rule::new("combined", Step::Combined, logarithm::combined),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_is_superset_of_simple() {
        let rich = rich();
        for rule in simple() {
            assert!(rich.iter().any(|r| r.name == rule.name && r.step == rule.step));
        }
        assert_eq!(rich.len(), 15);
    }

    #[test]
    fn names_are_unique() {
        let rich = rich();
        for (i, rule) in rich.iter().enumerate() {
            assert!(rich[i + 1..].iter().all(|r| r.name != rule.name));
        }
    }
}
