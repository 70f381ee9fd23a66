/// Possible rewrite steps, one for each rule in the catalog.
///
/// In the identities below, `b` is a logarithm base, `a` an argument, `v` a numeric literal, and
/// `c`, `k`, `p` are drawn at random when the rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `log_b(a) = log_b(a*c) - log_b(c)`
    LogAddition,

    /// `log_b(a) = log_b(a/c) + log_b(c)`
    LogSubtraction,

    /// `log_b(a) = 1/k * log_b(a^k)`
    /// `log_b(a) = k * log_b(a^(1/k))`
    PowerRule,

    /// `log_b(a) = log_c(a) / log_c(b)`
    ChangeOfBase,

    /// Change of base, followed by another rewrite of the result one level deeper.
    DoubleChangeOfBase,

    /// `k * log_b(a) = log_b(a^k)`
    LogMultiplication,

    /// `v = m + n`
    /// `v = m * n`
    /// `v = (v*r) / r`
    NumericSplit,

    /// `1 = log_2(2)`
    /// `0 = log_2(1)`
    /// `3 = log_2(8)`
    /// etc.
    ConstantToLog,

    /// `v = v * (lg(2) + lg(5))` and other identities over `lg(2)` and `lg(5)`
    PolynomialLogPadding,

    /// `v = (v*p) / p`
    /// `a + b = (a*d + b*d) / d`
    FractionPadding,

    /// `log_b(a) = 1 / log_a(b)`
    Reciprocal,

    /// `v = c^(log_c(v))`
    ExponentLog,

    /// `log_b(a) = log_b(log_c(c^a))`
    NestedLog,

    /// `x*y = x*y*1`
    /// `x+y = x+y+0`
    /// `x/y = (x*f)/(y*f)`
    IdentityPadding,

    /// Change of base, followed by the power rule on the new numerator.
    Combined,
}
