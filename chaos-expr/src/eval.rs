//! Numeric evaluation of expressions.

use crate::{
    error::{kind::{DomainError, LogOperand}, Error},
    expr::Expr,
    fmt::log_markup_spans,
};
use std::f64::consts;

/// Computes `log_base(arg)`, reporting which operand is out of range if the logarithm is
/// undefined.
///
/// Bases of exactly 2, 10 and `e` use the dedicated functions, so that `log_2(8)` is exactly `3`.
pub fn log(base: f64, arg: f64) -> Result<f64, (LogOperand, f64)> {
    if !(base > 0.0) || base == 1.0 {
        return Err((LogOperand::Base, base));
    }
    if !(arg > 0.0) {
        return Err((LogOperand::Argument, arg));
    }

    Ok(if base == 2.0 {
        arg.log2()
    } else if base == 10.0 {
        arg.log10()
    } else if base == consts::E {
        arg.ln()
    } else {
        arg.ln() / base.ln()
    })
}

impl Expr {
    /// Evaluates the expression to a double-precision number.
    ///
    /// The only failure is a logarithm whose base is `<= 0` or `== 1`, or whose argument is
    /// `<= 0`, which produces a [`DomainError`]. Division by zero follows IEEE 754 and is not an
    /// error.
    pub fn eval(&self) -> Result<f64, Error> {
        Ok(match self {
            Self::Literal(lit) => lit.value(),
            Self::Add(lhs, rhs) => lhs.eval()? + rhs.eval()?,
            Self::Sub(lhs, rhs) => lhs.eval()? - rhs.eval()?,
            Self::Mul(lhs, rhs) => lhs.eval()? * rhs.eval()?,
            Self::Div(lhs, rhs) => lhs.eval()? / rhs.eval()?,
            Self::Pow(base, exp) => base.eval()?.powf(exp.eval()?),
            Self::Log(base, arg) => {
                log(base.eval()?, arg.eval()?).map_err(|(operand, value)| {
                    let (src, base_span, arg_span) = log_markup_spans(base, arg);
                    let span = match operand {
                        LogOperand::Base => base_span,
                        LogOperand::Argument => arg_span,
                    };
                    Error::new(src, vec![span], DomainError { operand, value })
                })?
            },
        })
    }

    /// Returns true if the expression evaluates to a value within `tolerance` of `expected`,
    /// relative to the magnitude of `expected` (or absolute, for magnitudes below 1).
    pub fn approx_eq(&self, expected: f64, tolerance: f64) -> bool {
        match self.eval() {
            Ok(value) => (value - expected).abs() <= tolerance * expected.abs().max(1.0),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::{error::kind::DomainError, literal::Literal};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn log_base_two_is_exact() {
        let expr = Expr::log(Expr::int(2), Expr::int(8));
        assert_eq!(expr.eval().unwrap(), 3.0);
    }

    #[test]
    fn log_of_constants() {
        let expr = Expr::log(Expr::e(), Expr::pow(Expr::e(), Expr::int(3)));
        assert_float_absolute_eq!(expr.eval().unwrap(), 3.0, 1e-12);

        let expr = Expr::log(Expr::int(10), Expr::int(1000));
        assert_float_absolute_eq!(expr.eval().unwrap(), 3.0, 1e-12);

        let expr = Expr::log(Expr::int(3), Expr::int(81));
        assert_float_absolute_eq!(expr.eval().unwrap(), 4.0, 1e-12);
    }

    #[test]
    fn arithmetic() {
        let expr = Expr::sub(
            Expr::mul(Expr::int(3), Expr::div(Expr::int(1), Expr::int(4))),
            Expr::pow(Expr::int(2), Expr::int(-1)),
        );
        assert_float_absolute_eq!(expr.eval().unwrap(), 0.25, 1e-15);
        assert_float_absolute_eq!(Expr::pi().eval().unwrap(), std::f64::consts::PI, 0.0);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let expr = Expr::div(Expr::int(1), Expr::int(0));
        assert_eq!(expr.eval().unwrap(), f64::INFINITY);
    }

    #[test]
    fn base_one_is_domain_error() {
        let err = Expr::log(Expr::int(1), Expr::int(2)).eval().unwrap_err();
        assert_eq!(
            err.kind::<DomainError>(),
            Some(&DomainError { operand: LogOperand::Base, value: 1.0 }),
        );
        assert_eq!(&err.src[err.spans[0].clone()], "1");
    }

    #[test]
    fn negative_base_is_domain_error() {
        let err = Expr::log(Expr::int(-2), Expr::int(4)).eval().unwrap_err();
        assert_eq!(err.kind::<DomainError>().unwrap().operand, LogOperand::Base);
    }

    #[test]
    fn non_positive_argument_is_domain_error() {
        let expr = Expr::log(Expr::int(10), Expr::sub(Expr::int(1), Expr::int(1)));
        let err = expr.eval().unwrap_err();
        assert_eq!(
            err.kind::<DomainError>(),
            Some(&DomainError { operand: LogOperand::Argument, value: 0.0 }),
        );
        assert_eq!(err.src, "\\lg{\\left(1 - 1\\right)}");
        assert_eq!(&err.src[err.spans[0].clone()], "\\left(1 - 1\\right)");
    }

    #[test]
    fn nested_error_propagates() {
        let expr = Expr::add(
            Expr::int(1),
            Expr::log(Expr::Literal(Literal::Float(2.0)), Expr::log(Expr::int(2), Expr::int(1))),
        );
        let err = expr.eval().unwrap_err();
        assert_eq!(err.kind::<DomainError>().unwrap().operand, LogOperand::Argument);
    }

    #[test]
    fn approx_comparison() {
        let expr = Expr::log(Expr::int(3), Expr::int(27));
        assert!(expr.approx_eq(3.0, 1e-9));
        assert!(!expr.approx_eq(3.1, 1e-9));
        assert!(!Expr::log(Expr::int(1), Expr::int(2)).approx_eq(0.0, 1e-9));
    }
}
