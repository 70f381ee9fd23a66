//! Expression trees for arithmetic and logarithms.
//!
//! An [`Expr`] is built from [`Literal`] leaves (integers, floats, `e` and `pi`) and six binary
//! operations: addition, subtraction, multiplication, division, exponentiation and logarithms.
//! Every expression can be:
//!
//! - evaluated to an `f64` with [`Expr::eval`], which fails only for logarithms outside of their
//! domain, and
//! - rendered as LaTeX through the [`Latex`] trait, with parentheses inserted according to
//! operator [`Precedence`].
//!
//! ```
//! use chaos_expr::{Expr, Latex};
//!
//! let expr = Expr::sub(
//!     Expr::log(Expr::int(2), Expr::mul(Expr::int(8), Expr::int(4))),
//!     Expr::log(Expr::int(2), Expr::int(4)),
//! );
//! assert_eq!(expr.eval().unwrap(), 3.0);
//! assert_eq!(
//!     expr.as_display().to_string(),
//!     "\\log_{2}{\\left(8 \\times 4\\right)} - \\log_{2}{4}",
//! );
//! ```

pub mod error;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod literal;
pub mod op;

pub use error::Error;
pub use expr::Expr;
pub use fmt::Latex;
pub use literal::Literal;
pub use op::{BinOpKind, Precedence};

impl Expr {
    /// Renders the expression as LaTeX.
    pub fn render(&self) -> String {
        self.as_display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn render_matches_formatter() {
        let expr = Expr::log(Expr::int(2), Expr::int(8));
        assert_eq!(expr.render(), "\\log_{2}{8}");
        assert_eq!(expr.render(), format!("{}", expr.as_display()));
    }

    #[test]
    fn domain_error_report() {
        let err = Expr::log(Expr::int(3), Expr::int(-9)).eval().unwrap_err();
        let report = strip_ansi_escapes::strip_str(err.report_to_string("expr"));
        assert!(report.contains("outside of the logarithm's domain"));
        assert!(report.contains("this argument evaluates to `-9`"));
    }
}
