//! LaTeX rendering of expressions.

use crate::{expr::Expr, literal::Literal, op::Precedence};
use std::{fmt::{Display, Formatter, Result}, ops::Range};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats the expression, wrapping it in `\left( ... \right)` if its precedence is lower than
/// the precedence required by the surrounding context.
pub fn fmt_grouped(f: &mut Formatter, expr: &Expr, required: Precedence) -> Result {
    if expr.precedence() < required {
        write!(f, "\\left(")?;
        expr.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        expr.fmt_latex(f)
    }
}

/// Formats the function name of a logarithm with the given base: `\lg` for base 10, `\ln` for
/// base `e`, and `\log_{b}` for anything else.
pub fn fmt_log_name(f: &mut Formatter, base: &Expr) -> Result {
    match base {
        Expr::Literal(lit) if lit.is(10) => write!(f, "\\lg"),
        Expr::Literal(Literal::E) => write!(f, "\\ln"),
        _ => {
            write!(f, "\\log_{{")?;
            fmt_grouped(f, base, Precedence::Atom)?;
            write!(f, "}}")
        },
    }
}

/// Returns true if the product `lhs * rhs` should be rendered with an explicit `\times`.
///
/// Juxtaposition is ambiguous when the right factor starts with a number (`2 3` reads as `23`),
/// or with a fraction of two literals (`2 \frac{1}{3}` reads as a mixed number). The start of the
/// right factor is found by walking down the left spine of powers and products.
pub fn needs_times(rhs: &Expr) -> bool {
    let mut leftmost = rhs;
    while let Expr::Pow(lhs, _) | Expr::Mul(lhs, _) = leftmost {
        leftmost = &**lhs;
    }

    match leftmost {
        Expr::Literal(lit) => lit.is_numeric(),
        Expr::Div(num, den) => matches!((&**num, &**den), (Expr::Literal(_), Expr::Literal(_))),
        _ => false,
    }
}

/// Renders the expression as LaTeX.
///
/// - `a + b`, `a - b`; the right side of `-` is grouped if it is itself a sum or difference, so
/// that `5 - (1 + 2)` keeps its meaning
/// - `a \times b` if [`needs_times`] says so, else `a b`
/// - `\frac{a}{b}`, whose children are never grouped
/// - `{b} ^ {x}`, or `\log_{b}^{x}{a}` when the base of the power is a logarithm
/// - `\lg{a}`, `\ln{a}` or `\log_{b}{a}`
impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Literal(lit) => lit.fmt_latex(f),
            Self::Add(lhs, rhs) => {
                fmt_grouped(f, lhs, Precedence::Term)?;
                write!(f, " + ")?;
                fmt_grouped(f, rhs, Precedence::Term)
            },
            Self::Sub(lhs, rhs) => {
                fmt_grouped(f, lhs, Precedence::Term)?;
                write!(f, " - ")?;
                fmt_grouped(f, rhs, Precedence::Factor)
            },
            Self::Mul(lhs, rhs) => {
                fmt_grouped(f, lhs, Precedence::Factor)?;
                if needs_times(rhs) {
                    write!(f, " \\times ")?;
                } else {
                    write!(f, " ")?;
                }
                fmt_grouped(f, rhs, Precedence::Factor)
            },
            Self::Div(num, den) => {
                write!(f, "\\frac{{")?;
                num.fmt_latex(f)?;
                write!(f, "}}{{")?;
                den.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Pow(base, exp) => match &**base {
                Self::Log(log_base, arg) => {
                    fmt_log_name(f, log_base)?;
                    write!(f, "^{{")?;
                    exp.fmt_latex(f)?;
                    write!(f, "}}{{")?;
                    fmt_grouped(f, arg, Precedence::Log)?;
                    write!(f, "}}")
                },
                _ => {
                    write!(f, "{{")?;
                    fmt_grouped(f, base, Precedence::Atom)?;
                    write!(f, "}} ^ {{")?;
                    exp.fmt_latex(f)?;
                    write!(f, "}}")
                },
            },
            Self::Log(base, arg) => {
                fmt_log_name(f, base)?;
                write!(f, "{{")?;
                fmt_grouped(f, arg, Precedence::Log)?;
                write!(f, "}}")
            },
        }
    }
}

/// Renders the logarithm `log_base(arg)` and returns the markup along with the spans of the base
/// and argument inside it.
///
/// For `\lg` and `\ln`, the base has no markup of its own, so the function name is used as its
/// span.
pub(crate) fn log_markup_spans(base: &Expr, arg: &Expr) -> (String, Range<usize>, Range<usize>) {
    struct Name<'a>(&'a Expr);
    impl Display for Name<'_> {
        fn fmt(&self, f: &mut Formatter) -> Result {
            fmt_log_name(f, self.0)
        }
    }

    struct Arg<'a>(&'a Expr);
    impl Display for Arg<'_> {
        fn fmt(&self, f: &mut Formatter) -> Result {
            fmt_grouped(f, self.0, Precedence::Log)
        }
    }

    let name = Name(base).to_string();
    let arg = Arg(arg).to_string();
    let base_span = match name.strip_prefix("\\log_{") {
        Some(_) => "\\log_{".len()..name.len() - 1,
        None => 0..name.len(),
    };
    let arg_start = name.len() + 1;
    let arg_span = arg_start..arg_start + arg.len();
    (format!("{}{{{}}}", name, arg), base_span, arg_span)
}
