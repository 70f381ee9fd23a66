//! The kinds of errors that can occur while building or evaluating an expression.

use ariadne::{Fmt, Label, Report, ReportKind};
use chaos_error::{ErrorKind, EXPR};
use std::{any::Any, fmt, ops::Range};

/// Which operand of a logarithm was outside of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperand {
    /// The base of the logarithm, `b` in `log_b(a)`.
    Base,

    /// The argument of the logarithm, `a` in `log_b(a)`.
    Argument,
}

impl fmt::Display for LogOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Argument => write!(f, "argument"),
        }
    }
}

/// A logarithm was evaluated with a base `b <= 0` or `b == 1`, or with an argument `a <= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    /// The operand that was out of range.
    pub operand: LogOperand,

    /// The value the operand evaluated to.
    pub value: f64,
}

impl ErrorKind for DomainError {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, spans[0].clone()))
                    .with_color(EXPR)
                    .with_message(format!("this {} evaluates to `{}`", self.operand, self.value)),
            );

        builder.set_help(match self.operand {
            LogOperand::Base => format!(
                "the base of a logarithm must satisfy {} and {}",
                "b > 0".fg(EXPR),
                "b != 1".fg(EXPR),
            ),
            LogOperand::Argument => format!(
                "the argument of a logarithm must satisfy {}",
                "a > 0".fg(EXPR),
            ),
        });
        builder.finish()
    }

    fn message(&self) -> String {
        format!("logarithm {} `{}` is outside of the logarithm's domain", self.operand, self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A literal was constructed from something that is neither a finite number nor one of the named
/// constants `e` and `pi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLiteral {
    /// The rejected value, as text.
    pub value: String,
}

impl ErrorKind for InvalidLiteral {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, spans[0].clone()))
                    .with_color(EXPR)
                    .with_message("this literal"),
            );

        builder.set_help(format!(
            "a literal must be a finite number, {}, or {}",
            "e".fg(EXPR),
            "pi".fg(EXPR),
        ));
        builder.finish()
    }

    fn message(&self) -> String {
        format!("`{}` is not a valid literal", self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
