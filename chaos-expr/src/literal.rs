//! Leaf values of an expression tree.

use crate::{error::{kind::InvalidLiteral, Error}, fmt::Latex};
use std::{f64::consts, fmt, str::FromStr};

/// A literal value, the only kind of leaf in an expression tree.
///
/// A literal is immutable once constructed. Rewrites that change a literal always replace it with
/// a new subtree instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// An integer, such as `2` or `144`.
    Integer(i64),

    /// A finite floating-point number, such as `0.5`.
    Float(f64),

    /// Euler's number.
    E,

    /// The ratio of a circle's circumference to its diameter.
    Pi,
}

impl Literal {
    /// Creates a floating-point literal, rejecting `NaN` and infinities.
    pub fn float(value: f64) -> Result<Self, Error> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            let src = value.to_string();
            let span = 0..src.len();
            Err(Error::new(src.clone(), vec![span], InvalidLiteral { value: src }))
        }
    }

    /// Returns the numeric value of the literal.
    pub fn value(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Float(n) => *n,
            Self::E => consts::E,
            Self::Pi => consts::PI,
        }
    }

    /// Returns true if the literal is a plain number, rather than a named constant.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// If the literal is an integer, returns it.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the literal is numerically equal to the given integer.
    ///
    /// Floats compare equal when they hold exactly that integer, so `10.0` matches `10`.
    pub fn is(&self, n: i64) -> bool {
        match self {
            Self::Integer(m) => *m == n,
            Self::Float(m) => *m == n as f64,
            Self::E | Self::Pi => false,
        }
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl FromStr for Literal {
    type Err = Error;

    /// Parses an integer, a decimal number, or one of the names `e` and `pi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "e" => return Ok(Self::E),
            "pi" => return Ok(Self::Pi),
            _ => (),
        }

        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Self::Integer(n));
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Self::Float(n)),
            _ => Err(Error::new(
                s,
                vec![0..s.len()],
                InvalidLiteral { value: s.to_string() },
            )),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::E => write!(f, "e"),
            Self::Pi => write!(f, "pi"),
        }
    }
}

impl Latex for Literal {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::E => write!(f, "\\text{{e}}"),
            Self::Pi => write!(f, "\\pi"),
        }
    }
}
