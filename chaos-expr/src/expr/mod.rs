//! The expression tree.
//!
//! An [`Expr`] is either a [`Literal`] leaf or a binary operation that exclusively owns its two
//! children. Trees are never shared and have no back-references, so they cannot contain cycles.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if
//! they have the same shape and equal literals in the same positions. `1 + 2` and `2 + 1` are
//! different expressions even though they evaluate to the same value. Use [`Expr::eval`] to
//! compare values.

mod iter;

use crate::{literal::Literal, op::{BinOpKind, Precedence}};
pub use iter::ExprIter;
use std::fmt;

/// A node of an arithmetic / logarithm expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number or named constant.
    Literal(Literal),

    /// `lhs + rhs`
    Add(Box<Expr>, Box<Expr>),

    /// `lhs - rhs`
    Sub(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`
    Mul(Box<Expr>, Box<Expr>),

    /// `lhs / rhs`, rendered as a fraction.
    Div(Box<Expr>, Box<Expr>),

    /// `base ^ exponent`
    Pow(Box<Expr>, Box<Expr>),

    /// `log_base(argument)`
    Log(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Builds a binary operation of the given kind from two already-built children.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            BinOpKind::Add => Self::Add(lhs, rhs),
            BinOpKind::Sub => Self::Sub(lhs, rhs),
            BinOpKind::Mul => Self::Mul(lhs, rhs),
            BinOpKind::Div => Self::Div(lhs, rhs),
            BinOpKind::Pow => Self::Pow(lhs, rhs),
            BinOpKind::Log => Self::Log(lhs, rhs),
        }
    }

    /// Creates an integer literal.
    pub fn int(n: i64) -> Self {
        Self::Literal(Literal::Integer(n))
    }

    /// Creates the literal `e`.
    pub fn e() -> Self {
        Self::Literal(Literal::E)
    }

    /// Creates the literal `pi`.
    pub fn pi() -> Self {
        Self::Literal(Literal::Pi)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::binary(BinOpKind::Pow, base, exponent)
    }

    pub fn log(base: Expr, argument: Expr) -> Self {
        Self::binary(BinOpKind::Log, base, argument)
    }

    /// Returns the kind of binary operation this expression is, or [`None`] for literals.
    pub fn op(&self) -> Option<BinOpKind> {
        match self {
            Self::Literal(_) => None,
            Self::Add(..) => Some(BinOpKind::Add),
            Self::Sub(..) => Some(BinOpKind::Sub),
            Self::Mul(..) => Some(BinOpKind::Mul),
            Self::Div(..) => Some(BinOpKind::Div),
            Self::Pow(..) => Some(BinOpKind::Pow),
            Self::Log(..) => Some(BinOpKind::Log),
        }
    }

    /// Returns the precedence of the expression.
    pub fn precedence(&self) -> Precedence {
        self.op().map_or(Precedence::Atom, |op| op.precedence())
    }

    /// Returns the two children of a binary operation.
    pub fn children(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Literal(_) => None,
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs)
                | Self::Pow(lhs, rhs)
                | Self::Log(lhs, rhs) => Some((&**lhs, &**rhs)),
        }
    }

    /// Splits a binary operation into its kind and its owned children. Literals are returned
    /// unchanged in the [`Err`] variant.
    pub fn into_binary(self) -> Result<(BinOpKind, Expr, Expr), Self> {
        match self {
            Self::Literal(lit) => Err(Self::Literal(lit)),
            Self::Add(lhs, rhs) => Ok((BinOpKind::Add, *lhs, *rhs)),
            Self::Sub(lhs, rhs) => Ok((BinOpKind::Sub, *lhs, *rhs)),
            Self::Mul(lhs, rhs) => Ok((BinOpKind::Mul, *lhs, *rhs)),
            Self::Div(lhs, rhs) => Ok((BinOpKind::Div, *lhs, *rhs)),
            Self::Pow(lhs, rhs) => Ok((BinOpKind::Pow, *lhs, *rhs)),
            Self::Log(lhs, rhs) => Ok((BinOpKind::Log, *lhs, *rhs)),
        }
    }

    /// If the expression is a [`Literal`], returns a reference to it.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// If the expression is an integer literal, returns the integer.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_literal()?.as_integer()
    }

    /// Returns true if the expression is a plain numeric literal (not `e` or `pi`).
    pub fn is_numeric(&self) -> bool {
        self.as_literal().map_or(false, Literal::is_numeric)
    }

    /// Returns the number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the number of nodes on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        match self.children() {
            None => 1,
            Some((lhs, rhs)) => 1 + lhs.height().max(rhs.height()),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

/// Writes the expression, wrapping it in parentheses if it binds looser than `required`.
fn fmt_paren(f: &mut fmt::Formatter<'_>, expr: &Expr, required: Precedence) -> fmt::Result {
    if expr.precedence() < required {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Plain-text form of the expression, such as `log(2, 8) - (1 + 2) * 3`.
///
/// This is meant for logs and debugging; use [`Latex`](crate::fmt::Latex) for typeset output.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{}", lit),
            Self::Log(base, arg) => write!(f, "log({}, {})", base, arg),
            Self::Pow(base, exp) => {
                fmt_paren(f, base, Precedence::Atom)?;
                write!(f, "^")?;
                fmt_paren(f, exp, Precedence::Exp)
            },
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs) => {
                let op = self.precedence();
                fmt_paren(f, lhs, op)?;
                // the right-hand side of `-` and `/` must be grouped at equal precedence
                let rhs_required = match self {
                    Self::Sub(..) => Precedence::Factor,
                    Self::Div(..) => Precedence::Log,
                    _ => op,
                };
                write!(f, " {} ", self.op().map_or("", |op| op.symbol()))?;
                fmt_paren(f, rhs, rhs_required)
            },
        }
    }
}
