//! Binary operators and their precedence.

/// The precedence of an expression, used only to decide whether a child must be wrapped in
/// `\left( ... \right)` when rendered.
///
/// Evaluation order is fixed by the shape of the tree and never consults precedence. Variants are
/// listed from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 1,

    /// Precedence of multiplication and division, which separate factors.
    Factor = 2,

    /// Precedence of logarithms.
    Log = 3,

    /// Precedence of exponentiation (`^`).
    Exp = 4,

    /// Precedence of literals, which never need grouping.
    Atom = 5,
}

/// The binary operation that is being performed.
///
/// Every interior node of an [`Expr`](crate::Expr) is one of these operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Log,
}

impl BinOpKind {
    /// All binary operations, in no particular order.
    pub const ALL: [BinOpKind; 6] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Pow,
        Self::Log,
    ];

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Log => Precedence::Log,
            Self::Pow => Precedence::Exp,
        }
    }

    /// Returns the symbol used for this operation in plain-text output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Log => "log",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        assert!(Precedence::Term < Precedence::Factor);
        assert!(Precedence::Factor < Precedence::Log);
        assert!(Precedence::Log < Precedence::Exp);
        assert!(Precedence::Exp < Precedence::Atom);
    }

    #[test]
    fn same_level_pairs() {
        assert_eq!(BinOpKind::Add.precedence(), BinOpKind::Sub.precedence());
        assert_eq!(BinOpKind::Mul.precedence(), BinOpKind::Div.precedence());
    }
}
