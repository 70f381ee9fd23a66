//! Rules that pad an expression with a factor of 1 or a term of 0.

use chaos_expr::Expr;
use rand::Rng;
use crate::{ctxt::Ctxt, pool};

/// Multiplies a positive numeric literal by an identity over `lg(2)` and `lg(5)` that evaluates to
/// 1, such as `lg^2 2 + lg 2 lg 5 + lg 5`.
///
/// Sums are padded the same way, but only one time in five.
pub fn polynomial_log_padding(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    let applies = match expr {
        Expr::Literal(lit) => lit.is_numeric() && lit.value() > 0.0,
        Expr::Add(..) => ctxt.rng.gen_bool(0.2),
        _ => false,
    };

    applies.then(|| Expr::mul(expr.clone(), pool::log10_one(ctxt.rng)))
}

/// Half of the time, multiplies a product by a form of 1, adds a form of 0 to a sum, or scales the
/// numerator and denominator of a fraction by the same random factor.
pub fn identity_padding(expr: &Expr, ctxt: &mut Ctxt) -> Option<Expr> {
    if !matches!(expr, Expr::Mul(..) | Expr::Add(..) | Expr::Div(..)) || !ctxt.rng.gen_bool(0.5) {
        return None;
    }

    match expr {
        Expr::Mul(..) => Some(Expr::mul(expr.clone(), pool::one(ctxt.rng))),
        Expr::Add(..) => Some(Expr::add(expr.clone(), pool::zero(ctxt.rng))),
        Expr::Div(num, den) => {
            let f = pool::factor(ctxt.rng);
            Some(Expr::div(
                Expr::mul((**num).clone(), Expr::int(f)),
                Expr::mul((**den).clone(), Expr::int(f)),
            ))
        },
        _ => None,
    }
}
