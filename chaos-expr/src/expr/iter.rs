use super::Expr;

/// Walks an expression tree children-first, left before right, without recursion.
///
/// Returned by [`Expr::post_order_iter`]; [`Expr::node_count`] counts its items.
pub struct ExprIter<'a> {
    /// Pending nodes, each paired with whether its children were already pushed above it.
    pending: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    pub(super) fn new(root: &'a Expr) -> Self {
        Self { pending: vec![(root, false)] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.pending.pop()?;
            match expr.children() {
                Some((lhs, rhs)) if !expanded => {
                    self.pending.push((expr, true));
                    self.pending.push((rhs, false));
                    self.pending.push((lhs, false));
                },
                _ => return Some(expr),
            }
        }
    }
}
