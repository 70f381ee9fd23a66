use chaos_expr::Expr;
use rand::RngCore;
use crate::{rewrite::Rewriter, step::Step, step_collector::StepCollector};

/// The state threaded through every rule application.
///
/// Rules draw all of their randomness from [`Ctxt::rng`], so seeding the random source passed to
/// the [`Rewriter`] makes a rewrite fully reproducible.
pub struct Ctxt<'a> {
    /// The random source to draw rule parameters from.
    pub rng: &'a mut dyn RngCore,

    /// Receives a [`Step`] for every rule that fires, including rules fired by nested rewrites.
    pub steps: &'a mut dyn StepCollector<Step>,

    /// The depth of the node the rule is being applied to. The root is at depth 0.
    pub depth: usize,

    rewriter: &'a Rewriter,
}

impl<'a> Ctxt<'a> {
    pub(crate) fn new(
        rewriter: &'a Rewriter,
        rng: &'a mut dyn RngCore,
        steps: &'a mut dyn StepCollector<Step>,
        depth: usize,
    ) -> Self {
        Self { rng, steps, depth, rewriter }
    }

    /// The number of extra attempts a rule may make when its random draw produces an invalid
    /// expression.
    pub fn retries(&self) -> usize {
        self.rewriter.options().retries
    }

    /// Runs the whole rewrite procedure on `expr` as if it were a child of the current node.
    ///
    /// This lets a rule re-enter the rewriter on its own output. The result may be rewritten one
    /// level past the current node's subtree, which is how a rule can exceed the configured
    /// maximum depth by one.
    ///
    /// Steps of the nested rewrite go to `steps` rather than [`Ctxt::steps`], so that a rule can
    /// drop them if it discards the result.
    pub fn rewrite_nested(&mut self, expr: Expr, steps: &mut dyn StepCollector<Step>) -> Expr {
        self.rewriter.rewrite_at(expr, self.depth + 1, &mut *self.rng, steps)
    }
}
