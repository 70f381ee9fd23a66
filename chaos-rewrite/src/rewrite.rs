//! The recursive, depth-bounded rewrite procedure.

use chaos_expr::Expr;
use log::{debug, trace};
use rand::{seq::SliceRandom, RngCore};
use crate::{
    ctxt::Ctxt,
    options::RewriteOptions,
    rules::Rule,
    step::Step,
    step_collector::StepCollector,
};

/// Applies randomly chosen rules to an expression, producing an equivalent expression that looks
/// more complicated.
///
/// At every node above the maximum depth, both children are rewritten first (one level deeper),
/// and then a single rule is drawn uniformly at random and applied to the node. A rule that does not match the node's
/// shape leaves it unchanged.
#[derive(Debug, Clone)]
pub struct Rewriter {
    options: RewriteOptions,
    rules: Vec<Rule>,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(RewriteOptions::default())
    }
}

impl Rewriter {
    /// Creates a rewriter with the given options.
    pub fn new(options: RewriteOptions) -> Self {
        let rules = options.rule_set.rules();
        Self { options, rules }
    }

    /// Returns the options of this rewriter.
    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Returns the rules this rewriter chooses from.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rewrites the given expression.
    pub fn rewrite<R: RngCore>(&self, expr: &Expr, rng: &mut R) -> Expr {
        self.rewrite_collect(expr, rng, &mut ())
    }

    /// Rewrites the given expression. The steps taken by the rewriter will also be collected and
    /// returned, in the order the rules fired.
    pub fn rewrite_with_steps<R: RngCore>(&self, expr: &Expr, rng: &mut R) -> (Expr, Vec<Step>) {
        let mut steps = Vec::new();
        let expr = self.rewrite_collect(expr, rng, &mut steps);
        (expr, steps)
    }

    /// Rewrites the given expression, pushing the step of every rule that fires into the given
    /// collector.
    ///
    /// If [`RewriteOptions::max_nodes`] is set, results that are too large are discarded (along
    /// with their steps) and the rewrite is attempted again.
    pub fn rewrite_collect<R: RngCore>(
        &self,
        expr: &Expr,
        rng: &mut R,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Expr {
        let Some(max_nodes) = self.options.max_nodes else {
            return self.rewrite_at(expr.clone(), 0, rng, step_collector);
        };

        for attempt in 0..=self.options.retries {
            let mut steps = Vec::new();
            let result = self.rewrite_at(expr.clone(), 0, rng, &mut steps);
            let nodes = result.node_count();
            if nodes <= max_nodes {
                steps.into_iter().for_each(|step| step_collector.push(step));
                return result;
            }
            debug!("attempt {}: discarding rewrite with {} nodes (limit {})", attempt, nodes, max_nodes);
        }

        expr.clone()
    }

    /// Applies a single rule to the given expression, without recursing into its children.
    ///
    /// Returns [`None`] if the rule does not apply.
    pub fn apply_rule<R: RngCore>(&self, rule: &Rule, expr: &Expr, rng: &mut R) -> Option<Expr> {
        let mut steps = ();
        let mut ctxt = Ctxt::new(self, rng, &mut steps, 0);
        (rule.apply)(expr, &mut ctxt)
    }

    /// Base implementation of the rewrite procedure, for a node at the given depth.
    pub(crate) fn rewrite_at(
        &self,
        expr: Expr,
        depth: usize,
        rng: &mut dyn RngCore,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Expr {
        if depth >= self.options.max_depth {
            return expr;
        }

        // rewrite the children first
        let expr = match expr.into_binary() {
            Ok((op, lhs, rhs)) => {
                let lhs = self.rewrite_at(lhs, depth + 1, rng, step_collector);
                let rhs = self.rewrite_at(rhs, depth + 1, rng, step_collector);
                Expr::binary(op, lhs, rhs)
            },
            Err(leaf) => leaf,
        };

        // then try one random rule on this node
        let Some(rule) = self.rules.choose(&mut *rng) else {
            return expr;
        };
        trace!("depth {}: trying {} on `{}`", depth, rule.name, expr);

        let mut ctxt = Ctxt::new(self, rng, step_collector, depth);
        match (rule.apply)(&expr, &mut ctxt) {
            Some(rewritten) => {
                debug!("depth {}: {} rewrote `{}` as `{}`", depth, rule.name, expr, rewritten);
                ctxt.steps.push(rule.step);
                rewritten
            },
            None => expr,
        }
    }
}

/// Rewrites the given expression with every rule in the catalog and the given maximum depth.
pub fn rewrite<R: RngCore>(expr: &Expr, max_depth: usize, rng: &mut R) -> Expr {
    let options = RewriteOptions {
        max_depth,
        ..RewriteOptions::default()
    };
    Rewriter::new(options).rewrite(expr, rng)
}
