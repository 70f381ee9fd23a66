//! Randomized rewriting of logarithm expressions.
//!
//! This crate takes a small expression, such as `log_2(8)`, and turns it into an expression that
//! is mathematically equivalent but looks much harder, such as
//! `\frac{\ln{\left(8 \times 4\right)} - \ln{4}}{\ln{2}}`. This is useful for generating practice
//! exercises with a known answer.
//!
//! # Algorithm
//!
//! The [`Rewriter`] walks the tree down to a configurable maximum depth. At every node, it first
//! rewrites both children, then draws one rule uniformly at random from its rule set and applies
//! it to the node. Each rule only matches certain shapes (for example, the change of base rule
//! only matches logarithms); drawing a rule that does not match is expected and leaves the node
//! unchanged.
//!
//! The depth bound is the only guard against runaway growth, and it bounds the recursion depth,
//! not the size of the result. Set [`RewriteOptions::max_nodes`] for a hard cap on the size.
//!
//! # Randomness
//!
//! All randomness comes from the random number generator passed to the rewriter. Pass a seeded
//! generator to get reproducible output.
//!
//! ```
//! use chaos_expr::Expr;
//! use chaos_rewrite::{RewriteOptionsBuilder, Rewriter, RuleSet};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let answer = Expr::log(Expr::int(2), Expr::int(8));
//! let rewriter = Rewriter::new(RewriteOptionsBuilder::new()
//!     .max_depth(3)
//!     .rule_set(RuleSet::Rich)
//!     .build());
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let exercise = rewriter.rewrite(&answer, &mut rng);
//! assert!(exercise.approx_eq(3.0, 1e-9));
//! ```
//!
//! # Rules
//!
//! The catalog is defined in [`rules`]. Every rule preserves the value of the expression it
//! rewrites, so the rewritten expression always evaluates to the same value as the input, up to
//! floating-point error.

pub mod ctxt;
pub mod options;
pub mod pool;
pub mod rewrite;
pub mod rules;
pub mod step;
pub mod step_collector;

pub use ctxt::Ctxt;
pub use options::{RewriteOptions, RewriteOptionsBuilder, RuleSet};
pub use rewrite::{rewrite, Rewriter};
pub use rules::Rule;
pub use step::Step;
pub use step_collector::StepCollector;
