use crate::rules::{self, Rule};

/// The set of rules a [`Rewriter`](crate::Rewriter) chooses from.
#[derive(Debug, Clone, Default)]
pub enum RuleSet {
    /// Log addition, log subtraction, the power rule, change of base, numeric split and identity
    /// padding.
    Simple,

    /// Every rule in the catalog. This is a superset of [`RuleSet::Simple`].
    ///
    /// This is the default option.
    #[default]
    Rich,

    /// An arbitrary, ordered list of rules.
    Custom(Vec<Rule>),
}

impl RuleSet {
    /// Returns the rules in this set.
    pub fn rules(&self) -> Vec<Rule> {
        match self {
            Self::Simple => rules::simple(),
            Self::Rich => rules::rich(),
            Self::Custom(rules) => rules.clone(),
        }
    }
}

/// Options controlling a [`Rewriter`](crate::Rewriter).
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Nodes at this depth or deeper are left untouched. The root is at depth 0, so a maximum
    /// depth of 0 returns every expression unchanged.
    ///
    /// The default is 3.
    pub max_depth: usize,

    /// The rules to choose from at every visited node.
    pub rule_set: RuleSet,

    /// If set, the rewritten tree will never contain more than this many nodes. A rewrite whose
    /// result is larger is attempted again, up to [`retries`] more times, and the input is
    /// returned unchanged if every attempt is too large.
    ///
    /// The depth bound alone does not bound the size of the result.
    ///
    /// [`retries`]: RewriteOptions::retries
    pub max_nodes: Option<usize>,

    /// The number of extra attempts made when a random draw produces an invalid or oversized
    /// expression.
    ///
    /// The default is 3.
    pub retries: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            rule_set: RuleSet::default(),
            max_nodes: None,
            retries: 3,
        }
    }
}

impl RewriteOptions {
    /// Wraps the given [`RewriteOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RewriteOptionsBuilder {
        RewriteOptionsBuilder(self)
    }
}

/// Helper struct to build a [`RewriteOptions`] struct.
#[derive(Debug, Default, Clone)]
pub struct RewriteOptionsBuilder(RewriteOptions);

impl RewriteOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum recursion depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the rule set. See [`RuleSet`] for more information.
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.0.rule_set = rule_set;
        self
    }

    /// Caps the number of nodes in the rewritten tree.
    pub fn max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.0.max_nodes = max_nodes;
        self
    }

    /// Sets the number of retries for invalid or oversized draws.
    pub fn retries(mut self, retries: usize) -> Self {
        self.0.retries = retries;
        self
    }

    /// Builds the [`RewriteOptions`] struct.
    pub fn build(self) -> RewriteOptions {
        self.0
    }
}
