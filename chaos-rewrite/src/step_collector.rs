/// A type that collects the steps of an algorithm.
///
/// The rewriter pushes one step for every rule that fires. [`StepCollector`] is also implemented
/// for the unit type `()`, which discards every step; use it when only the rewritten expression
/// matters.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
