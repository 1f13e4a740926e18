/// How an observer can steer the golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt now and report the midpoint of the current bracket.
    StopEarly,

    /// Give the reported point an infinite objective so it loses the next
    /// comparison and the bracket moves away from it.
    ///
    /// Works for failed evaluations as well as successful ones, so it can
    /// recover from model errors or fence off a region of the bracket.
    AssumeWorse,
}
