/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a transient integration.
///
/// Only the final state is kept. Observers see intermediate states as they
/// are produced.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// The state after the last completed step.
    pub state: S,

    /// Number of integration steps completed.
    pub steps: u64,
}
