/// Event emitted by the transient solvers for each state.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: u64,

    /// The state after this step.
    pub state: &'a S,
}
