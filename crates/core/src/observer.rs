/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`Observer::observe`] once per event. Returning `None` lets the
/// solver continue unchanged.
///
/// Two implementations are provided:
///
/// - `()` ignores every event.
/// - Any `FnMut(&E) -> Option<A>` closure.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
