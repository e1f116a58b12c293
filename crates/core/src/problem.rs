use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be integrated.
///
/// An ODE problem computes the derivative of a state and gets a chance to
/// adjust each accepted step. The fixed-step solvers replay a problem from an
/// initial state, so implementations must be pure: the same state always
/// yields the same derivative.
pub trait OdeProblem {
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        state: &Self::State,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Finalizes the state after a full integration step.
    ///
    /// This is called once per step, after the solver has produced the
    /// stepped state. It is the hook for discrete events that are not part
    /// of the derivative, such as wall reflections and contact resolution.
    ///
    /// The default implementation returns the state unchanged. Only implement
    /// this method if your problem requires it.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if finalization fails.
    fn finalize_step(
        &self,
        next: Self::State,
        _prev: &Self::State,
        _delta: &Self::Delta,
    ) -> Result<Self::State, Self::Error> {
        Ok(next)
    }
}
