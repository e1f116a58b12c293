/// A state that a fixed-step solver can advance by one step.
///
/// `step` applies `derivative * delta` to the state, with the derivative taken
/// with respect to `Delta`. The solvers here always pass simulated seconds as
/// `f64`. A state may carry fields the derivative does not cover, such as
/// particle radii, and `step` copies those through unchanged.
pub trait StepIntegrable<Delta> {
    /// Rate of change of the state per unit of `Delta`.
    type Derivative;

    /// Returns the state advanced by `derivative * delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// The derivative type of a [`StepIntegrable`] state.
///
/// Shorthand for `<T as StepIntegrable<Delta>>::Derivative`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
