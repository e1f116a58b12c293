//! Forward Euler solver for ODE problems.
//!
//! This module provides a minimal forward Euler integrator. It steps a problem
//! forward using explicit Euler, then lets the problem finalize the step:
//!
//! ```text
//! state_{n+1} = finalize(state_n + derivative_n * dt)
//! ```
//!
//! Forward Euler is what kinematic simulations with discrete events want: the
//! derivative is a plain velocity, and collisions or wall contacts are applied
//! in [`OdeProblem::finalize_step`].
//!
//! # Example
//!
//! ```ignore
//! use framesim_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&problem, initial, dt, steps)?;
//! println!("after {} steps: {:?}", solution.steps, solution.state);
//! ```

use framesim_core::{Observer, OdeProblem, StepIntegrable};

use super::{Action, Error, Event, Solution, replay::replay};

/// Advances a state by one forward Euler step and finalizes it.
///
/// # Errors
///
/// Returns an error if the problem fails to compute the derivative or to
/// finalize the step.
pub fn step<P>(problem: &P, state: &P::State, dt: &P::Delta) -> Result<P::State, Error>
where
    P: OdeProblem,
    P::Delta: Clone,
{
    let derivative = problem.derivative(state).map_err(Error::problem)?;
    let next = state.step(derivative, dt.clone());
    problem
        .finalize_step(next, state, dt)
        .map_err(Error::problem)
}

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Emit the initial state as step 0.
/// 2. For each step:
///    - Compute the derivative of the current state.
///    - Step the state forward: `state + derivative * dt`.
///    - Finalize the step (contacts, constraints, etc.).
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the final state.
///
/// # Errors
///
/// Returns an error if the problem returns an error at any point.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    dt: P::Delta,
    steps: u64,
    observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::Delta: Clone,
    Obs: for<'a> Observer<Event<'a, P::State>, Action>,
{
    replay(initial, steps, |state| step(problem, state, &dt), observer)
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the problem returns an error at any point.
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    dt: P::Delta,
    steps: u64,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::Delta: Clone,
{
    solve(problem, initial, dt, steps, ())
}
