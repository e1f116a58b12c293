//! Classical fourth-order Runge–Kutta solver for ODE problems.
//!
//! Each step evaluates the derivative four times and combines the slopes:
//!
//! ```text
//! k1 = f(y)
//! k2 = f(y + k1 * dt/2)
//! k3 = f(y + k2 * dt/2)
//! k4 = f(y + k3 * dt)
//! y_{n+1} = finalize(y + (k1 + 2 k2 + 2 k3 + k4)/6 * dt)
//! ```
//!
//! The step size is fixed. There is no error control, no retry, and no
//! rejected step: for smooth problems with a step that is small relative to
//! the fastest time scale, RK4 is accurate to `O(dt^4)` per unit time.
//!
//! The derivative type must be cloneable and form a vector space with `f64`
//! scalars (`Add` and `Mul<f64>`), and `Delta` must be halvable.

use std::ops::{Add, Mul};

use framesim_core::{DerivativeOf, Observer, OdeProblem, StepIntegrable};

use super::{Action, Error, Event, Solution, replay::replay};

/// Advances a state by one RK4 step and finalizes it.
///
/// # Errors
///
/// Returns an error if the problem fails to compute a derivative or to
/// finalize the step.
pub fn step<P>(problem: &P, state: &P::State, dt: P::Delta) -> Result<P::State, Error>
where
    P: OdeProblem,
    P::Delta: Copy + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    let half_dt = dt * 0.5;
    let slope = |s: &P::State| problem.derivative(s).map_err(Error::problem);

    let k1 = slope(state)?;
    let k2 = slope(&state.step(k1.clone(), half_dt))?;
    let k3 = slope(&state.step(k2.clone(), half_dt))?;
    let k4 = slope(&state.step(k3.clone(), dt))?;

    let weighted = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
    let next = state.step(weighted, dt);

    problem
        .finalize_step(next, state, &dt)
        .map_err(Error::problem)
}

/// Integrates an ODE problem using classical RK4.
///
/// The observer receives an [`Event`] for the initial state and after each
/// step, and may return [`Action::StopEarly`] to terminate the replay.
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
    P::Delta: Copy + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: for<'a> Observer<Event<'a, P::State>, Action>,
{
    replay(initial, steps, |state| step(problem, state, dt), observer)
}

/// Integrates an ODE problem using classical RK4 without observation.
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
    P::Delta: Copy + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    solve(problem, initial, dt, steps, ())
}
