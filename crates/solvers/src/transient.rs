//! Fixed-step time integration of ODE problems.
//!
//! # Solvers
//!
//! - [`rk4`]: classical fourth-order Runge–Kutta
//! - [`euler`]: explicit forward Euler
//!
//! Both solvers share the same event, action, solution, and error types.
//! Observers receive an [`Event`] for the initial state (step 0) and after each
//! accepted step, and may return [`Action::StopEarly`] to end the replay.

mod action;
mod error;
mod event;
mod replay;
mod solution;

pub mod euler;
pub mod rk4;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
