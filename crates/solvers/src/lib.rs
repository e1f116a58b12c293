//! Fixed-step solvers for framesim problems.
//!
//! Every solver here replays an [`OdeProblem`] from an initial state with a
//! constant step size. Nothing is cached between calls, so the same inputs
//! always produce the same result.
//!
//! # Modules
//!
//! - [`transient`]: classical RK4 and forward Euler integration
//!
//! [`OdeProblem`]: framesim_core::OdeProblem

pub mod transient;
