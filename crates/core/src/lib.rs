//! Core traits and types for the framesim workspace.
//!
//! This crate defines the shared abstractions that solvers and scenes build on:
//!
//! - [`TimeBase`]: maps a frame index to a fixed step size and step count
//! - [`FrameIndex`] and [`Playback`]: validated frames and frame remapping
//! - [`StepIntegrable`]: a state that can be stepped by its derivative
//! - [`OdeProblem`]: supplies derivatives and per-step finalization
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`constraint`]: numeric invariants checked once at construction

pub mod constraint;
pub mod time;

mod observer;
mod problem;
mod step;

pub use observer::Observer;
pub use problem::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use time::{FrameError, FrameIndex, Playback, Steps, TimeBase, TimeBaseError};
