//! Frame-indexed physics scenes for educational video rendering.
//!
//! Each scene is a pure function of an immutable configuration and a frame
//! index. A request for frame `F` replays the simulation from its canonical
//! initial condition up to `F`; nothing is cached, so frames can be rendered
//! in any order, on any thread, any number of times.
//!
//! # Scenes
//!
//! - [`pendulum`]: chaotic double pendulum integrated with RK4
//! - [`collision`]: elastic collisions of many particles in a box
//! - [`wave`]: interference of point-source waves, evaluated in closed form
//! - [`spring`]: a damped mass-spring oscillator, evaluated in closed form
//! - [`orbit`]: bodies on Keplerian orbits around a fixed central body
//!
//! All scenes implement [`Scene`], and [`render_frames`] evaluates a list of
//! frames on the rayon thread pool.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for snapshots and `Deserialize` for
//!   parameter structs.

pub mod collision;
pub mod orbit;
pub mod pendulum;
pub mod spring;
pub mod wave;

mod energy;
mod error;
mod scene;

pub use energy::Energy;
pub use error::{ConfigError, Error};
pub use scene::{Scene, render_frames};

pub use framesim_core::{FrameError, FrameIndex, Playback, TimeBase};

/// Two-dimensional vector in scene coordinates (pixels, y pointing down).
pub type Vec2 = nalgebra::Vector2<f64>;
