use crate::Vec2;

use super::Particle;

/// Render-ready state of a collision world at one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollisionSnapshot {
    /// The simulated frame, after playback was applied.
    pub frame: u64,

    /// Simulated seconds since frame zero.
    pub elapsed: f64,

    pub particles: Vec<Particle>,

    /// Average kinetic energy per particle.
    pub temperature: f64,

    /// Total kinetic energy.
    pub kinetic_energy: f64,

    /// Total linear momentum.
    pub momentum: Vec2,
}
