use crate::{Energy, Vec2};

use super::PendulumState;

/// Render-ready state of a double pendulum at one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PendulumSnapshot {
    /// The simulated frame, after playback was applied.
    pub frame: u64,

    /// Simulated seconds since frame zero.
    pub elapsed: f64,

    pub state: PendulumState,

    /// Inner and outer bob positions relative to the pivot (y down).
    pub bobs: [Vec2; 2],

    pub energy: Energy,

    /// Recent outer-bob positions, oldest first, ending at the current one.
    pub trail: Vec<Vec2>,
}
