use std::f64::consts::FRAC_PI_2;

use framesim_core::{
    Playback, TimeBase,
    constraint::{Constrained, Finite, NonNegative, StrictlyPositive},
};

use crate::ConfigError;

use super::PendulumState;

/// Frames per second assumed by [`PendulumConfig::default`].
pub const DEFAULT_FPS: f64 = 30.0;

/// Simulated seconds per video second in [`PendulumConfig::default`].
///
/// At 30 fps this is one step of 0.05 simulated seconds per frame.
pub const DEFAULT_SPEED_SCALE: f64 = 1.5;

/// Physical constants and initial condition of a double pendulum.
///
/// Angles are measured from the downward vertical, in radians. Lengths are in
/// scene units (pixels), so `gravity` is in scene units per second squared.
/// This is plain data; [`PendulumConfig::new`] validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PendulumParams {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub gravity: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,

    /// Number of outer-bob positions kept in the snapshot trail (0 disables).
    pub trail_length: usize,
}

impl Default for PendulumParams {
    /// Two equal arms held horizontal and released from rest.
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            l1: 150.0,
            l2: 150.0,
            gravity: 9.8,
            theta1: FRAC_PI_2,
            theta2: FRAC_PI_2,
            omega1: 0.0,
            omega2: 0.0,
            trail_length: 200,
        }
    }
}

/// Validated, immutable configuration of a double pendulum scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumConfig {
    masses: [Constrained<f64, StrictlyPositive>; 2],
    lengths: [Constrained<f64, StrictlyPositive>; 2],
    gravity: Constrained<f64, NonNegative>,
    initial: PendulumState,
    trail_length: usize,
    time_base: TimeBase,
    playback: Playback,
}

impl PendulumConfig {
    /// Validates `params` and pairs them with a time base.
    ///
    /// # Errors
    ///
    /// Returns an error if a mass or length is not strictly positive, gravity
    /// is negative, or any value is not finite.
    pub fn new(params: PendulumParams, time_base: TimeBase) -> Result<Self, ConfigError> {
        let angle = |field, value| ConfigError::check::<Finite>(field, value).map(|v| v.get());

        Ok(Self {
            masses: [
                ConfigError::check("m1", params.m1)?,
                ConfigError::check("m2", params.m2)?,
            ],
            lengths: [
                ConfigError::check("l1", params.l1)?,
                ConfigError::check("l2", params.l2)?,
            ],
            gravity: ConfigError::check("gravity", params.gravity)?,
            initial: PendulumState {
                theta1: angle("theta1", params.theta1)?,
                theta2: angle("theta2", params.theta2)?,
                omega1: angle("omega1", params.omega1)?,
                omega2: angle("omega2", params.omega2)?,
            },
            trail_length: params.trail_length,
            time_base,
            playback: Playback::Continuous,
        })
    }

    /// Returns the configuration with a different playback mode.
    #[must_use]
    pub fn with_playback(self, playback: Playback) -> Self {
        Self { playback, ..self }
    }

    #[must_use]
    pub fn masses(&self) -> [f64; 2] {
        self.masses.map(|m| m.get())
    }

    #[must_use]
    pub fn lengths(&self) -> [f64; 2] {
        self.lengths.map(|l| l.get())
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity.get()
    }

    /// The state at frame zero.
    #[must_use]
    pub fn initial_state(&self) -> PendulumState {
        self.initial
    }

    #[must_use]
    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    #[must_use]
    pub fn time_base(&self) -> &TimeBase {
        &self.time_base
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        self.playback
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        Self::new(PendulumParams::default(), time_base).unwrap()
    }
}
