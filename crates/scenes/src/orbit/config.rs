use framesim_core::{Playback, TimeBase};

use crate::ConfigError;

use super::{BodySpec, OrbitBody};

/// Frames per second assumed by [`OrbitConfig::default`].
pub const DEFAULT_FPS: f64 = 30.0;

/// Simulated time units per video second in [`OrbitConfig::default`].
///
/// At 30 fps each frame advances the default planets by half a day.
pub const DEFAULT_SPEED_SCALE: f64 = 15.0;

/// Validated, immutable configuration of an orbit scene.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    bodies: Vec<OrbitBody>,
    time_base: TimeBase,
    playback: Playback,
}

impl OrbitConfig {
    /// Validates every body in `specs`.
    ///
    /// # Errors
    ///
    /// Returns the first body validation error.
    pub fn new(specs: Vec<BodySpec>, time_base: TimeBase) -> Result<Self, ConfigError> {
        let bodies = specs
            .into_iter()
            .map(OrbitBody::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bodies,
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
    pub fn bodies(&self) -> &[OrbitBody] {
        &self.bodies
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

impl Default for OrbitConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        Self::new(BodySpec::inner_planets(), time_base).unwrap()
    }
}
