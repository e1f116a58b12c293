use framesim_core::{
    Playback, TimeBase,
    constraint::{Finite, NonNegative, StrictlyPositive},
};

use crate::ConfigError;

/// Frames per second assumed by [`SpringConfig::default`].
pub const DEFAULT_FPS: f64 = 30.0;

/// Simulated seconds per video second in [`SpringConfig::default`].
pub const DEFAULT_SPEED_SCALE: f64 = 1.0;

/// Physical constants and initial condition of a damped spring.
///
/// The mass obeys `m·x'' + c·x' + k·x = 0`, with `x` the displacement from
/// equilibrium in scene units. This is plain data; [`SpringConfig::new`]
/// validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SpringParams {
    pub mass: f64,
    pub spring_constant: f64,

    /// Viscous damping coefficient `c`.
    pub damping: f64,

    pub initial_displacement: f64,
    pub initial_velocity: f64,

    /// Number of past frames kept in the snapshot history.
    pub history_length: u64,
}

impl Default for SpringParams {
    /// A lightly damped spring pulled 100 units down and released.
    fn default() -> Self {
        Self {
            mass: 1.0,
            spring_constant: 10.0,
            damping: 0.1,
            initial_displacement: 100.0,
            initial_velocity: 0.0,
            history_length: 150,
        }
    }
}

/// Validated, immutable configuration of a damped spring scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    mass: f64,
    spring_constant: f64,
    damping: f64,
    initial_displacement: f64,
    initial_velocity: f64,
    history_length: u64,
    time_base: TimeBase,
    playback: Playback,
}

impl SpringConfig {
    /// Validates `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mass or spring constant is not strictly
    /// positive, the damping is negative, or the initial condition is not
    /// finite.
    pub fn new(params: SpringParams, time_base: TimeBase) -> Result<Self, ConfigError> {
        Ok(Self {
            mass: ConfigError::check::<StrictlyPositive>("mass", params.mass)?.get(),
            spring_constant: ConfigError::check::<StrictlyPositive>(
                "spring_constant",
                params.spring_constant,
            )?
            .get(),
            damping: ConfigError::check::<NonNegative>("damping", params.damping)?.get(),
            initial_displacement: ConfigError::check::<Finite>(
                "initial_displacement",
                params.initial_displacement,
            )?
            .get(),
            initial_velocity: ConfigError::check::<Finite>(
                "initial_velocity",
                params.initial_velocity,
            )?
            .get(),
            history_length: params.history_length,
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
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[must_use]
    pub fn initial_displacement(&self) -> f64 {
        self.initial_displacement
    }

    #[must_use]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    #[must_use]
    pub fn history_length(&self) -> u64 {
        self.history_length
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

impl Default for SpringConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        Self::new(SpringParams::default(), time_base).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use framesim_core::constraint::ConstraintError;

    fn time_base() -> TimeBase {
        TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap()
    }

    #[test]
    fn defaults() {
        let config = SpringConfig::default();

        assert_eq!(config.mass(), 1.0);
        assert_eq!(config.spring_constant(), 10.0);
        assert_eq!(config.damping(), 0.1);
        assert_eq!(config.initial_displacement(), 100.0);
        assert_eq!(config.history_length(), 150);
        assert_eq!(config.time_base().dt(), 1.0 / 30.0);
    }

    #[test]
    fn undamped_spring_is_allowed() {
        let params = SpringParams {
            damping: 0.0,
            ..SpringParams::default()
        };

        assert!(SpringConfig::new(params, time_base()).is_ok());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_mass = SpringParams {
            mass: 0.0,
            ..SpringParams::default()
        };
        assert_eq!(
            SpringConfig::new(zero_mass, time_base()),
            Err(ConfigError::Invalid {
                field: "mass",
                source: ConstraintError::Zero,
            })
        );

        let negative_damping = SpringParams {
            damping: -0.5,
            ..SpringParams::default()
        };
        assert_eq!(
            SpringConfig::new(negative_damping, time_base()),
            Err(ConfigError::Invalid {
                field: "damping",
                source: ConstraintError::Negative,
            })
        );

        let nan_start = SpringParams {
            initial_velocity: f64::NAN,
            ..SpringParams::default()
        };
        assert!(matches!(
            SpringConfig::new(nan_start, time_base()),
            Err(ConfigError::Invalid {
                field: "initial_velocity",
                ..
            })
        ));
    }
}
