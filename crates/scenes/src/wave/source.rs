use std::f64::consts::TAU;

use framesim_core::constraint::{Finite, StrictlyPositive};

use crate::{ConfigError, Vec2};

/// Horizontal offset of each source from the center in a two-source layout.
pub const PAIR_OFFSET: f64 = 100.0;

/// Ring radius of layouts with three or more sources.
pub const RING_RADIUS: f64 = 150.0;

/// A fixed point source of circular waves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaveSource {
    position: Vec2,
    wavelength: f64,
    amplitude: f64,
}

impl WaveSource {
    /// Creates a source.
    ///
    /// # Errors
    ///
    /// Returns an error if the position or amplitude is not finite, or the
    /// wavelength is not strictly positive.
    pub fn new(position: Vec2, wavelength: f64, amplitude: f64) -> Result<Self, ConfigError> {
        ConfigError::check::<Finite>("position", position.x)?;
        ConfigError::check::<Finite>("position", position.y)?;
        Ok(Self {
            position,
            wavelength: ConfigError::check::<StrictlyPositive>("wavelength", wavelength)?.get(),
            amplitude: ConfigError::check::<Finite>("amplitude", amplitude)?.get(),
        })
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Spatial angular frequency `k = 2π / λ`.
    #[must_use]
    pub fn wave_number(&self) -> f64 {
        TAU / self.wavelength
    }

    /// Displacement contributed at `point` when the temporal phase is `phase`.
    ///
    /// `A · sin(k·d − phase) / (1 + d / attenuation_scale)`
    pub(super) fn contribution(&self, point: Vec2, phase: f64, attenuation_scale: f64) -> f64 {
        let distance = (point - self.position).norm();
        let attenuation = 1.0 / (1.0 + distance / attenuation_scale);
        self.amplitude * (self.wave_number() * distance - phase).sin() * attenuation
    }
}

/// Placement of the sources of a wave scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SourceLayout {
    /// `count` sources arranged around the center of the field.
    ///
    /// One source sits at the center. Two sources sit [`PAIR_OFFSET`] to
    /// either side of it. Three or more are spaced evenly on a ring of
    /// [`RING_RADIUS`], starting on the `+x` axis.
    Standard { count: usize },

    /// Sources at explicit positions.
    Custom(Vec<Vec2>),
}

impl SourceLayout {
    #[must_use]
    pub fn standard(count: usize) -> Self {
        Self::Standard { count }
    }

    /// Returns the source positions for a field centered on `center`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn positions(&self, center: Vec2) -> Vec<Vec2> {
        match self {
            Self::Standard { count: 0 } => Vec::new(),
            Self::Standard { count: 1 } => vec![center],
            Self::Standard { count: 2 } => vec![
                center - Vec2::new(PAIR_OFFSET, 0.0),
                center + Vec2::new(PAIR_OFFSET, 0.0),
            ],
            Self::Standard { count } => (0..*count)
                .map(|i| {
                    let angle = TAU * i as f64 / *count as f64;
                    center + Vec2::new(angle.cos(), angle.sin()) * RING_RADIUS
                })
                .collect(),
            Self::Custom(points) => points.clone(),
        }
    }
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self::standard(2)
    }
}
