use std::f64::consts::TAU;

use framesim_core::constraint::{NonNegative, StrictlyPositive};

use crate::{ConfigError, Vec2};

use super::kepler;

/// Orbit and appearance of one body, as written in a scene description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BodySpec {
    pub name: String,

    /// Semi-major axis in scene units.
    pub semi_major_axis: f64,

    pub eccentricity: f64,

    /// Time for one revolution, in simulated time units.
    pub period: f64,

    /// Drawn radius in scene units.
    pub radius: f64,

    pub color: String,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            semi_major_axis: 160.0,
            eccentricity: 0.0,
            period: 365.0,
            radius: 10.0,
            color: "#4A90E2".to_owned(),
        }
    }
}

impl BodySpec {
    /// The four inner planets, with periods in days.
    #[must_use]
    pub fn inner_planets() -> Vec<Self> {
        [
            ("Mercury", 80.0, 0.2, 88.0, 6.0, "#8C7853"),
            ("Venus", 120.0, 0.01, 225.0, 10.0, "#FFC649"),
            ("Earth", 160.0, 0.017, 365.0, 10.0, "#4A90E2"),
            ("Mars", 200.0, 0.09, 687.0, 8.0, "#E27B58"),
        ]
        .into_iter()
        .map(
            |(name, semi_major_axis, eccentricity, period, radius, color)| Self {
                name: name.to_owned(),
                semi_major_axis,
                eccentricity,
                period,
                radius,
                color: color.to_owned(),
            },
        )
        .collect()
    }
}

/// A validated body on a closed Keplerian orbit around the origin.
///
/// The central body sits at a focus. At time zero the body is at periapsis,
/// on the positive x axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrbitBody {
    name: String,
    semi_major_axis: f64,
    eccentricity: f64,
    period: f64,
    radius: f64,
    color: String,
}

/// Position and motion of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyState {
    /// Position relative to the central body.
    pub position: Vec2,

    /// Velocity in scene units per simulated time unit.
    pub velocity: Vec2,

    /// Unreduced mean anomaly `2π·t/T`; counts completed revolutions.
    pub mean_anomaly: f64,

    /// Eccentric anomaly in `[−π, π)`.
    pub eccentric_anomaly: f64,

    /// Distance from the central body.
    pub distance: f64,
}

impl OrbitBody {
    /// Validates a body description.
    ///
    /// # Errors
    ///
    /// Returns an error if the semi-major axis, period, or radius is not
    /// strictly positive, or if the eccentricity is outside `[0, 1)`.
    pub fn new(spec: BodySpec) -> Result<Self, ConfigError> {
        let eccentricity = ConfigError::check::<NonNegative>("eccentricity", spec.eccentricity)?;
        if eccentricity.get() >= 1.0 {
            return Err(ConfigError::OpenOrbit {
                body: spec.name,
                eccentricity: eccentricity.get(),
            });
        }

        Ok(Self {
            semi_major_axis: ConfigError::check::<StrictlyPositive>(
                "semi_major_axis",
                spec.semi_major_axis,
            )?
            .get(),
            eccentricity: eccentricity.get(),
            period: ConfigError::check::<StrictlyPositive>("period", spec.period)?.get(),
            radius: ConfigError::check::<StrictlyPositive>("radius", spec.radius)?.get(),
            name: spec.name,
            color: spec.color,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Mean angular rate `n = 2π/T`.
    #[must_use]
    pub fn mean_motion(&self) -> f64 {
        TAU / self.period
    }

    /// Returns where the body is `elapsed` time units after periapsis.
    #[must_use]
    pub fn state_at(&self, elapsed: f64) -> BodyState {
        let a = self.semi_major_axis;
        let b = self.semi_minor_axis();
        let e = self.eccentricity;

        let mean_anomaly = self.mean_motion() * elapsed;
        let eccentric_anomaly = kepler::eccentric_anomaly(mean_anomaly, e);
        let (sin, cos) = eccentric_anomaly.sin_cos();
        let anomaly_rate = self.mean_motion() / (1.0 - e * cos);

        BodyState {
            position: Vec2::new(a * (cos - e), b * sin),
            velocity: Vec2::new(-a * sin, b * cos) * anomaly_rate,
            mean_anomaly,
            eccentric_anomaly,
            distance: a * (1.0 - e * cos),
        }
    }
}
