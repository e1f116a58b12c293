use framesim_core::{
    Playback, TimeBase,
    constraint::{Finite, StrictlyPositive},
};

use crate::{ConfigError, Vec2};

use super::{Container, Particle, Particles, layout::SeededLayout};

/// Frames per second assumed by [`CollisionConfig::default`].
pub const DEFAULT_FPS: f64 = 30.0;

/// Simulated seconds per video second in [`CollisionConfig::default`].
///
/// At 30 fps this is one step of 0.5 simulated seconds per frame.
pub const DEFAULT_SPEED_SCALE: f64 = 15.0;

/// Default limit on position-only separation passes per step.
///
/// Passes stop as soon as no pair overlaps by more than
/// [`CONTACT_TOLERANCE`](super::CONTACT_TOLERANCE), so the limit is only
/// reached by configurations packed too tightly to settle.
pub const DEFAULT_RELAXATION_PASSES: usize = 4096;

/// Parameters of a seeded collision scene.
///
/// This is plain data; [`CollisionConfig::new`] validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CollisionParams {
    pub width: f64,
    pub height: f64,
    pub count: usize,
    pub radius: f64,
    pub mass: f64,

    /// Relative scale of the initial speeds, clamped to `[0, 10]`.
    pub temperature: f64,

    pub seed: u64,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            count: 50,
            radius: 8.0,
            mass: 1.0,
            temperature: 1.0,
            seed: 0,
        }
    }
}

/// Initial state of one explicitly placed particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ParticleSpec {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub mass: f64,
    pub hue: f64,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            radius: 8.0,
            mass: 1.0,
            hue: 0.0,
        }
    }
}

/// Validated, immutable configuration of a collision scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionConfig {
    container: Container,
    initial: Particles,
    relaxation_passes: usize,
    time_base: TimeBase,
    playback: Playback,
}

impl CollisionConfig {
    /// Builds a scene with a seeded random layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the container, radius, mass, or temperature is
    /// invalid, or if the container cannot hold a particle.
    pub fn new(params: CollisionParams, time_base: TimeBase) -> Result<Self, ConfigError> {
        let container = Container::new(params.width, params.height)?;
        let radius = ConfigError::check::<StrictlyPositive>("radius", params.radius)?.get();
        let mass = ConfigError::check::<StrictlyPositive>("mass", params.mass)?.get();
        let temperature = ConfigError::check::<Finite>("temperature", params.temperature)?.get();
        container.check_fits(radius)?;

        let layout = SeededLayout {
            count: params.count,
            radius,
            mass,
            temperature,
            seed: params.seed,
        };
        Ok(Self::from_parts(container, layout.generate(&container), time_base))
    }

    /// Builds a scene from explicitly placed particles.
    ///
    /// Particle ids are their indices in `specs`.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite, a radius or mass is not
    /// strictly positive, or a particle does not lie inside the container.
    pub fn with_particles(
        container: Container,
        specs: &[ParticleSpec],
        time_base: TimeBase,
    ) -> Result<Self, ConfigError> {
        let particles = specs
            .iter()
            .enumerate()
            .map(|(id, spec)| {
                let radius = ConfigError::check::<StrictlyPositive>("radius", spec.radius)?.get();
                let mass = ConfigError::check::<StrictlyPositive>("mass", spec.mass)?.get();
                let hue = ConfigError::check::<Finite>("hue", spec.hue)?.get();
                for (field, value) in [
                    ("position", spec.position.x),
                    ("position", spec.position.y),
                    ("velocity", spec.velocity.x),
                    ("velocity", spec.velocity.y),
                ] {
                    ConfigError::check::<Finite>(field, value)?;
                }

                let particle = Particle::new(id, spec.position, spec.velocity, radius, mass, hue);
                if container.contains(&particle) {
                    Ok(particle)
                } else {
                    Err(ConfigError::ParticleOutsideContainer { id })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(container, particles, time_base))
    }

    fn from_parts(container: Container, particles: Vec<Particle>, time_base: TimeBase) -> Self {
        Self {
            container,
            initial: Particles::new(particles),
            relaxation_passes: DEFAULT_RELAXATION_PASSES,
            time_base,
            playback: Playback::Continuous,
        }
    }

    /// Returns the configuration with a different relaxation pass limit.
    ///
    /// Zero disables relaxation, leaving only the per-collision push.
    #[must_use]
    pub fn with_relaxation_passes(self, relaxation_passes: usize) -> Self {
        Self {
            relaxation_passes,
            ..self
        }
    }

    /// Returns the configuration with a different playback mode.
    #[must_use]
    pub fn with_playback(self, playback: Playback) -> Self {
        Self { playback, ..self }
    }

    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The particles at frame zero.
    #[must_use]
    pub fn initial_particles(&self) -> &Particles {
        &self.initial
    }

    #[must_use]
    pub fn relaxation_passes(&self) -> usize {
        self.relaxation_passes
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

impl Default for CollisionConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        Self::new(CollisionParams::default(), time_base).unwrap()
    }
}
