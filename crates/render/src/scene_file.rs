//! Scene files: TOML documents describing one scene.
//!
//! A file names its scene with `kind` and may set any parameter of that
//! scene. Missing parameters take their defaults.
//!
//! ```toml
//! kind = "collision"
//! count = 80
//! temperature = 2.5
//! seed = 7
//! loop_period = 300
//! ```

use std::{
    fs,
    num::{NonZeroU32, NonZeroU64},
    path::Path,
};

use anyhow::{Context, Result};
use framesim_scenes::{
    ConfigError, FrameIndex, Playback, TimeBase, Vec2,
    collision::{
        self, CollisionConfig, CollisionParams, CollisionWorld, Container, ParticleSpec,
    },
    orbit::{self, BodySpec, OrbitConfig, OrbitSystem},
    pendulum::{self, DoublePendulum, PendulumConfig, PendulumParams},
    spring::{self, DampedSpring, SpringConfig, SpringParams},
    wave::{self, SourceLayout, WaveConfig, WaveField, WaveParams},
};
use serde::Deserialize;

/// Timing options shared by every scene kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub fps: Option<f64>,
    pub speed_scale: Option<f64>,
    pub substeps: Option<NonZeroU32>,

    /// Restart the simulation every this many frames.
    pub loop_period: Option<NonZeroU64>,

    /// Show this frame's state for all later frames.
    pub hold_last: Option<u64>,
}

impl Timing {
    fn time_base(
        &self,
        default_fps: f64,
        default_speed_scale: f64,
    ) -> Result<TimeBase, ConfigError> {
        let time_base = TimeBase::new(
            self.fps.unwrap_or(default_fps),
            self.speed_scale.unwrap_or(default_speed_scale),
        )?;
        Ok(match self.substeps {
            Some(substeps) => time_base.with_substeps(substeps),
            None => time_base,
        })
    }

    fn playback(&self) -> Playback {
        match (self.loop_period, self.hold_last) {
            (Some(period), _) => Playback::Loop { period },
            (None, Some(last)) => Playback::Hold {
                last: FrameIndex::new(last),
            },
            (None, None) => Playback::Continuous,
        }
    }
}

/// The contents of a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneFile {
    Pendulum {
        #[serde(flatten)]
        timing: Timing,
        #[serde(flatten)]
        params: PendulumParams,
    },
    Collision {
        #[serde(flatten)]
        timing: Timing,
        #[serde(flatten)]
        params: CollisionParams,

        /// Explicit particles; replaces the seeded layout when present.
        #[serde(default)]
        particles: Option<Vec<ParticleSpec>>,

        #[serde(default)]
        relaxation_passes: Option<usize>,
    },
    Wave {
        #[serde(flatten)]
        timing: Timing,
        #[serde(flatten)]
        params: WaveParams,

        /// Number of sources in the standard layout.
        #[serde(default)]
        sources: Option<usize>,

        /// Explicit source positions; overrides `sources`.
        #[serde(default)]
        positions: Option<Vec<Vec2>>,
    },
    Spring {
        #[serde(flatten)]
        timing: Timing,
        #[serde(flatten)]
        params: SpringParams,
    },
    Orbit {
        #[serde(flatten)]
        timing: Timing,

        /// Orbiting bodies; the inner planets when absent.
        #[serde(default)]
        bodies: Option<Vec<BodySpec>>,
    },
}

/// A validated scene, ready to render.
#[derive(Debug, Clone)]
pub enum LoadedScene {
    Pendulum(DoublePendulum),
    Collision(CollisionWorld),
    Wave(WaveField),
    Spring(DampedSpring),
    Orbit(OrbitSystem),
}

impl LoadedScene {
    /// Short name of the scene kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pendulum(_) => "pendulum",
            Self::Collision(_) => "collision",
            Self::Wave(_) => "wave",
            Self::Spring(_) => "spring",
            Self::Orbit(_) => "orbit",
        }
    }
}

impl SceneFile {
    /// Validates the file contents and builds the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is invalid.
    pub fn build(self) -> Result<LoadedScene, ConfigError> {
        match self {
            Self::Pendulum { timing, params } => {
                let time_base =
                    timing.time_base(pendulum::DEFAULT_FPS, pendulum::DEFAULT_SPEED_SCALE)?;
                let config =
                    PendulumConfig::new(params, time_base)?.with_playback(timing.playback());
                Ok(LoadedScene::Pendulum(DoublePendulum::new(config)))
            }
            Self::Collision {
                timing,
                params,
                particles,
                relaxation_passes,
            } => {
                let time_base =
                    timing.time_base(collision::DEFAULT_FPS, collision::DEFAULT_SPEED_SCALE)?;
                let config = match particles {
                    Some(specs) => {
                        let container = Container::new(params.width, params.height)?;
                        CollisionConfig::with_particles(container, &specs, time_base)?
                    }
                    None => CollisionConfig::new(params, time_base)?,
                };
                let config = config
                    .with_relaxation_passes(
                        relaxation_passes.unwrap_or(collision::DEFAULT_RELAXATION_PASSES),
                    )
                    .with_playback(timing.playback());
                Ok(LoadedScene::Collision(CollisionWorld::new(config)))
            }
            Self::Wave {
                timing,
                params,
                sources,
                positions,
            } => {
                let time_base = timing.time_base(wave::DEFAULT_FPS, wave::DEFAULT_SPEED_SCALE)?;
                let layout = match (positions, sources) {
                    (Some(points), _) => SourceLayout::Custom(points),
                    (None, Some(count)) => SourceLayout::standard(count),
                    (None, None) => SourceLayout::default(),
                };
                let config =
                    WaveConfig::new(params, &layout, time_base)?.with_playback(timing.playback());
                Ok(LoadedScene::Wave(WaveField::new(config)))
            }
            Self::Spring { timing, params } => {
                let time_base =
                    timing.time_base(spring::DEFAULT_FPS, spring::DEFAULT_SPEED_SCALE)?;
                let config =
                    SpringConfig::new(params, time_base)?.with_playback(timing.playback());
                Ok(LoadedScene::Spring(DampedSpring::new(config)))
            }
            Self::Orbit { timing, bodies } => {
                let time_base = timing.time_base(orbit::DEFAULT_FPS, orbit::DEFAULT_SPEED_SCALE)?;
                let config = OrbitConfig::new(
                    bodies.unwrap_or_else(BodySpec::inner_planets),
                    time_base,
                )?
                .with_playback(timing.playback());
                Ok(LoadedScene::Orbit(OrbitSystem::new(config)))
            }
        }
    }
}

/// Reads, parses, and validates a scene file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it describes
/// an invalid scene.
pub fn load(path: &Path) -> Result<LoadedScene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let file: SceneFile = toml::from_str(&text)
        .with_context(|| format!("failed to parse scene file {}", path.display()))?;
    file.build()
        .with_context(|| format!("invalid scene in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> SceneFile {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn pendulum_defaults() {
        let file = parse(r#"kind = "pendulum""#);

        assert_eq!(
            file,
            SceneFile::Pendulum {
                timing: Timing::default(),
                params: PendulumParams::default(),
            }
        );

        let LoadedScene::Pendulum(pendulum) = file.build().unwrap() else {
            panic!("expected a pendulum");
        };
        assert_eq!(pendulum.config(), &PendulumConfig::default());
    }

    #[test]
    fn pendulum_overrides() {
        let file = parse(
            r#"
            kind = "pendulum"
            m2 = 2.5
            theta2 = 1.0
            trail_length = 50
            fps = 60.0
            substeps = 4
            hold_last = 120
            "#,
        );

        let LoadedScene::Pendulum(pendulum) = file.build().unwrap() else {
            panic!("expected a pendulum");
        };
        let config = pendulum.config();
        assert_eq!(config.masses(), [1.0, 2.5]);
        assert_eq!(config.initial_state().theta2, 1.0);
        assert_eq!(config.trail_length(), 50);
        assert_eq!(config.time_base().fps(), 60.0);
        assert_eq!(config.time_base().substeps().get(), 4);
        assert_eq!(
            config.playback(),
            Playback::Hold {
                last: FrameIndex::new(120)
            }
        );
    }

    #[test]
    fn collision_with_explicit_particles() {
        let file = parse(
            r#"
            kind = "collision"
            width = 400.0
            height = 300.0
            relaxation_passes = 2
            loop_period = 90

            [[particles]]
            position = [100.0, 150.0]
            velocity = [5.0, 0.0]

            [[particles]]
            position = [160.0, 150.0]
            velocity = [-5.0, 0.0]
            mass = 2.0
            "#,
        );

        let LoadedScene::Collision(world) = file.build().unwrap() else {
            panic!("expected a collision world");
        };
        let config = world.config();
        let particles = config.initial_particles().as_slice();
        assert_eq!(particles.len(), 2);
        assert_eq!(particles[1].mass(), 2.0);
        assert_eq!(particles[1].position(), Vec2::new(160.0, 150.0));
        assert_eq!(config.container().width(), 400.0);
        assert_eq!(config.relaxation_passes(), 2);
        assert!(matches!(config.playback(), Playback::Loop { .. }));
    }

    #[test]
    fn seeded_collision() {
        let file = parse(
            r#"
            kind = "collision"
            count = 12
            seed = 99
            "#,
        );

        let LoadedScene::Collision(world) = file.build().unwrap() else {
            panic!("expected a collision world");
        };
        assert_eq!(world.config().initial_particles().len(), 12);
    }

    #[test]
    fn wave_layouts() {
        let ring = parse(
            r#"
            kind = "wave"
            sources = 5
            wavelength = 60.0
            "#,
        );
        let LoadedScene::Wave(field) = ring.build().unwrap() else {
            panic!("expected a wave field");
        };
        assert_eq!(field.config().sources().len(), 5);
        assert_eq!(field.config().sources()[0].wavelength(), 60.0);

        let custom = parse(
            r#"
            kind = "wave"
            positions = [[10.0, 20.0], [30.0, 40.0], [50.0, 60.0]]
            "#,
        );
        let LoadedScene::Wave(field) = custom.build().unwrap() else {
            panic!("expected a wave field");
        };
        assert_eq!(field.config().sources()[2].position(), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn spring_overrides() {
        let file = parse(
            r#"
            kind = "spring"
            damping = 6.5
            initial_velocity = -20.0
            history_length = 60
            loop_period = 300
            "#,
        );

        let LoadedScene::Spring(spring) = file.build().unwrap() else {
            panic!("expected a spring");
        };
        let config = spring.config();
        assert_eq!(config.damping(), 6.5);
        assert_eq!(config.initial_velocity(), -20.0);
        assert_eq!(config.mass(), SpringParams::default().mass);
        assert_eq!(config.history_length(), 60);
        assert_eq!(config.time_base().fps(), spring::DEFAULT_FPS);
        assert!(matches!(config.playback(), Playback::Loop { .. }));
    }

    #[test]
    fn orbit_bodies() {
        let planets = parse(r#"kind = "orbit""#);
        let LoadedScene::Orbit(system) = planets.build().unwrap() else {
            panic!("expected an orbit system");
        };
        assert_eq!(system.config().bodies().len(), 4);
        assert_eq!(system.config().time_base().dt(), 0.5);

        let custom = parse(
            r#"
            kind = "orbit"
            speed_scale = 30.0

            [[bodies]]
            name = "Io"
            semi_major_axis = 42.0
            eccentricity = 0.004
            period = 1.77
            "#,
        );
        let LoadedScene::Orbit(system) = custom.build().unwrap() else {
            panic!("expected an orbit system");
        };
        let bodies = system.config().bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name(), "Io");
        assert_eq!(bodies[0].radius(), BodySpec::default().radius);
        assert_eq!(system.config().time_base().dt(), 1.0);
    }

    #[test]
    fn invalid_values_fail_to_build() {
        let file = parse(
            r#"
            kind = "pendulum"
            l1 = -3.0
            "#,
        );
        assert!(file.build().is_err());

        let file = parse(
            r#"
            kind = "wave"
            fps = 0.0
            "#,
        );
        assert!(matches!(file.build(), Err(ConfigError::TimeBase(_))));

        let file = parse(
            r#"
            kind = "spring"
            mass = 0.0
            "#,
        );
        assert!(file.build().is_err());

        let file = parse(
            r#"
            kind = "orbit"

            [[bodies]]
            name = "comet"
            eccentricity = 1.2
            "#,
        );
        assert!(matches!(file.build(), Err(ConfigError::OpenOrbit { .. })));
    }

    #[test]
    fn bundled_scenes_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes");

        for (name, kind) in [
            ("pendulum.toml", "pendulum"),
            ("collision.toml", "collision"),
            ("head_on.toml", "collision"),
            ("wave.toml", "wave"),
            ("spring.toml", "spring"),
            ("orbit.toml", "orbit"),
        ] {
            assert_eq!(load(&dir.join(name)).unwrap().kind(), kind, "{name}");
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(toml::from_str::<SceneFile>(r#"kind = "lava_lamp""#).is_err());
    }
}
