//! Elastic collisions of circular particles in a rectangular container.
//!
//! Each step moves every particle along its velocity (forward Euler), then
//! reflects particles off the walls, then resolves particle contacts in index
//! order. Walls and contacts are applied in the solver's finalize hook, so the
//! derivative is just the particle velocities.
//!
//! ```
//! use framesim_scenes::{Scene, collision::{CollisionConfig, CollisionWorld}};
//!
//! let world = CollisionWorld::new(CollisionConfig::default());
//! let snapshot = world.snapshot(30).unwrap();
//!
//! assert_eq!(snapshot.particles.len(), 50);
//! ```

mod config;
mod contact;
mod container;
mod layout;
mod particle;
mod snapshot;

use std::convert::Infallible;

use framesim_core::{FrameIndex, Observer, OdeProblem, Playback, TimeBase};
use framesim_solvers::transient::{Action, Event, Solution, euler};
use tracing::{debug, trace};

use crate::{Error, Scene};

pub use config::{
    CollisionConfig, CollisionParams, DEFAULT_FPS, DEFAULT_RELAXATION_PASSES,
    DEFAULT_SPEED_SCALE, ParticleSpec,
};
pub use contact::CONTACT_TOLERANCE;
pub use container::Container;
pub use layout::MAX_TEMPERATURE;
pub use particle::{Particle, Particles, Velocities};
pub use snapshot::CollisionSnapshot;

/// A collision scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionWorld {
    config: CollisionConfig,
}

impl CollisionWorld {
    #[must_use]
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replays `step_count` steps from the initial layout.
    ///
    /// The cost is `O(step_count · n²)`. An empty world stays empty.
    ///
    /// # Errors
    ///
    /// Collision steps cannot fail, so in practice this always succeeds.
    pub fn simulate(&self, step_count: u64) -> Result<Vec<Particle>, Error> {
        Ok(self.simulate_observed(step_count, ())?.state.into_vec())
    }

    /// Replays `step_count` steps, reporting every state to `observer`.
    ///
    /// # Errors
    ///
    /// Collision steps cannot fail, so in practice this always succeeds.
    pub fn simulate_observed<Obs>(
        &self,
        step_count: u64,
        observer: Obs,
    ) -> Result<Solution<Particles>, Error>
    where
        Obs: for<'a> Observer<Event<'a, Particles>, Action>,
    {
        let dt = self.config.time_base().dt();
        let initial = self.config.initial_particles().clone();
        Ok(euler::solve(self, initial, dt, step_count, observer)?)
    }
}

impl OdeProblem for CollisionWorld {
    type Delta = f64;
    type State = Particles;
    type Error = Infallible;

    fn derivative(&self, state: &Particles) -> Result<Velocities, Infallible> {
        Ok(state.velocities())
    }

    fn finalize_step(
        &self,
        mut next: Particles,
        _prev: &Particles,
        _delta: &f64,
    ) -> Result<Particles, Infallible> {
        let container = self.config.container();
        let particles = next.as_mut_slice();

        for particle in particles.iter_mut() {
            container.reflect(particle);
        }
        let passes = self.config.relaxation_passes();
        if !contact::resolve(particles, container, passes) {
            debug!(
                passes,
                overlap = contact::max_overlap(particles),
                "contacts did not settle within the relaxation limit"
            );
        }

        Ok(next)
    }
}

impl Scene for CollisionWorld {
    type Snapshot = CollisionSnapshot;

    fn time_base(&self) -> &TimeBase {
        self.config.time_base()
    }

    fn playback(&self) -> Playback {
        self.config.playback()
    }

    fn snapshot_at(&self, frame: FrameIndex) -> Result<CollisionSnapshot, Error> {
        let steps = self.time_base().steps_for(frame);
        let particles = self.config.initial_particles();
        if particles.is_empty() {
            debug!(%frame, "collision world has no particles");
        }
        trace!(
            %frame,
            steps = steps.count,
            particles = particles.len(),
            "replaying collision world"
        );

        let state = self.simulate_observed(steps.count, ())?.state;
        Ok(CollisionSnapshot {
            frame: frame.get(),
            elapsed: steps.elapsed(),
            temperature: state.temperature(),
            kinetic_energy: state.kinetic_energy(),
            momentum: state.momentum(),
            particles: state.into_vec(),
        })
    }
}
