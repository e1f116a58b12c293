//! Bodies on closed Keplerian orbits around a fixed central body.
//!
//! Each body's position comes from solving Kepler's equation for the frame's
//! elapsed time, so bodies sweep equal areas in equal times and any frame can
//! be evaluated directly.
//!
//! ```
//! use framesim_scenes::{Scene, orbit::{OrbitConfig, OrbitSystem}};
//!
//! let system = OrbitSystem::new(OrbitConfig::default());
//! let snapshot = system.snapshot(0).unwrap();
//!
//! assert_eq!(snapshot.bodies.len(), 4);
//! assert!(snapshot.bodies.iter().all(|body| body.position.y == 0.0));
//! ```

mod body;
mod config;
mod kepler;

use framesim_core::{FrameError, FrameIndex, Playback, TimeBase};
use tracing::trace;

use crate::{Error, Scene};

pub use body::{BodySpec, BodyState, OrbitBody};
pub use config::{DEFAULT_FPS, DEFAULT_SPEED_SCALE, OrbitConfig};
pub use kepler::{KEPLER_TOLERANCE, MAX_ITERATIONS, eccentric_anomaly};

/// Render-ready state of an orbit scene at one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrbitSnapshot {
    /// The simulated frame, after playback was applied.
    pub frame: u64,

    /// Simulated time units since every body passed periapsis.
    pub elapsed: f64,

    /// One state per configured body, in configuration order.
    pub bodies: Vec<BodyState>,
}

/// An orbit scene.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSystem {
    config: OrbitConfig,
}

impl OrbitSystem {
    #[must_use]
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Returns the state of every body at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `frame` is not a valid frame index.
    pub fn states_at<F>(&self, frame: F) -> Result<Vec<BodyState>, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let frame = frame.try_into().map_err(FrameError::from)?;
        let frame = self.config.playback().resolve(frame);
        Ok(self.states_at_time(self.time_base().elapsed(frame)))
    }

    /// Returns the state of every body `elapsed` time units after periapsis.
    #[must_use]
    pub fn states_at_time(&self, elapsed: f64) -> Vec<BodyState> {
        self.config
            .bodies()
            .iter()
            .map(|body| body.state_at(elapsed))
            .collect()
    }
}

impl Scene for OrbitSystem {
    type Snapshot = OrbitSnapshot;

    fn time_base(&self) -> &TimeBase {
        self.config.time_base()
    }

    fn playback(&self) -> Playback {
        self.config.playback()
    }

    fn snapshot_at(&self, frame: FrameIndex) -> Result<OrbitSnapshot, Error> {
        let elapsed = self.time_base().elapsed(frame);
        trace!(%frame, elapsed, bodies = self.config.bodies().len(), "evaluating orbits");

        Ok(OrbitSnapshot {
            frame: frame.get(),
            elapsed,
            bodies: self.states_at_time(elapsed),
        })
    }
}
