//! Chaotic double pendulum integrated with classical RK4.
//!
//! The pendulum is replayed from its configured initial condition for every
//! requested frame, using the fixed step from its [`TimeBase`]. Two requests
//! for the same frame perform the same arithmetic in the same order and
//! return identical snapshots.
//!
//! ```
//! use framesim_scenes::{Scene, pendulum::{DoublePendulum, PendulumConfig}};
//!
//! let pendulum = DoublePendulum::new(PendulumConfig::default());
//! let snapshot = pendulum.snapshot(0).unwrap();
//!
//! assert_eq!(snapshot.state.theta1, std::f64::consts::FRAC_PI_2);
//! ```

mod config;
mod equations;
mod snapshot;
mod state;

use std::{
    collections::VecDeque,
    convert::Infallible,
    f64::consts::{PI, TAU},
};

use framesim_core::{FrameIndex, OdeProblem, Playback, TimeBase};
use framesim_solvers::transient::{Action, Event, rk4};
use tracing::trace;

use crate::{Error, Scene, Vec2};

pub use crate::Energy;

pub use config::{DEFAULT_FPS, DEFAULT_SPEED_SCALE, PendulumConfig, PendulumParams};
pub use equations::MIN_DENOMINATOR;
pub use snapshot::PendulumSnapshot;
pub use state::{PendulumRate, PendulumState};

/// A double pendulum scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulum {
    config: PendulumConfig,
}

impl DoublePendulum {
    #[must_use]
    pub fn new(config: PendulumConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    /// Replays `step_count` RK4 steps from the initial condition.
    ///
    /// # Errors
    ///
    /// The pendulum equations cannot fail, so in practice this always
    /// succeeds. The `Result` is kept for uniformity with other scenes.
    pub fn simulate(&self, step_count: u64) -> Result<PendulumState, Error> {
        let dt = self.config.time_base().dt();
        let solution = rk4::solve_unobserved(self, self.config.initial_state(), dt, step_count)?;
        Ok(solution.state)
    }

    /// Returns the mechanical energy of `state`.
    #[must_use]
    pub fn energy(&self, state: &PendulumState) -> Energy {
        equations::energy(&self.config, state)
    }

    /// Returns the inner and outer bob positions of `state`.
    #[must_use]
    pub fn bob_positions(&self, state: &PendulumState) -> [Vec2; 2] {
        equations::bob_positions(&self.config, state)
    }
}

impl OdeProblem for DoublePendulum {
    type Delta = f64;
    type State = PendulumState;
    type Error = Infallible;

    fn derivative(&self, state: &PendulumState) -> Result<PendulumRate, Infallible> {
        Ok(equations::rate(&self.config, state))
    }
}

impl Scene for DoublePendulum {
    type Snapshot = PendulumSnapshot;

    fn time_base(&self) -> &TimeBase {
        self.config.time_base()
    }

    fn playback(&self) -> Playback {
        self.config.playback()
    }

    fn snapshot_at(&self, frame: FrameIndex) -> Result<PendulumSnapshot, Error> {
        let steps = self.time_base().steps_for(frame);
        trace!(%frame, steps = steps.count, dt = steps.dt, "replaying double pendulum");

        let capacity = self.config.trail_length();
        let mut trail = VecDeque::with_capacity(capacity);
        let solution = rk4::solve(
            self,
            self.config.initial_state(),
            steps.dt,
            steps.count,
            |event: &Event<'_, PendulumState>| -> Option<Action> {
                if capacity > 0 {
                    if trail.len() == capacity {
                        trail.pop_front();
                    }
                    trail.push_back(self.bob_positions(event.state)[1]);
                }
                None
            },
        )?;

        let state = solution.state;
        Ok(PendulumSnapshot {
            frame: frame.get(),
            elapsed: steps.elapsed(),
            state,
            bobs: self.bob_positions(&state),
            energy: self.energy(&state),
            trail: trail.into(),
        })
    }
}

/// Wraps an angle into `[-π, π)`.
///
/// Simulation angles are never wrapped; this is for display.
#[must_use]
pub fn wrap_angle(theta: f64) -> f64 {
    (theta + PI).rem_euclid(TAU) - PI
}
