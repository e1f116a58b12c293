//! A mass on a damped spring, evaluated in closed form.
//!
//! The displacement at any frame comes from the exact solution of
//! `m·x'' + c·x' + k·x = 0`, so frames cost the same no matter how far into
//! the video they are. Snapshots also carry the displacement over a window of
//! recent frames for drawing a displacement-time plot.
//!
//! ```
//! use framesim_scenes::{Scene, spring::{DampedSpring, SpringConfig}};
//!
//! let spring = DampedSpring::new(SpringConfig::default());
//! let snapshot = spring.snapshot(0).unwrap();
//!
//! assert_eq!(snapshot.state.displacement, 100.0);
//! ```

mod config;
mod motion;

use framesim_core::{FrameError, FrameIndex, Playback, TimeBase};
use tracing::trace;

use crate::{Energy, Error, Scene};

pub use config::{DEFAULT_FPS, DEFAULT_SPEED_SCALE, SpringConfig, SpringParams};
pub use motion::{CRITICAL_TOLERANCE, Regime, SpringState};

use motion::Motion;

/// Displacement of the mass at one frame of the history window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HistorySample {
    pub frame: u64,
    pub displacement: f64,
}

/// Render-ready state of a damped spring at one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpringSnapshot {
    /// The simulated frame, after playback was applied.
    pub frame: u64,

    /// Simulated seconds since release.
    pub elapsed: f64,

    pub state: SpringState,
    pub energy: Energy,
    pub regime: Regime,

    /// Displacements from `history_length` frames back up to this frame,
    /// oldest first. Starts at frame zero early in the video.
    pub history: Vec<HistorySample>,
}

/// A damped spring scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedSpring {
    config: SpringConfig,
    motion: Motion,
}

impl DampedSpring {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            motion: Motion::new(&config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Undamped angular frequency `ω0 = √(k/m)`.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        motion::natural_frequency(&self.config)
    }

    /// Envelope decay rate `γ = c/(2m)`.
    #[must_use]
    pub fn damping_rate(&self) -> f64 {
        motion::damping_rate(&self.config)
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        self.motion.regime()
    }

    /// Returns the state of the mass at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `frame` is not a valid frame index.
    pub fn state_at<F>(&self, frame: F) -> Result<SpringState, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let frame = frame.try_into().map_err(FrameError::from)?;
        let frame = self.config.playback().resolve(frame);
        Ok(self.state_at_time(self.time_base().elapsed(frame)))
    }

    /// Returns the state of the mass `elapsed` simulated seconds after release.
    #[must_use]
    pub fn state_at_time(&self, elapsed: f64) -> SpringState {
        self.motion.state_at(elapsed)
    }

    /// Kinetic energy `½·m·v²` and spring potential energy `½·k·x²`.
    #[must_use]
    pub fn energy(&self, state: &SpringState) -> Energy {
        Energy::new(
            0.5 * self.config.mass() * state.velocity * state.velocity,
            0.5 * self.config.spring_constant() * state.displacement * state.displacement,
        )
    }

    fn history(&self, frame: FrameIndex) -> Vec<HistorySample> {
        let first = frame.get().saturating_sub(self.config.history_length());
        (first..=frame.get())
            .map(|index| HistorySample {
                frame: index,
                displacement: self
                    .state_at_time(self.time_base().elapsed(FrameIndex::new(index)))
                    .displacement,
            })
            .collect()
    }
}

impl Scene for DampedSpring {
    type Snapshot = SpringSnapshot;

    fn time_base(&self) -> &TimeBase {
        self.config.time_base()
    }

    fn playback(&self) -> Playback {
        self.config.playback()
    }

    fn snapshot_at(&self, frame: FrameIndex) -> Result<SpringSnapshot, Error> {
        let elapsed = self.time_base().elapsed(frame);
        trace!(%frame, elapsed, regime = ?self.regime(), "evaluating spring");

        let state = self.state_at_time(elapsed);
        Ok(SpringSnapshot {
            frame: frame.get(),
            elapsed,
            state,
            energy: self.energy(&state),
            regime: self.regime(),
            history: self.history(frame),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn spring(damping: f64) -> DampedSpring {
        let params = SpringParams {
            damping,
            ..SpringParams::default()
        };
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        DampedSpring::new(SpringConfig::new(params, time_base).unwrap())
    }

    #[test]
    fn frame_zero_is_the_release_point() {
        let snapshot = spring(0.1).snapshot(0).unwrap();

        assert_eq!(snapshot.state.displacement, 100.0);
        assert_relative_eq!(snapshot.state.velocity, 0.0, epsilon = 1e-12);
        assert_relative_eq!(snapshot.energy.potential, 0.5 * 10.0 * 100.0 * 100.0);
        assert_relative_eq!(snapshot.energy.kinetic, 0.0, epsilon = 1e-20);
        assert_eq!(snapshot.regime, Regime::Underdamped);
        assert_eq!(
            snapshot.history,
            vec![HistorySample {
                frame: 0,
                displacement: 100.0
            }]
        );
    }

    #[test]
    fn undamped_energy_is_conserved() {
        let spring = spring(0.0);
        let initial = spring.snapshot(0).unwrap().energy.total;

        for frame in [7, 45, 300, 1_234] {
            let total = spring.snapshot(frame).unwrap().energy.total;
            assert_relative_eq!(total, initial, max_relative = 1e-12);
        }
    }

    #[test]
    fn damping_drains_energy() {
        let spring = spring(0.5);

        let mut previous = f64::INFINITY;
        for frame in (0..600).step_by(30) {
            let total = spring.snapshot(frame).unwrap().energy.total;
            assert!(total < previous, "frame {frame}");
            previous = total;
        }
    }

    #[test]
    fn history_covers_the_window() {
        let spring = spring(0.1);

        let snapshot = spring.snapshot(200).unwrap();

        assert_eq!(snapshot.history.len(), 151);
        assert_eq!(snapshot.history[0].frame, 50);
        let last = snapshot.history.last().unwrap();
        assert_eq!(last.frame, 200);
        assert_eq!(last.displacement, snapshot.state.displacement);
        assert_eq!(
            snapshot.history[10].displacement,
            spring.state_at(60).unwrap().displacement
        );
    }

    #[test]
    fn frequencies() {
        let spring = spring(0.1);

        assert_relative_eq!(spring.natural_frequency(), 10.0_f64.sqrt());
        assert_relative_eq!(spring.damping_rate(), 0.05);
    }

    #[test]
    fn negative_frames_are_rejected() {
        assert!(matches!(
            spring(0.1).state_at(-2),
            Err(Error::InvalidFrame(FrameError::NegativeIndex(-2)))
        ));
    }
}
