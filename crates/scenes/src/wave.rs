//! Interference of circular waves from fixed point sources.
//!
//! The field is evaluated in closed form, so a sample depends only on the
//! point and the simulated time of its frame. Each source contributes
//!
//! ```text
//! A · sin(k·d − ω·t) / (1 + d / scale)
//! ```
//!
//! where `d` is the distance to the source and `k = 2π/λ`. Contributions are
//! summed without normalization; with no sources the field is zero.

mod config;
mod grid;
mod source;

use std::num::NonZeroUsize;

use framesim_core::{FrameError, FrameIndex, Playback, TimeBase};
use tracing::trace;

use crate::{Error, Scene, Vec2};

pub use config::{DEFAULT_FPS, DEFAULT_SPEED_SCALE, WaveConfig, WaveParams};
pub use grid::FieldGrid;
pub use source::{PAIR_OFFSET, RING_RADIUS, SourceLayout, WaveSource};

/// Render-ready state of a wave field at one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaveSnapshot {
    /// The simulated frame, after playback was applied.
    pub frame: u64,

    /// Simulated seconds since frame zero.
    pub elapsed: f64,

    /// Temporal phase `ω·t` shared by all sources.
    pub phase: f64,

    pub sources: Vec<WaveSource>,

    /// The field over the configured area at the configured grid stride.
    pub grid: FieldGrid,
}

/// A wave interference scene.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    config: WaveConfig,
}

impl WaveField {
    #[must_use]
    pub fn new(config: WaveConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Returns the field value at `(x, y)` for a frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `frame` is not a valid frame index.
    pub fn amplitude_at<F>(&self, frame: F, x: f64, y: f64) -> Result<f64, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let elapsed = self.elapsed(frame)?;
        Ok(self.amplitude_at_time(elapsed, Vec2::new(x, y)))
    }

    /// Returns the field value at `point` after `elapsed` simulated seconds.
    #[must_use]
    pub fn amplitude_at_time(&self, elapsed: f64, point: Vec2) -> f64 {
        let phase = self.config.angular_frequency() * elapsed;
        self.amplitude_at_phase(phase, point)
    }

    /// Samples the field over `width` by `height` for a frame.
    ///
    /// Rows are evaluated in parallel; every sample equals the corresponding
    /// [`WaveField::amplitude_at`] value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `frame` is not a valid frame index.
    pub fn sample_grid<F>(
        &self,
        frame: F,
        width: usize,
        height: usize,
        stride: NonZeroUsize,
    ) -> Result<FieldGrid, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let elapsed = self.elapsed(frame)?;
        Ok(self.grid_at_time(elapsed, width, height, stride))
    }

    fn elapsed<F>(&self, frame: F) -> Result<f64, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let frame = frame.try_into().map_err(FrameError::from)?;
        let frame = self.config.playback().resolve(frame);
        Ok(self.config.time_base().elapsed(frame))
    }

    fn grid_at_time(
        &self,
        elapsed: f64,
        width: usize,
        height: usize,
        stride: NonZeroUsize,
    ) -> FieldGrid {
        let phase = self.config.angular_frequency() * elapsed;
        FieldGrid::sample(width, height, stride, |point| {
            self.amplitude_at_phase(phase, point)
        })
    }

    fn amplitude_at_phase(&self, phase: f64, point: Vec2) -> f64 {
        let scale = self.config.attenuation_scale();
        self.config
            .sources()
            .iter()
            .map(|source| source.contribution(point, phase, scale))
            .sum()
    }
}

impl Scene for WaveField {
    type Snapshot = WaveSnapshot;

    fn time_base(&self) -> &TimeBase {
        self.config.time_base()
    }

    fn playback(&self) -> Playback {
        self.config.playback()
    }

    fn snapshot_at(&self, frame: FrameIndex) -> Result<WaveSnapshot, Error> {
        let elapsed = self.time_base().elapsed(frame);
        trace!(%frame, elapsed, sources = self.config.sources().len(), "sampling wave field");

        Ok(WaveSnapshot {
            frame: frame.get(),
            elapsed,
            phase: self.config.angular_frequency() * elapsed,
            sources: self.config.sources().to_vec(),
            grid: self.grid_at_time(
                elapsed,
                self.config.width(),
                self.config.height(),
                self.config.grid_stride(),
            ),
        })
    }
}
