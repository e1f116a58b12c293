//! Mapping from rendered frames to simulated time.
//!
//! A video renderer asks for frames in any order, so simulated time must be a
//! function of the frame index alone. [`TimeBase`] turns a [`FrameIndex`] into
//! a fixed step size and the number of steps that separate frame zero from the
//! requested frame. The step size depends only on the configuration, never on
//! wall-clock time or on which frames were requested before.

use std::{convert::Infallible, fmt, num::NonZeroU32, num::NonZeroU64};

use thiserror::Error;

use crate::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// A validated, non-negative frame index.
///
/// Construct one with [`FrameIndex::new`] from an unsigned value, or with
/// `TryFrom` from signed or floating-point input arriving from an adapter.
/// APIs that accept raw frames bound on `TryInto<FrameIndex>` with
/// `FrameError: From<_>`, which every conversion here satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(u64);

/// Error returned when a requested frame is not a valid frame index.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    #[error("frame index must not be negative, got {0}")]
    Negative(f64),

    #[error("frame index must not be negative, got {0}")]
    NegativeIndex(i64),

    #[error("frame index must be finite, got {0}")]
    NotFinite(f64),

    #[error("frame index must be a whole number, got {0}")]
    Fractional(f64),

    #[error("frame index {0} is out of range")]
    TooLarge(f64),
}

impl FrameIndex {
    /// The first frame of a scene.
    pub const ZERO: Self = Self(0);

    /// Creates a frame index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the frame index as an integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u32> for FrameIndex {
    fn from(index: u32) -> Self {
        Self(u64::from(index))
    }
}

impl From<u64> for FrameIndex {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl From<Infallible> for FrameError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl TryFrom<i32> for FrameIndex {
    type Error = FrameError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(index))
    }
}

impl TryFrom<i64> for FrameIndex {
    type Error = FrameError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u64::try_from(index)
            .map(Self)
            .map_err(|_| FrameError::NegativeIndex(index))
    }
}

impl TryFrom<f64> for FrameIndex {
    type Error = FrameError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(index: f64) -> Result<Self, Self::Error> {
        if !index.is_finite() {
            return Err(FrameError::NotFinite(index));
        }
        if index < 0.0 {
            return Err(FrameError::Negative(index));
        }
        if index.fract() != 0.0 {
            return Err(FrameError::Fractional(index));
        }
        if index >= u64::MAX as f64 {
            return Err(FrameError::TooLarge(index));
        }
        Ok(Self(index as u64))
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {}", self.0)
    }
}

/// How a requested frame maps onto the simulated frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Playback {
    /// Every frame is simulated as requested.
    #[default]
    Continuous,

    /// The simulation restarts every `period` frames.
    Loop { period: NonZeroU64 },

    /// Frames after `last` show the state at `last`.
    Hold { last: FrameIndex },
}

impl Playback {
    /// Returns the frame whose state should be shown for `frame`.
    #[must_use]
    pub fn resolve(&self, frame: FrameIndex) -> FrameIndex {
        match *self {
            Self::Continuous => frame,
            Self::Loop { period } => FrameIndex(frame.0 % period.get()),
            Self::Hold { last } => frame.min(last),
        }
    }
}

/// The number of fixed-size steps between frame zero and a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    /// Number of integration steps.
    pub count: u64,

    /// Size of each step in simulated seconds.
    pub dt: f64,
}

impl Steps {
    /// Returns the simulated time covered by these steps.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.count as f64 * self.dt
    }
}

/// Errors that can occur when constructing a [`TimeBase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeBaseError {
    #[error("frames per second: {0}")]
    Fps(#[source] ConstraintError),

    #[error("speed scale: {0}")]
    SpeedScale(#[source] ConstraintError),
}

/// Fixed mapping from frames to integration steps.
///
/// One second of video covers `speed_scale` simulated seconds, split into
/// `fps * substeps` equal steps.
///
/// ```
/// use framesim_core::{FrameIndex, TimeBase};
///
/// let time_base = TimeBase::new(30.0, 1.5).unwrap();
/// let steps = time_base.steps_for(FrameIndex::new(60));
///
/// assert_eq!(steps.count, 60);
/// assert!((steps.dt - 0.05).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBase {
    fps: Constrained<f64, StrictlyPositive>,
    speed_scale: Constrained<f64, StrictlyPositive>,
    substeps: NonZeroU32,
}

impl TimeBase {
    /// Creates a time base with one integration step per frame.
    ///
    /// # Errors
    ///
    /// Returns an error if `fps` or `speed_scale` is not finite and strictly
    /// positive.
    pub fn new(fps: f64, speed_scale: f64) -> Result<Self, TimeBaseError> {
        Ok(Self {
            fps: StrictlyPositive::new(fps).map_err(TimeBaseError::Fps)?,
            speed_scale: StrictlyPositive::new(speed_scale).map_err(TimeBaseError::SpeedScale)?,
            substeps: NonZeroU32::MIN,
        })
    }

    /// Returns a time base that takes `substeps` integration steps per frame.
    #[must_use]
    pub fn with_substeps(self, substeps: NonZeroU32) -> Self {
        Self { substeps, ..self }
    }

    /// Frames per second of the rendered video.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps.get()
    }

    /// Simulated seconds per second of video.
    #[must_use]
    pub fn speed_scale(&self) -> f64 {
        self.speed_scale.get()
    }

    /// Integration steps per frame.
    #[must_use]
    pub fn substeps(&self) -> NonZeroU32 {
        self.substeps
    }

    /// The fixed step size in simulated seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.speed_scale.get() / (self.fps.get() * f64::from(self.substeps.get()))
    }

    /// Returns the steps separating frame zero from `frame`.
    #[must_use]
    pub fn steps_for(&self, frame: FrameIndex) -> Steps {
        Steps {
            count: frame.0.saturating_mul(u64::from(self.substeps.get())),
            dt: self.dt(),
        }
    }

    /// Returns the simulated time at `frame`.
    #[must_use]
    pub fn elapsed(&self, frame: FrameIndex) -> f64 {
        self.steps_for(frame).elapsed()
    }
}

/// Errors returned by [`steps_for`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepsError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    TimeBase(#[from] TimeBaseError),
}

/// Computes the steps for a raw frame index, frame rate, and speed scale.
///
/// This validates everything in one call; scenes hold a [`TimeBase`] and
/// only validate the frame.
///
/// # Errors
///
/// Returns an error if the frame is negative or the rates are not strictly
/// positive.
pub fn steps_for(frame: i64, fps: f64, speed_scale: f64) -> Result<Steps, StepsError> {
    let frame = FrameIndex::try_from(frame)?;
    Ok(TimeBase::new(fps, speed_scale)?.steps_for(frame))
}
