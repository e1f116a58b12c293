use framesim_core::{FrameError, FrameIndex, Playback, TimeBase};
use rayon::prelude::*;

use crate::Error;

/// A simulation that can produce a snapshot for any frame.
///
/// Implementors provide [`Scene::snapshot_at`] for an already validated and
/// playback-resolved frame. Callers use [`Scene::snapshot`], which validates
/// raw frame input and applies the scene's [`Playback`] first.
///
/// Scenes hold only immutable configuration, so one scene value can serve
/// concurrent requests for different frames.
pub trait Scene: Sync {
    /// The render-ready state returned for a frame.
    type Snapshot: Send;

    /// The mapping from frames to simulated time.
    fn time_base(&self) -> &TimeBase;

    /// How requested frames map onto simulated frames.
    fn playback(&self) -> Playback {
        Playback::Continuous
    }

    /// Computes the snapshot for a resolved frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying solver fails.
    fn snapshot_at(&self, frame: FrameIndex) -> Result<Self::Snapshot, Error>;

    /// Validates `frame`, applies playback, and computes its snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] for negative, non-finite, or fractional
    /// frames, before any simulation work is done.
    fn snapshot<F>(&self, frame: F) -> Result<Self::Snapshot, Error>
    where
        F: TryInto<FrameIndex>,
        FrameError: From<F::Error>,
    {
        let frame = frame.try_into().map_err(FrameError::from)?;
        self.snapshot_at(self.playback().resolve(frame))
    }
}

/// Renders `frames` in parallel, returning results in request order.
///
/// Each frame is computed independently, so the results are identical to
/// calling [`Scene::snapshot`] for each frame in turn.
pub fn render_frames<S: Scene>(scene: &S, frames: &[i64]) -> Vec<Result<S::Snapshot, Error>> {
    frames.par_iter().map(|&frame| scene.snapshot(frame)).collect()
}
