use std::num::NonZeroUsize;

use framesim_core::{
    Playback, TimeBase,
    constraint::{ConstraintError, Finite, StrictlyPositive},
};

use crate::{ConfigError, Vec2};

use super::{SourceLayout, WaveSource};

/// Frames per second assumed by [`WaveConfig::default`].
pub const DEFAULT_FPS: f64 = 30.0;

/// Simulated seconds per video second in [`WaveConfig::default`].
///
/// At 30 fps the phase advances by 0.1 rad per frame.
pub const DEFAULT_SPEED_SCALE: f64 = 3.0;

/// Parameters of a wave interference scene.
///
/// This is plain data; [`WaveConfig::new`] validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WaveParams {
    /// Field width in scene units; also the snapshot grid width.
    pub width: usize,

    /// Field height in scene units; also the snapshot grid height.
    pub height: usize,

    pub wavelength: f64,
    pub amplitude: f64,

    /// Temporal angular frequency in radians per simulated second.
    pub angular_frequency: f64,

    /// Distance at which a source's amplitude has halved.
    pub attenuation_scale: f64,

    /// Spacing of snapshot grid samples.
    pub grid_stride: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            wavelength: 40.0,
            amplitude: 30.0,
            angular_frequency: 1.0,
            attenuation_scale: 100.0,
            grid_stride: 10,
        }
    }
}

/// Validated, immutable configuration of a wave interference scene.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig {
    sources: Vec<WaveSource>,
    width: usize,
    height: usize,
    angular_frequency: f64,
    attenuation_scale: f64,
    grid_stride: NonZeroUsize,
    time_base: TimeBase,
    playback: Playback,
}

impl WaveConfig {
    /// Builds a scene whose sources share the wavelength and amplitude in
    /// `params`, placed by `layout` around the center of the field.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter or source position is invalid.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        params: WaveParams,
        layout: &SourceLayout,
        time_base: TimeBase,
    ) -> Result<Self, ConfigError> {
        let center = Vec2::new(params.width as f64 / 2.0, params.height as f64 / 2.0);
        let sources = layout
            .positions(center)
            .into_iter()
            .map(|position| WaveSource::new(position, params.wavelength, params.amplitude))
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_sources(params, sources, time_base)
    }

    /// Builds a scene from individually configured sources.
    ///
    /// The wavelength and amplitude in `params` are not used.
    ///
    /// # Errors
    ///
    /// Returns an error if the angular frequency is not finite, the
    /// attenuation scale is not strictly positive, or the grid stride is zero.
    pub fn with_sources(
        params: WaveParams,
        sources: Vec<WaveSource>,
        time_base: TimeBase,
    ) -> Result<Self, ConfigError> {
        let grid_stride = NonZeroUsize::new(params.grid_stride).ok_or(ConfigError::Invalid {
            field: "grid_stride",
            source: ConstraintError::Zero,
        })?;

        Ok(Self {
            sources,
            width: params.width,
            height: params.height,
            angular_frequency: ConfigError::check::<Finite>(
                "angular_frequency",
                params.angular_frequency,
            )?
            .get(),
            attenuation_scale: ConfigError::check::<StrictlyPositive>(
                "attenuation_scale",
                params.attenuation_scale,
            )?
            .get(),
            grid_stride,
            time_base,
            playback: Playback::Continuous,
        })
    }

    /// Returns the configuration with a different playback mode.
    #[must_use]
    pub fn with_playback(self, playback: Playback) -> Self {
        Self { playback, ..self }
    }

    #[must_use]
    pub fn sources(&self) -> &[WaveSource] {
        &self.sources
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    #[must_use]
    pub fn attenuation_scale(&self) -> f64 {
        self.attenuation_scale
    }

    #[must_use]
    pub fn grid_stride(&self) -> NonZeroUsize {
        self.grid_stride
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

impl Default for WaveConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let time_base = TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap();
        Self::new(WaveParams::default(), &SourceLayout::default(), time_base).unwrap()
    }
}
