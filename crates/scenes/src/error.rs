use framesim_core::{
    FrameError, TimeBaseError,
    constraint::{Constrained, Constraint, ConstraintError},
};
use framesim_solvers::transient;
use thiserror::Error;

/// Errors raised while building a scene configuration.
///
/// A configuration that builds successfully can always be simulated, so these
/// errors never occur while rendering frames.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field}: {source}")]
    Invalid {
        field: &'static str,
        source: ConstraintError,
    },

    #[error(transparent)]
    TimeBase(#[from] TimeBaseError),

    #[error("a {width}x{height} container cannot hold a particle of radius {radius}")]
    ContainerTooSmall { width: f64, height: f64, radius: f64 },

    #[error("particle {id} does not fit inside the container")]
    ParticleOutsideContainer { id: usize },

    #[error("orbit of {body:?} is not closed: eccentricity {eccentricity} is not in [0, 1)")]
    OpenOrbit { body: String, eccentricity: f64 },
}

impl ConfigError {
    /// Checks a named value against a constraint.
    pub(crate) fn check<C: Constraint<f64>>(
        field: &'static str,
        value: f64,
    ) -> Result<Constrained<f64, C>, Self> {
        Constrained::new(value).map_err(|source| Self::Invalid { field, source })
    }
}

/// Errors returned when rendering a frame.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid frame: {0}")]
    InvalidFrame(#[from] FrameError),

    #[error("integration failed: {0}")]
    Solver(#[from] transient::Error),
}
