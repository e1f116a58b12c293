use std::error::Error as StdError;

/// Errors that can occur during transient integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
