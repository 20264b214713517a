/// Crate-wide result alias.
pub type JourneyResult<T> = Result<T, JourneyError>;

/// Errors surfaced by the journey engine.
///
/// Only configuration and explicit store access can fail. Frame evaluation and phase
/// transitions are infallible once a session exists.
#[derive(thiserror::Error, Debug)]
pub enum JourneyError {
    /// Timeline or session configuration is malformed.
    #[error("config error: {0}")]
    Config(String),

    /// A runtime value was rejected (viewport size, scroll offset, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// The durable flag store could not be read or written.
    #[error("store error: {0}")]
    Store(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JourneyError {
    /// Build a [`JourneyError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`JourneyError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`JourneyError::Store`].
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`JourneyError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for JourneyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
