/// Convenience result type used throughout scrollweave.
pub type ScrollweaveResult<T> = Result<T, ScrollweaveError>;

/// Top-level error type used by scrollweave APIs.
///
/// Only construction-time work fails: building phase maps, compiling timelines, parsing anchors
/// and loading configuration. Per-frame operations never return errors.
#[derive(thiserror::Error, Debug)]
pub enum ScrollweaveError {
    /// Input model/config is invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// Timeline or easing definition could not be compiled.
    #[error("animation error: {0}")]
    Animation(String),

    /// Navigation target is unknown or malformed.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error propagated from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollweaveError {
    /// Build a [`ScrollweaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollweaveError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollweaveError::Navigation`] value.
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Build a [`ScrollweaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
