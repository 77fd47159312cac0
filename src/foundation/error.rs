/// Result alias used by every fallible `fineblur` API.
pub type FineBlurResult<T> = Result<T, FineBlurError>;

/// Error type for the surfaces around the band generator.
///
/// Band generation itself never fails; these errors come from config loading,
/// image conversion and buffer checks in the preview renderer.
#[derive(thiserror::Error, Debug)]
pub enum FineBlurError {
    /// Configuration could not be read or is structurally unusable.
    #[error("config error: {0}")]
    Config(String),

    /// A render backend rejected its input.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FineBlurError {
    /// Build a [`FineBlurError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FineBlurError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FineBlurError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
