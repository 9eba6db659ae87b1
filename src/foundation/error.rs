/// Convenience result type used across the crate.
pub type TurntableResult<T> = Result<T, TurntableError>;

/// Error taxonomy for turntable interpolation and frame export.
#[derive(thiserror::Error, Debug)]
pub enum TurntableError {
    /// The rotation axis has zero, near-zero or non-finite magnitude.
    #[error("degenerate axis error: {0}")]
    DegenerateAxis(String),

    /// The frame source yielded no images, so no encoder was launched.
    #[error("empty sequence error: frame source yielded no images")]
    EmptySequence,

    /// The encoder process could not be launched or exited unsuccessfully.
    #[error("encoder process error: {0}")]
    EncoderProcess(String),

    /// Writing a frame failed because the encoder already went away.
    #[error("broken pipe error: {0}")]
    BrokenPipe(#[source] std::io::Error),

    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TurntableError {
    /// Build a [`TurntableError::DegenerateAxis`] value.
    pub fn degenerate_axis(msg: impl Into<String>) -> Self {
        Self::DegenerateAxis(msg.into())
    }

    /// Build a [`TurntableError::EncoderProcess`] value.
    pub fn encoder_process(msg: impl Into<String>) -> Self {
        Self::EncoderProcess(msg.into())
    }

    /// Build a [`TurntableError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TurntableError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<std::io::Error> for TurntableError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::BrokenPipe(err)
        } else {
            Self::Other(anyhow::Error::new(err))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
