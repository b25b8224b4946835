/// Convenience result type used across pixel-reveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by the assembler APIs.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid configuration or build input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An asset was read but its content is unusable.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix a validation message with the config field it concerns.
    pub fn in_field(self, field: &str) -> Self {
        match self {
            Self::Validation(msg) => Self::Validation(format!("{field}: {msg}")),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
