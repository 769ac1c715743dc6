use thiserror::Error;

/// Which side of the transform a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
}

/// Errors returned by [`transform`](crate::transform::transform).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Required configuration is missing or invalid. Fix the config; retrying won't help.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The source payload is malformed or has no message text.
    /// The same payload will fail identically, so callers should drop it.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Configuration(_) => ErrorKind::Configuration,
            TransformError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// The bare message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            TransformError::Configuration(msg) | TransformError::Validation(msg) => msg,
        }
    }
}
