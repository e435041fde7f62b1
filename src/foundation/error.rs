/// Convenience result type used across snapreel.
pub type SnapreelResult<T> = Result<T, SnapreelError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Data-quality gaps (unmatched rows, a missing ball, duplicate samples) are not errors; they
/// are logged and absorbed by the stage that sees them.
#[derive(thiserror::Error, Debug)]
pub enum SnapreelError {
    /// A required selection argument was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A selection argument was supplied but is not a positive integer.
    #[error("invalid {name} format: {value:?}")]
    InvalidFormat {
        /// Argument name as shown to the user.
        name: String,
        /// Raw value that failed to parse.
        value: String,
    },

    /// A well-formed identifier matched nothing in the loaded data.
    #[error("not found: {0}")]
    NotFound(String),

    /// Inconsistent event data or invalid configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while reading or decoding a source table.
    #[error("source error: {0}")]
    Source(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnapreelError {
    /// Build a [`SnapreelError::MissingArgument`] value.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Build a [`SnapreelError::InvalidFormat`] value.
    pub fn invalid_format(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a [`SnapreelError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`SnapreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnapreelError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`SnapreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors raised while validating user-supplied selection arguments.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingArgument(_) | Self::InvalidFormat { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
