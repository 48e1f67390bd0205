//! Error type definitions for key material and wire operations

use std::string::String;

/// Primary error type for peerkey operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key bytes are malformed, fail validation, belong to an unsupported
    /// curve, or the key's view is out of bounds
    #[error("Incorrect key: {context}: {message}")]
    IncorrectKey {
        context: &'static str,
        message: String,
    },

    /// Signature has the wrong length or the provider refused it
    #[error("Incorrect signature: {context}: {message}")]
    IncorrectSignature {
        context: &'static str,
        message: String,
    },

    /// The entropy source could not seed the generator
    #[error("Random generation error: {context}: {message}")]
    RngFailure {
        context: &'static str,
        message: String,
    },

    /// Signing or hashing was attempted on a zero-length message
    #[error("{context}: message is empty")]
    EmptyMessage { context: &'static str },

    /// A read or peek asked for more bytes than remain after the cursor
    #[error("{context}: buffer underrun (needed {needed}, remaining {remaining})")]
    BufferUnderrun {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A varint is overlong or does not fit in 63 bits
    #[error("{context}: malformed varint")]
    InvalidVarint { context: &'static str },

    /// Two operands belong to different curves
    #[error("curve mismatch: expected {expected}, got {actual}")]
    CurveMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for peerkey operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::IncorrectKey`]
    pub fn key(context: &'static str, message: impl Into<String>) -> Self {
        Self::IncorrectKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::IncorrectSignature`]
    pub fn signature(context: &'static str, message: impl Into<String>) -> Self {
        Self::IncorrectSignature {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::RngFailure`]
    pub fn rng(context: &'static str, message: impl Into<String>) -> Self {
        Self::RngFailure {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::IncorrectKey { message, .. } => Self::IncorrectKey { context, message },
            Self::IncorrectSignature { message, .. } => {
                Self::IncorrectSignature { context, message }
            }
            Self::RngFailure { message, .. } => Self::RngFailure { context, message },
            Self::EmptyMessage { .. } => Self::EmptyMessage { context },
            Self::BufferUnderrun {
                needed, remaining, ..
            } => Self::BufferUnderrun {
                context,
                needed,
                remaining,
            },
            Self::InvalidVarint { .. } => Self::InvalidVarint { context },
            other @ Self::CurveMismatch { .. } => other,
        }
    }

    /// Context string the error was raised with, if it carries one
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::IncorrectKey { context, .. }
            | Self::IncorrectSignature { context, .. }
            | Self::RngFailure { context, .. }
            | Self::EmptyMessage { context }
            | Self::BufferUnderrun { context, .. }
            | Self::InvalidVarint { context } => Some(context),
            Self::CurveMismatch { .. } => None,
        }
    }

    /// True for errors describing rejected key material
    pub fn is_incorrect_key(&self) -> bool {
        matches!(self, Self::IncorrectKey { .. })
    }
}
