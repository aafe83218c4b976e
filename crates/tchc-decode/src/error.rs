//! Error types for decoding operations.

use std::{fmt, io};

/// Errors that can occur while decoding a compressed texture payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The backing stream ended before the declared payload window.
    UnexpectedEof { context: &'static str },
    /// The bit stream or image header describes something impossible.
    InvalidFormat {
        context: &'static str,
        detail: String,
    },
    /// The backing stream failed for a reason other than running short.
    Io {
        context: &'static str,
        message: String,
    },
}

impl DecodeError {
    /// Wrap an I/O error raised while reading `context`.
    pub(crate) fn from_io(context: &'static str, error: &io::Error) -> Self {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof { context }
        } else {
            Self::Io {
                context,
                message: error.to_string(),
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { context } => {
                write!(f, "unexpected end of stream in {context}")
            }
            Self::InvalidFormat { context, detail } => {
                write!(f, "invalid format in {context}: {detail}")
            }
            Self::Io { context, message } => {
                write!(f, "i/o error in {context}: {message}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
