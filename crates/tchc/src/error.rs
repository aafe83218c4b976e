//! Error types for the tchc crate.

use std::{fmt, path::PathBuf};

/// Result type for texture cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in texture cache operations.
#[derive(Debug)]
pub enum Error {
    /// The directory or a per-texture header is unusable.
    Container {
        /// Which part of the container was being read.
        context: &'static str,
        /// Description of what was wrong.
        detail: String,
    },
    /// No texture with this name is indexed.
    NotFound {
        /// The requested name.
        name: String,
    },
    /// A texture's mip chain or header contradicts itself.
    MalformedStream {
        /// The texture's base name.
        name: String,
        /// Description of the inconsistency.
        detail: String,
    },
    /// A texture's pixel payload failed to decode.
    Decode {
        /// The texture's base name.
        name: String,
        /// The underlying decode error.
        source: tchc_decode::DecodeError,
    },
    /// A filesystem operation failed.
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The error message.
        message: String,
    },
    /// Writing a decoded image failed.
    Image {
        /// The output path.
        path: PathBuf,
        /// The error message.
        message: String,
    },
}

impl Error {
    /// Whether this error concerns one texture's data rather than the container.
    ///
    /// Such errors leave every other texture in the cache decodable.
    #[must_use]
    pub fn is_malformed_stream(&self) -> bool {
        matches!(self, Error::MalformedStream { .. } | Error::Decode { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Container { context, detail } => {
                write!(f, "invalid texture cache {context}: {detail}")
            }
            Error::NotFound { name } => write!(f, "texture {name:?} not found"),
            Error::MalformedStream { name, detail } => {
                write!(f, "malformed texture {name:?}: {detail}")
            }
            Error::Decode { name, source } => {
                write!(f, "failed to decode texture {name:?}: {source}")
            }
            Error::Io { path, message } => {
                write!(f, "i/o error on {}: {message}", path.display())
            }
            Error::Image { path, message } => {
                write!(f, "failed to write image {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
