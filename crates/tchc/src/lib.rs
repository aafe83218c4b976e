//! Open TCHC texture caches and decode their textures to RGBA8.
//!
//! A cache is a pair of files: a directory naming every texture mip level
//! and the data offset of its header, and a data file holding those headers
//! followed by block-compressed payloads. This crate indexes the directory,
//! decodes mip chains through [`tchc_decode`], and can export level 0 of
//! every texture as PNG.
//!
//! # Design principles
//!
//! - **Fail loudly on open**: A bad directory or header rejects the whole
//!   cache; no partial index is kept
//! - **Per-texture errors**: A malformed texture fails only its own decode
//! - **Fresh state per decode**: Each call builds its own decoding session
//!
//! # Example
//!
//! ```ignore
//! use tchc::TextureCache;
//!
//! let mut cache = TextureCache::open_files("textures.dir", "textures.dat")?;
//! if cache.contains("stonewall") {
//!     for mip in cache.decode("stonewall")? {
//!         upload(mip.level, &mip.image.data);
//!     }
//! }
//! cache.dump_all("out")?;
//! ```

mod codec;
mod dump;
mod error;
pub mod index;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use codec::TextureCache;
pub use dump::{DumpFailure, DumpReport, sanitize_file_name};
pub use error::{Error, Result};
pub use index::TextureIndex;
pub use types::{MIP_LEVELS, MipLevel, TextureEntry, TextureRecord};

// Re-export decode types for convenience.
pub use tchc_decode::{DecodeError, DecodedImage};
