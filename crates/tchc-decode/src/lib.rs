//! Decode block-compressed textures from TCHC texture caches.
//!
//! The codec is a reduced JPEG relative: every 8x8 block stores a DC delta
//! against a running per-plane predictor, then either a blanket-fill flag or
//! a run of entropy-coded AC coefficients that go through a separable 8-point
//! inverse transform. Three planes (luma and two chroma) plus an optional
//! alpha plane are converted to RGBA8.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Session-scoped state**: DC predictors and scratch buffers live in a
//!   [`BlockAssembler`] built per image, so concurrent decodes never share
//!   state
//! - **Stream-agnostic**: Payloads are read through any `Read + Seek`
//!
//! # Example
//!
//! ```ignore
//! use tchc_decode::{BitReader, ImageHeader, decode_image};
//!
//! let reader = BitReader::new(file, payload_offset, payload_len);
//! let header = ImageHeader { width: 128, height: 128, has_alpha: false };
//! let image = decode_image(reader, header)?;
//! ```

mod bits;
mod block;
mod entropy;
mod error;
mod plane;
mod tables;
mod texture;
mod transform;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bits::{BitReader, MAX_READ_BITS, PAGE_WORDS};
pub use block::{
    BlockAssembler, BlockStats, decode_image, decode_image_with_stats, ycbcr_to_rgb,
};
pub use entropy::{BLOCK_LEN, decode_coefficients};
pub use error::{DecodeError, DecodeResult};
pub use plane::{PlaneBlock, PlaneDecoder, Workspace};
pub use texture::{DecodedImage, ImageHeader};
pub use transform::{SCRATCH_LEN, SCRATCH_STRIDE, inverse_transform_8, inverse_transform_block};
