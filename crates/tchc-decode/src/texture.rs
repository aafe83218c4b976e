//! Image headers and decoded RGBA8 buffers.

use crate::{
    error::{DecodeError, DecodeResult},
    plane::MIN_PLANE_BLOCK_BITS,
};

/// Dimensions and channel layout of one compressed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether each block carries a fourth (alpha) plane.
    pub has_alpha: bool,
}

impl ImageHeader {
    /// Size of the RGBA8 buffer for this image.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the buffer size
    /// overflows `usize`.
    pub fn rgba_len(&self) -> DecodeResult<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(DecodeError::InvalidFormat {
                context: "image header",
                detail: format!("empty image {}x{}", self.width, self.height),
            });
        }

        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| DecodeError::InvalidFormat {
                context: "image header",
                detail: format!("image {}x{} is too large", self.width, self.height),
            })
    }

    /// Number of 8x8 blocks across and down, rounding partial blocks up.
    #[must_use]
    pub fn blocks(&self) -> (u32, u32) {
        (self.width.div_ceil(8), self.height.div_ceil(8))
    }

    /// Number of planes coded per block.
    #[must_use]
    pub fn planes(&self) -> u64 {
        if self.has_alpha { 4 } else { 3 }
    }

    /// Lower bound on the payload size, in bits, of any stream encoding
    /// this image. Saturates instead of overflowing.
    #[must_use]
    pub fn min_payload_bits(&self) -> u64 {
        let (blocks_x, blocks_y) = self.blocks();
        u64::from(blocks_x)
            .saturating_mul(u64::from(blocks_y))
            .saturating_mul(self.planes())
            .saturating_mul(MIN_PLANE_BLOCK_BITS)
    }
}

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// RGBA pixel data (4 bytes per pixel).
    pub data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl DecodedImage {
    /// Create a new decoded image.
    #[must_use]
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Check if the pixel data size matches the dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.len() == (self.width as usize) * (self.height as usize) * 4
    }

    /// RGBA value of the pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Copy the pixels into an [`image::RgbaImage`].
    ///
    /// Returns `None` if the buffer does not match the dimensions.
    #[must_use]
    pub fn to_rgba_image(&self) -> Option<::image::RgbaImage> {
        ::image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }
}
