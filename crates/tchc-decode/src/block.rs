//! Block assembly and color conversion.
//!
//! Blocks tile the image in raster order. For each block the luma, blue
//! chroma, red chroma and (optionally) alpha planes are decoded in turn,
//! then every pixel is converted from YCbCr to RGBA8 and written to its
//! place in the output buffer. Pixels of trailing partial blocks that fall
//! outside the image are decoded but not written.

use std::io::{Read, Seek};

use crate::{
    bits::BitReader,
    entropy::BLOCK_LEN,
    error::{DecodeError, DecodeResult},
    plane::{PlaneBlock, PlaneDecoder, Workspace},
    texture::{DecodedImage, ImageHeader},
};

// YCbCr to RGB matrix, 16.16 fixed point. Luma is stored as `Y - 16` and
// chroma as `C - 128`.
const LUMA_GAIN: i64 = 76_611;
const CR_TO_R: i64 = 104_989;
const CR_TO_G: i64 = -53_281;
const CB_TO_G: i64 = -25_625;
const CB_TO_B: i64 = 132_710;

const ROUNDING_BIAS: i64 = 0x8000;

/// Plane slots within a block, in stream order.
const LUMA: usize = 0;
const CHROMA_BLUE: usize = 1;
const CHROMA_RED: usize = 2;
const ALPHA: usize = 3;

/// Round a 16.16 sample to a clamped 8-bit channel.
fn to_channel(fixed: i64) -> u8 {
    ((fixed + ROUNDING_BIAS) >> 16).clamp(0, 255) as u8
}

/// Convert one pixel's 16.16 plane samples to RGB.
#[must_use]
pub fn ycbcr_to_rgb(y: i32, cb: i32, cr: i32) -> [u8; 3] {
    let y = i64::from(y) * LUMA_GAIN;
    let cb = i64::from(cb);
    let cr = i64::from(cr);

    [
        to_channel((y + cr * CR_TO_R) >> 16),
        to_channel((y + cr * CR_TO_G + cb * CB_TO_G) >> 16),
        to_channel((y + cb * CB_TO_B) >> 16),
    ]
}

/// Counts of how plane blocks were reconstructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    pub fill: usize,
    pub transformed: usize,
}

/// Decoding session for one image.
///
/// Owns the running DC predictors and scratch buffers, so independent
/// images never share state.
#[derive(Debug)]
pub struct BlockAssembler<R> {
    reader: BitReader<R>,
    header: ImageHeader,
    position: u64,
    planes: [PlaneDecoder; 4],
    workspace: Workspace,
    samples: [[i32; BLOCK_LEN]; 4],
    stats: BlockStats,
}

impl<R: Read + Seek> BlockAssembler<R> {
    /// Start decoding `header`'s image from bit 0 of `reader`.
    pub fn new(reader: BitReader<R>, header: ImageHeader) -> Self {
        Self {
            reader,
            header,
            position: 0,
            planes: Default::default(),
            workspace: Workspace::new(),
            samples: [[0; BLOCK_LEN]; 4],
            stats: BlockStats::default(),
        }
    }

    /// Bit position of the next block.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Plane blocks decoded so far, by kind.
    #[must_use]
    pub fn stats(&self) -> BlockStats {
        self.stats
    }

    fn plane_count(&self) -> usize {
        if self.header.has_alpha { 4 } else { 3 }
    }

    /// Decode the next block and write it at tile `(block_x, block_y)`.
    ///
    /// `output` must hold the full `width * height * 4` RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if any plane of the block fails to decode.
    pub fn decode_block(
        &mut self,
        block_x: u32,
        block_y: u32,
        output: &mut [u8],
    ) -> DecodeResult<()> {
        for slot in 0..self.plane_count() {
            let kind = self.planes[slot].decode_block(
                &mut self.reader,
                &mut self.position,
                &mut self.workspace,
                &mut self.samples[slot],
            )?;
            match kind {
                PlaneBlock::Fill => self.stats.fill += 1,
                PlaneBlock::Transformed => self.stats.transformed += 1,
            }
        }

        self.write_block(block_x, block_y, output);
        Ok(())
    }

    fn write_block(&self, block_x: u32, block_y: u32, output: &mut [u8]) {
        let width = self.header.width as usize;
        let height = self.header.height as usize;
        let left = block_x as usize * 8;
        let top = block_y as usize * 8;

        for y in 0..8.min(height.saturating_sub(top)) {
            for x in 0..8.min(width.saturating_sub(left)) {
                let sample = y * 8 + x;
                let [r, g, b] = ycbcr_to_rgb(
                    self.samples[LUMA][sample],
                    self.samples[CHROMA_BLUE][sample],
                    self.samples[CHROMA_RED][sample],
                );
                let a = if self.header.has_alpha {
                    to_channel(i64::from(self.samples[ALPHA][sample]))
                } else {
                    255
                };

                let offset = ((top + y) * width + left + x) * 4;
                output[offset..offset + 4].copy_from_slice(&[r, g, b, a]);
            }
        }
    }
}

/// Decode a whole image from `reader`.
///
/// # Errors
///
/// Returns an error if the header describes an impossible image or the
/// payload is malformed.
pub fn decode_image<R: Read + Seek>(
    reader: BitReader<R>,
    header: ImageHeader,
) -> DecodeResult<DecodedImage> {
    let (image, _) = decode_image_with_stats(reader, header)?;
    Ok(image)
}

/// Decode a whole image and report how its plane blocks were coded.
///
/// The payload must hold every block: a stream whose blocks run past the
/// end of the reader's window is rejected even though the bits beyond it
/// read as zeros.
///
/// # Errors
///
/// Returns an error if the header describes an impossible image, the
/// payload is too short for it, or the payload is malformed.
pub fn decode_image_with_stats<R: Read + Seek>(
    reader: BitReader<R>,
    header: ImageHeader,
) -> DecodeResult<(DecodedImage, BlockStats)> {
    let len = header.rgba_len()?;
    let bit_len = reader.bit_len();
    let min_bits = header.min_payload_bits();
    if min_bits > bit_len {
        return Err(DecodeError::UnexpectedEof { context: "payload" });
    }

    let mut output = Vec::new();
    output
        .try_reserve_exact(len)
        .map_err(|e| DecodeError::InvalidFormat {
            context: "image buffer",
            detail: format!("cannot allocate {len} bytes: {e}"),
        })?;
    output.resize(len, 0);

    let (blocks_x, blocks_y) = header.blocks();
    let mut assembler = BlockAssembler::new(reader, header);
    for block_y in 0..blocks_y {
        for block_x in 0..blocks_x {
            assembler.decode_block(block_x, block_y, &mut output)?;
        }
    }

    if assembler.position() > bit_len {
        return Err(DecodeError::UnexpectedEof { context: "payload" });
    }

    let stats = assembler.stats();
    Ok((
        DecodedImage::new(output, header.width, header.height),
        stats,
    ))
}
