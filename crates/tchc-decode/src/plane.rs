//! Per-plane block decoding.
//!
//! Every plane block starts with a DC delta (an 8-bit prefix through
//! [`DC_JUMP_TABLE`] followed by its extra bits) that updates the plane's
//! running predictor. A 2-bit flag of `0b10` then marks a blanket fill;
//! anything else is the first AC code of a transformed block.

use std::io::{Read, Seek};

use crate::{
    bits::BitReader,
    entropy::{BLOCK_LEN, decode_coefficients},
    error::DecodeResult,
    tables::DC_JUMP_TABLE,
    transform::{SCRATCH_LEN, inverse_transform_block},
};

/// Fewest bits any plane block can occupy: the 2-bit zero DC code, after
/// which an all-zero window ends the block without consuming more.
pub const MIN_PLANE_BLOCK_BITS: u64 = 2;

const DC_PREFIX_BITS: u32 = 8;
const FILL_FLAG_BITS: u32 = 2;
const FILL_FLAG: u32 = 0b10;

/// How one plane of one block was reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneBlock {
    /// Every sample is the DC value.
    Fill,
    /// Coefficients were entropy decoded and inverse transformed.
    Transformed,
}

/// Scratch buffers shared by all planes of one image decode.
#[derive(Debug, Clone)]
pub struct Workspace {
    coefficients: [i32; BLOCK_LEN],
    scratch: [i32; SCRATCH_LEN],
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            coefficients: [0; BLOCK_LEN],
            scratch: [0; SCRATCH_LEN],
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign-extend a DC delta read as `bits` magnitude bits.
///
/// Values with the top bit clear are negative: `raw - (2^bits - 1)`.
fn extend_dc(raw: u32, bits: u32) -> i32 {
    if raw < 1 << (bits - 1) {
        raw as i32 - ((1 << bits) - 1)
    } else {
        raw as i32
    }
}

/// Decoder for one channel plane, carrying its running DC predictor.
///
/// The predictor runs across every block of an image in raster order; a
/// fresh decoder starts at zero.
#[derive(Debug, Clone, Default)]
pub struct PlaneDecoder {
    dc: i32,
}

impl PlaneDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the running DC predictor.
    #[must_use]
    pub fn dc(&self) -> i32 {
        self.dc
    }

    /// Decode this plane's next block into `samples` (16.16 fixed point).
    ///
    /// `position` is advanced past everything the block consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or the block's
    /// coefficients are malformed.
    pub fn decode_block<R: Read + Seek>(
        &mut self,
        reader: &mut BitReader<R>,
        position: &mut u64,
        workspace: &mut Workspace,
        samples: &mut [i32; BLOCK_LEN],
    ) -> DecodeResult<PlaneBlock> {
        let prefix = reader.read(*position, DC_PREFIX_BITS)?;
        let (code_len, extra) = DC_JUMP_TABLE[prefix as usize];
        *position += u64::from(code_len);

        if extra > 0 {
            let extra = u32::from(extra);
            let raw = reader.read(*position, extra)?;
            *position += u64::from(extra);
            self.dc = self.dc.wrapping_add(extend_dc(raw, extra));
        }

        if reader.read(*position, FILL_FLAG_BITS)? == FILL_FLAG {
            *position += u64::from(FILL_FLAG_BITS);
            samples.fill(self.dc << 16);
            return Ok(PlaneBlock::Fill);
        }

        *position = decode_coefficients(reader, *position, self.dc, &mut workspace.coefficients)?;
        inverse_transform_block(&workspace.coefficients, &mut workspace.scratch, samples);
        Ok(PlaneBlock::Transformed)
    }
}
