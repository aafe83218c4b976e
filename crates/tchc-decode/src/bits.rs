//! Paged random-access bit reader.
//!
//! Payloads are consumed by absolute bit offset rather than through a
//! cursor: the decoder tracks its own position and asks for up to 24 bits
//! at a time. The reader keeps one page of big-endian 32-bit words cached
//! and refills it whenever a request straddles the end of the page.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{DecodeError, DecodeResult};

/// Number of 32-bit words held in one cached page.
pub const PAGE_WORDS: usize = 256;

const PAGE_BYTES: usize = PAGE_WORDS * 4;

/// Largest run of bits a single [`BitReader::read`] may return.
pub const MAX_READ_BITS: u32 = 24;

/// Reads arbitrary bit runs from a `(origin, length)` window of a stream.
#[derive(Debug)]
pub struct BitReader<R> {
    source: R,
    origin: u64,
    len: u64,
    page: Box<[u32; PAGE_WORDS]>,
    /// Word index (relative to `origin`) of `page[0]`, if a page is loaded.
    page_base: Option<u64>,
}

impl<R: Read + Seek> BitReader<R> {
    /// Create a reader over `len` bytes of `source` starting at `origin`.
    ///
    /// Nothing is read until the first call to [`BitReader::read`].
    pub fn new(source: R, origin: u64, len: u64) -> Self {
        Self {
            source,
            origin,
            len,
            page: Box::new([0; PAGE_WORDS]),
            page_base: None,
        }
    }

    /// Length of the window in bits.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        self.len * 8
    }

    /// Return the `num_bits` bits starting `bit_offset` bits into the window.
    ///
    /// The first bit of the run lands in the most significant position of
    /// the result. Bits beyond the window read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing stream cannot supply bytes that the
    /// window claims to contain.
    pub fn read(&mut self, bit_offset: u64, num_bits: u32) -> DecodeResult<u32> {
        debug_assert!(
            (1..=MAX_READ_BITS).contains(&num_bits),
            "bit run of {num_bits} is out of range"
        );

        let word = bit_offset >> 5;
        let slot = self.page_slot(word)?;

        let high = u64::from(self.page[slot]);
        let low = u64::from(self.page[slot + 1]);
        let joined = (high << 32) | low;
        let shift = (bit_offset & 31) as u32;

        Ok(((joined << shift) >> (64 - num_bits)) as u32)
    }

    /// Consume the reader and hand back the underlying stream.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Index into the page of `word`, refilling so that `word + 1` is cached too.
    fn page_slot(&mut self, word: u64) -> DecodeResult<usize> {
        if let Some(base) = self.page_base {
            if word >= base && word + 1 < base + PAGE_WORDS as u64 {
                return Ok((word - base) as usize);
            }
        }

        self.fill_page(word)?;
        Ok(0)
    }

    fn fill_page(&mut self, word: u64) -> DecodeResult<()> {
        let mut bytes = [0u8; PAGE_BYTES];

        let byte_start = word * 4;
        let available = self.len.saturating_sub(byte_start).min(PAGE_BYTES as u64) as usize;

        if available > 0 {
            self.source
                .seek(SeekFrom::Start(self.origin + byte_start))
                .map_err(|e| DecodeError::from_io("bit stream page", &e))?;
            self.source
                .read_exact(&mut bytes[..available])
                .map_err(|e| DecodeError::from_io("bit stream page", &e))?;
        }

        for (dst, chunk) in self.page.iter_mut().zip(bytes.chunks_exact(4)) {
            *dst = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        self.page_base = Some(word);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    /// Extract bits one at a time, treating everything past `data` as zero.
    fn naive_read(data: &[u8], bit_offset: u64, num_bits: u32) -> u32 {
        let mut value = 0u32;
        for i in 0..u64::from(num_bits) {
            let bit = bit_offset + i;
            let byte = data.get((bit / 8) as usize).copied().unwrap_or(0);
            value = (value << 1) | u32::from((byte >> (7 - bit % 8)) & 1);
        }
        value
    }

    fn reader(data: &[u8]) -> BitReader<Cursor<Vec<u8>>> {
        BitReader::new(Cursor::new(data.to_vec()), 0, data.len() as u64)
    }

    #[test]
    fn test_read_whole_bytes() {
        let mut bits = reader(&[0xAB, 0xCD, 0xEF]);
        assert_eq!(bits.read(0, 8).unwrap(), 0xAB);
        assert_eq!(bits.read(8, 16).unwrap(), 0xCDEF);
        assert_eq!(bits.read(4, 8).unwrap(), 0xBC);
    }

    #[test]
    fn test_read_across_word_boundary() {
        // Bits 28..40 span the first and second big-endian words.
        let data = [0x00, 0x00, 0x00, 0x0F, 0xF0, 0x00, 0x00, 0x00];
        let mut bits = reader(&data);
        assert_eq!(bits.read(28, 8).unwrap(), 0xFF);
        assert_eq!(bits.read(26, 12).unwrap(), 0x3FC);
    }

    #[test]
    fn test_read_past_window_is_zero() {
        let mut bits = reader(&[0xFF, 0xFF]);
        assert_eq!(bits.read(8, 16).unwrap(), 0xFF00);
        assert_eq!(bits.read(64, 24).unwrap(), 0);
        assert_eq!(bits.read(1 << 20, 17).unwrap(), 0);
    }

    #[test]
    fn test_window_ignores_bytes_beyond_length() {
        // The backing stream has more data, but the window stops after one byte.
        let mut bits = BitReader::new(Cursor::new(vec![0xFF, 0xFF, 0xFF]), 0, 1);
        assert_eq!(bits.read(0, 16).unwrap(), 0xFF00);
    }

    #[test]
    fn test_origin_offsets_window() {
        let data = vec![0x11, 0x22, 0x33, 0x44, 0x55];
        let mut bits = BitReader::new(Cursor::new(data), 2, 3);
        assert_eq!(bits.read(0, 24).unwrap(), 0x33_4455);
    }

    #[test]
    fn test_read_across_page_boundary() {
        let data: Vec<u8> = (0..3000u32).map(|i| (i * 7 + 3) as u8).collect();
        let mut bits = reader(&data);

        let edge = (PAGE_BYTES as u64) * 8 - 4;
        assert_eq!(bits.read(edge, 20).unwrap(), naive_read(&data, edge, 20));
        // Going backwards forces another refill.
        assert_eq!(bits.read(3, 9).unwrap(), naive_read(&data, 3, 9));
        assert_eq!(bits.read(20_000, 24).unwrap(), naive_read(&data, 20_000, 24));
    }

    #[test]
    fn test_truncated_stream_is_eof() {
        // Window claims 64 bytes but only 4 exist.
        let mut bits = BitReader::new(Cursor::new(vec![1, 2, 3, 4]), 0, 64);
        assert_eq!(
            bits.read(0, 8),
            Err(DecodeError::UnexpectedEof {
                context: "bit stream page"
            })
        );
    }

    proptest! {
        #[test]
        fn prop_matches_naive_reader(
            data in proptest::collection::vec(any::<u8>(), 0..2600),
            offset in 0u64..22_000,
            num_bits in 1u32..=MAX_READ_BITS,
        ) {
            let mut bits = reader(&data);
            prop_assert_eq!(bits.read(offset, num_bits).unwrap(), naive_read(&data, offset, num_bits));
        }

        #[test]
        fn prop_sequential_reads_agree(
            data in proptest::collection::vec(any::<u8>(), 1..3000),
            widths in proptest::collection::vec(1u32..=MAX_READ_BITS, 1..400),
        ) {
            let mut bits = reader(&data);
            let mut offset = 0u64;
            for width in widths {
                prop_assert_eq!(bits.read(offset, width).unwrap(), naive_read(&data, offset, width));
                offset += u64::from(width);
            }
        }
    }
}
