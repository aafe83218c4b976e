//! Entropy decoding of block coefficients.
//!
//! Each AC symbol is found by reading a 17-bit window and mapping it to a
//! control word through one of eight range tables. A control word packs:
//!
//! - bits 24..32: marker (table form, escape form or terminal)
//! - bits 16..24: prefix code length
//! - bits 8..16: count of zero coefficients skipped before this one
//! - bits 0..8: magnitude (table form) or extra bit count (escape form)

use std::io::{Read, Seek};

use crate::{
    bits::BitReader,
    error::{DecodeError, DecodeResult},
    tables::{
        AC_POSITION_INDEX, AC_REGIONS, COEFFICIENT_SCALE, ESCAPE_MARKER, TERMINAL_CONTROL,
        TERMINAL_MARKER,
    },
};

/// Number of samples (and coefficients) in one 8x8 block.
pub const BLOCK_LEN: usize = 64;

/// Width of the window used to look up AC control words.
const AC_WINDOW_BITS: u32 = 17;

/// AC slots following the DC term.
const AC_SLOTS: u32 = 63;

/// Unpacked AC control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Control {
    pub marker: u32,
    pub code_len: u32,
    pub run: u32,
    pub field: u32,
}

impl Control {
    pub(crate) fn unpack(word: u32) -> Self {
        Self {
            marker: word >> 24,
            code_len: (word >> 16) & 0xFF,
            run: (word >> 8) & 0xFF,
            field: word & 0xFF,
        }
    }
}

/// Map a 17-bit window to its control word.
fn lookup_control(window: u32) -> u32 {
    AC_REGIONS
        .iter()
        .find(|region| window >= region.threshold)
        .map_or(TERMINAL_CONTROL, |region| {
            let index = (window >> region.shift) - (region.threshold >> region.shift);
            region.table[index as usize]
        })
}

/// Sign-extend the low `bits` bits of `raw` as two's complement.
fn twos_complement(raw: u32, bits: u32) -> i32 {
    let unused = 32 - bits;
    ((raw << unused) as i32) >> unused
}

/// Decode the scaled coefficients of one plane block.
///
/// `dc` is the plane's running DC value, already including this block's
/// delta. Coefficients are written in natural (row-major) order and
/// multiplied by their scale factors; slots without a coded value are zero.
///
/// # Returns
///
/// The bit position just past the block's last code.
///
/// # Errors
///
/// Returns an error if the stream cannot be read or a zero run would
/// place a coefficient past the end of the block.
pub fn decode_coefficients<R: Read + Seek>(
    reader: &mut BitReader<R>,
    position: u64,
    dc: i32,
    coefficients: &mut [i32; BLOCK_LEN],
) -> DecodeResult<u64> {
    coefficients.fill(0);
    coefficients[0] = dc.wrapping_mul(COEFFICIENT_SCALE[0]);

    let mut position = position;
    let mut remaining = AC_SLOTS;

    while remaining > 0 {
        let window = reader.read(position, AC_WINDOW_BITS)?;
        let control = Control::unpack(lookup_control(window));

        if control.marker == TERMINAL_MARKER {
            position += u64::from(control.code_len);
            break;
        }

        if control.run >= remaining {
            return Err(DecodeError::InvalidFormat {
                context: "coefficient run",
                detail: format!(
                    "run of {} zeros with {remaining} slots left",
                    control.run
                ),
            });
        }

        let value = if control.marker == ESCAPE_MARKER {
            let raw = reader.read(position + u64::from(control.code_len), control.field)?;
            position += u64::from(control.code_len + control.field);
            twos_complement(raw, control.field)
        } else {
            // The sign bit sits right after the code: bit `16 - code_len` of the window.
            let negative = (window >> (16 - control.code_len)) & 1 == 1;
            position += u64::from(control.code_len + 1);
            let magnitude = control.field as i32;
            if negative { -magnitude } else { magnitude }
        };

        remaining -= control.run;
        let slot = usize::from(AC_POSITION_INDEX[remaining as usize]);
        coefficients[slot] = value.wrapping_mul(COEFFICIENT_SCALE[slot]);
        remaining -= 1;
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BitWriter, ac_code};
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_at_start_keeps_only_dc() {
        let mut stream = BitWriter::new();
        stream.push_terminal();
        let consumed = stream.bit_len();
        let mut reader = stream.into_reader();

        let mut coefficients = [7; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 5, &mut coefficients).unwrap();

        assert_eq!(end, consumed);
        assert_eq!(coefficients[0], 5 << 16);
        assert_eq!(coefficients.iter().filter(|&&c| c != 0).count(), 1);
    }

    #[test]
    fn test_terminal_code_is_fill_prefix() {
        assert_eq!(ac_code(TERMINAL_MARKER, 0, 0), Some((0b10, 2)));
    }

    #[test]
    fn test_single_table_coefficient() {
        let mut stream = BitWriter::new();
        stream.push_ac(0, -1);
        stream.push_terminal();
        let consumed = stream.bit_len();
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 0, &mut coefficients).unwrap();

        assert_eq!(end, consumed);
        assert_eq!(coefficients[1], -COEFFICIENT_SCALE[1]);
        assert_eq!(coefficients.iter().filter(|&&c| c != 0).count(), 1);
    }

    #[test]
    fn test_escape_coefficient_after_run() {
        let mut stream = BitWriter::new();
        stream.push_ac(2, -100);
        stream.push_terminal();
        let consumed = stream.bit_len();
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 0, &mut coefficients).unwrap();

        // Zig-zag positions 1 and 2 are skipped; position 3 is slot 16.
        assert_eq!(end, consumed);
        assert_eq!(coefficients[16], -100 * COEFFICIENT_SCALE[16]);
        assert_eq!(coefficients.iter().filter(|&&c| c != 0).count(), 1);
    }

    #[test]
    fn test_mixed_symbols_land_in_zigzag_order() {
        let mut stream = BitWriter::new();
        stream.push_ac(0, 3);
        stream.push_ac(0, -2);
        stream.push_ac(1, 1);
        stream.push_ac(0, 200);
        stream.push_terminal();
        let consumed = stream.bit_len();
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, -3, &mut coefficients).unwrap();

        assert_eq!(end, consumed);
        assert_eq!(coefficients[0], -3 * COEFFICIENT_SCALE[0]);
        assert_eq!(coefficients[1], 3 * COEFFICIENT_SCALE[1]);
        assert_eq!(coefficients[8], -2 * COEFFICIENT_SCALE[8]);
        assert_eq!(coefficients[16], 0);
        assert_eq!(coefficients[9], COEFFICIENT_SCALE[9]);
        assert_eq!(coefficients[2], 200 * COEFFICIENT_SCALE[2]);
    }

    #[test]
    fn test_full_block_stops_without_terminal() {
        let mut stream = BitWriter::new();
        for _ in 0..63 {
            stream.push_ac(0, 1);
        }
        let consumed = stream.bit_len();
        // Anything after the 63rd coefficient belongs to the next block.
        stream.push_ac(0, 1);
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 1, &mut coefficients).unwrap();

        assert_eq!(end, consumed);
        assert!(
            coefficients
                .iter()
                .zip(COEFFICIENT_SCALE.iter())
                .all(|(&c, &s)| c == s)
        );
    }

    #[test]
    fn test_run_past_block_end_is_rejected() {
        let mut stream = BitWriter::new();
        for _ in 0..4 {
            stream.push_ac(15, 0);
        }
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let result = decode_coefficients(&mut reader, 0, 0, &mut coefficients);
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_zero_window_terminates() {
        // An exhausted stream reads as zeros, which no code occupies.
        let mut reader = BitReader::new(Cursor::new(Vec::new()), 0, 0);
        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 2, &mut coefficients).unwrap();
        assert_eq!(end, 0);
        assert_eq!(coefficients[0], 2 << 16);
    }

    #[test]
    fn test_every_table_symbol_has_a_code() {
        // Run/magnitude pairs up to the table limits must not need escapes.
        for (run, max) in [(0, 20), (1, 12), (2, 8), (15, 1)] {
            for magnitude in 1..=max {
                assert!(ac_code(0, run, magnitude).is_some(), "{run}/{magnitude}");
            }
        }
        for run in 0..16 {
            for width in 8..=14 {
                assert!(ac_code(ESCAPE_MARKER, run, width).is_some());
            }
        }
    }

    #[test]
    fn test_every_range_decodes_symbols() {
        for region in &AC_REGIONS {
            let symbols = region
                .table
                .iter()
                .filter(|&&word| Control::unpack(word).marker != TERMINAL_MARKER)
                .count();
            assert!(symbols > 0, "range {:#x} holds no codes", region.threshold);
        }
    }

    #[test]
    fn test_long_escape_in_lowest_range() {
        // The rarest escapes sit in the 0x20..0x80 windows with 17-bit codes.
        let (code, len) = ac_code(ESCAPE_MARKER, 15, 14).unwrap();
        assert_eq!(len, 17);
        assert!((0x20..0x80).contains(&code));

        let mut stream = BitWriter::new();
        stream.push_ac(0, 5);
        stream.push_ac(15, -5000);
        stream.push_terminal();
        let consumed = stream.bit_len();
        let mut reader = stream.into_reader();

        let mut coefficients = [0; BLOCK_LEN];
        let end = decode_coefficients(&mut reader, 0, 0, &mut coefficients).unwrap();

        // Zig-zag position 1 holds the 5; position 17 is slot 19.
        assert_eq!(end, consumed);
        assert_eq!(coefficients[1], 5 * COEFFICIENT_SCALE[1]);
        assert_eq!(coefficients[19], -5000 * COEFFICIENT_SCALE[19]);
    }

    #[test]
    fn test_sign_bit_follows_code() {
        let (code, len) = ac_code(0, 0, 2).unwrap();
        for (sign, expected) in [(0, 2), (1, -2)] {
            let mut stream = BitWriter::new();
            stream.push(code, len);
            stream.push(sign, 1);
            stream.push_terminal();
            let mut reader = stream.into_reader();

            let mut coefficients = [0; BLOCK_LEN];
            decode_coefficients(&mut reader, 0, 0, &mut coefficients).unwrap();
            assert_eq!(coefficients[1], expected * COEFFICIENT_SCALE[1]);
        }
    }

    #[test]
    fn test_twos_complement() {
        assert_eq!(twos_complement(0x7F, 8), 127);
        assert_eq!(twos_complement(0x80, 8), -128);
        assert_eq!(twos_complement(0x3FFF, 14), -1);
    }

    proptest! {
        #[test]
        fn prop_arbitrary_stream_terminates_in_bounds(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            dc in -2048i32..2048,
            start in 0u64..64,
        ) {
            let len = data.len() as u64;
            let mut reader = BitReader::new(Cursor::new(data), 0, len);
            let mut coefficients = [0; BLOCK_LEN];
            match decode_coefficients(&mut reader, start, dc, &mut coefficients) {
                Ok(end) => {
                    prop_assert!(end >= start);
                    // Longest symbol: 17-bit code plus 14 escape bits.
                    prop_assert!(end - start <= 63 * 31 + 2);
                }
                Err(e) => prop_assert!(matches!(e, DecodeError::InvalidFormat { .. }), "unexpected error: {:?}", e),
            }
        }
    }
}
