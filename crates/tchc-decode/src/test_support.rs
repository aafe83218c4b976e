//! Bit stream builder for tests.
//!
//! Codes are looked up in the same tables the decoder uses, so the tests
//! never hardcode prefix codes. Enabled outside this crate by the
//! `test-support` feature.

use std::io::Cursor;

use crate::{
    bits::BitReader,
    entropy::Control,
    tables::{AC_REGIONS, DC_JUMP_TABLE, ESCAPE_MARKER, TERMINAL_MARKER},
};

/// Find the `(code, length)` of the AC symbol with the given control fields.
#[must_use]
pub fn ac_code(marker: u32, run: u32, field: u32) -> Option<(u32, u32)> {
    for region in &AC_REGIONS {
        for (i, &word) in region.table.iter().enumerate() {
            let control = Control::unpack(word);
            if control.marker == marker
                && control.run == run
                && control.field == field
                && control.code_len > 0
            {
                let window = ((region.threshold >> region.shift) + i as u32) << region.shift;
                return Some((window >> (17 - control.code_len), control.code_len));
            }
        }
    }
    None
}

/// Find the `(code, length)` of the DC category with `extra` magnitude bits.
#[must_use]
pub fn dc_code(extra: u8) -> (u32, u32) {
    let (byte, &(len, _)) = DC_JUMP_TABLE
        .iter()
        .enumerate()
        .find(|(_, (_, bits))| *bits == extra)
        .expect("every DC category has a code");
    ((byte as u32) >> (8 - len), u32::from(len))
}

/// MSB-first bit writer.
///
/// Panics if asked for a symbol the tables cannot encode.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    pub fn push(&mut self, value: u32, bits: u32) {
        for i in (0..bits).rev() {
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.last_mut().unwrap();
                *last |= 0x80 >> (self.bit_len % 8);
            }
            self.bit_len += 1;
        }
    }

    /// Append a DC delta using its category code and extra bits.
    pub fn push_dc(&mut self, delta: i32) {
        let extra = 32 - delta.unsigned_abs().leading_zeros();
        let (code, len) = dc_code(extra as u8);
        self.push(code, len);
        if extra > 0 {
            let raw = if delta > 0 {
                delta
            } else {
                delta + (1 << extra) - 1
            };
            self.push(raw as u32, extra);
        }
    }

    /// Append the blanket-fill flag.
    pub fn push_fill(&mut self) {
        self.push(0b10, 2);
    }

    /// Append the terminal AC code.
    pub fn push_terminal(&mut self) {
        let (code, len) = ac_code(TERMINAL_MARKER, 0, 0).unwrap();
        self.push(code, len);
    }

    /// Append one AC coefficient preceded by `run` zeros.
    pub fn push_ac(&mut self, run: u32, value: i32) {
        if value != 0 {
            if let Some((code, len)) = ac_code(0, run, value.unsigned_abs()) {
                self.push(code, len);
                self.push(u32::from(value < 0), 1);
                return;
            }
        }
        let width = (8..=14)
            .find(|&n| value >= -(1 << (n - 1)) && value < (1 << (n - 1)))
            .expect("value fits an escape");
        let (code, len) = ac_code(ESCAPE_MARKER, run, width).unwrap();
        self.push(code, len);
        self.push((value as u32) & ((1 << width) - 1), width);
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn into_reader(self) -> BitReader<Cursor<Vec<u8>>> {
        let len = self.bytes.len() as u64;
        BitReader::new(Cursor::new(self.bytes), 0, len)
    }
}
