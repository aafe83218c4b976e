//! Fixed lookup tables for the block codec.
//!
//! These are load-bearing binary constants: every decoded pixel depends on
//! them, so they are kept as literal data rather than derived at startup.
//!
//! The AC alphabet is one prefix code spread over eight window ranges:
//! short table-form codes fill the top two, and escapes with 13- to 17-bit
//! codes fill the rest, rarest last.

#![allow(clippy::unreadable_literal)]

/// High byte of a control word that ends the coefficient run.
pub(crate) const TERMINAL_MARKER: u32 = 0xFF;

/// High byte of a control word whose value follows as raw extra bits.
pub(crate) const ESCAPE_MARKER: u32 = 0x80;

/// Control word used for windows that no table covers.
pub(crate) const TERMINAL_CONTROL: u32 = TERMINAL_MARKER << 24;

/// One range of the 17-bit AC window and the table that decodes it.
pub(crate) struct AcRegion {
    /// Smallest window value in the range.
    pub threshold: u32,
    /// Right shift applied to the window before indexing.
    pub shift: u32,
    pub table: &'static [u32],
}

/// AC lookup ranges, largest threshold first.
pub(crate) static AC_REGIONS: [AcRegion; 8] = [
    AcRegion { threshold: 0x8000, shift: 9, table: &AC_TABLE_8000 },
    AcRegion { threshold: 0x800, shift: 5, table: &AC_TABLE_0800 },
    AcRegion { threshold: 0x400, shift: 4, table: &AC_TABLE_0400 },
    AcRegion { threshold: 0x200, shift: 3, table: &AC_TABLE_0200 },
    AcRegion { threshold: 0x100, shift: 2, table: &AC_TABLE_0100 },
    AcRegion { threshold: 0x80, shift: 1, table: &AC_TABLE_0080 },
    AcRegion { threshold: 0x40, shift: 0, table: &AC_TABLE_0040 },
    AcRegion { threshold: 0x20, shift: 0, table: &AC_TABLE_0020 },
];

/// DC prefix jump table: `(code length, extra bit count)` per 8-bit prefix.
pub(crate) static DC_JUMP_TABLE: [(u8, u8); 256] = [
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0), (2, 0),
    (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1),
    (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1),
    (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1),
    (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1), (3, 1),
    (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2),
    (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2),
    (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2),
    (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2),
    (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3),
    (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3),
    (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3),
    (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3), (3, 3),
    (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4),
    (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4),
    (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4),
    (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4), (3, 4),
    (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5),
    (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5),
    (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5),
    (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5), (3, 5),
    (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6),
    (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6), (4, 6),
    (5, 7), (5, 7), (5, 7), (5, 7), (5, 7), (5, 7), (5, 7), (5, 7),
    (6, 8), (6, 8), (6, 8), (6, 8), (7, 9), (7, 9), (8, 10), (8, 11),
];

/// Control words for windows in `0x8000..0x20000`, indexed from the range start by `window >> 9`.
pub(crate) static AC_TABLE_8000: [u32; 192] = [
    0x00050102, 0x00050102, 0x00050102, 0x00050102, 0x00050102, 0x00050102,
    0x00050102, 0x00050102, 0x00050002, 0x00050002, 0x00050002, 0x00050002,
    0x00050002, 0x00050002, 0x00050002, 0x00050002, 0x00040201, 0x00040201,
    0x00040201, 0x00040201, 0x00040201, 0x00040201, 0x00040201, 0x00040201,
    0x00040201, 0x00040201, 0x00040201, 0x00040201, 0x00040201, 0x00040201,
    0x00040201, 0x00040201, 0x00030101, 0x00030101, 0x00030101, 0x00030101,
    0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101,
    0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101,
    0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101,
    0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101, 0x00030101,
    0x00030101, 0x00030101, 0x00030101, 0x00030101, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000, 0xFF020000,
    0xFF020000, 0xFF020000, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
    0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001, 0x00020001,
];

/// Control words for windows in `0x800..0x8000`, indexed from the range start by `window >> 5`.
pub(crate) static AC_TABLE_0800: [u32; 960] = [
    0x000C0F01, 0x000C0E01, 0x000C0D01, 0x000C0C01, 0x000C0B02, 0x000C0B01,
    0x000C0A02, 0x000C0902, 0x000C0802, 0x000C0703, 0x000C0603, 0x000C0504,
    0x000C0405, 0x000C0404, 0x000C0306, 0x000C0305, 0x000C0208, 0x000C0207,
    0x000C010C, 0x000C010B, 0x000C010A, 0x000C0109, 0x000C0108, 0x000C0014,
    0x000C0013, 0x000C0012, 0x000C0011, 0x000C0010, 0x000C000F, 0x000C000E,
    0x000C000D, 0x000C000C, 0x000C000B, 0x000C000A, 0x000B0702, 0x000B0702,
    0x000A0A01, 0x000A0A01, 0x000A0A01, 0x000A0A01, 0x00090901, 0x00090901,
    0x00090901, 0x00090901, 0x00090901, 0x00090901, 0x00090901, 0x00090901,
    0x00090602, 0x00090602, 0x00090602, 0x00090602, 0x00090602, 0x00090602,
    0x00090602, 0x00090602, 0x00090503, 0x00090503, 0x00090503, 0x00090503,
    0x00090503, 0x00090503, 0x00090503, 0x00090503, 0x00090403, 0x00090403,
    0x00090403, 0x00090403, 0x00090403, 0x00090403, 0x00090403, 0x00090403,
    0x00090304, 0x00090304, 0x00090304, 0x00090304, 0x00090304, 0x00090304,
    0x00090304, 0x00090304, 0x00090206, 0x00090206, 0x00090206, 0x00090206,
    0x00090206, 0x00090206, 0x00090206, 0x00090206, 0x00090205, 0x00090205,
    0x00090205, 0x00090205, 0x00090205, 0x00090205, 0x00090205, 0x00090205,
    0x00090107, 0x00090107, 0x00090107, 0x00090107, 0x00090107, 0x00090107,
    0x00090107, 0x00090107, 0x00090106, 0x00090106, 0x00090106, 0x00090106,
    0x00090106, 0x00090106, 0x00090106, 0x00090106, 0x00090009, 0x00090009,
    0x00090009, 0x00090009, 0x00090009, 0x00090009, 0x00090009, 0x00090009,
    0x00090008, 0x00090008, 0x00090008, 0x00090008, 0x00090008, 0x00090008,
    0x00090008, 0x00090008, 0x00080801, 0x00080801, 0x00080801, 0x00080801,
    0x00080801, 0x00080801, 0x00080801, 0x00080801, 0x00080801, 0x00080801,
    0x00080801, 0x00080801, 0x00080801, 0x00080801, 0x00080801, 0x00080801,
    0x00080502, 0x00080502, 0x00080502, 0x00080502, 0x00080502, 0x00080502,
    0x00080502, 0x00080502, 0x00080502, 0x00080502, 0x00080502, 0x00080502,
    0x00080502, 0x00080502, 0x00080502, 0x00080502, 0x00080303, 0x00080303,
    0x00080303, 0x00080303, 0x00080303, 0x00080303, 0x00080303, 0x00080303,
    0x00080303, 0x00080303, 0x00080303, 0x00080303, 0x00080303, 0x00080303,
    0x00080303, 0x00080303, 0x00080204, 0x00080204, 0x00080204, 0x00080204,
    0x00080204, 0x00080204, 0x00080204, 0x00080204, 0x00080204, 0x00080204,
    0x00080204, 0x00080204, 0x00080204, 0x00080204, 0x00080204, 0x00080204,
    0x00080105, 0x00080105, 0x00080105, 0x00080105, 0x00080105, 0x00080105,
    0x00080105, 0x00080105, 0x00080105, 0x00080105, 0x00080105, 0x00080105,
    0x00080105, 0x00080105, 0x00080105, 0x00080105, 0x00080104, 0x00080104,
    0x00080104, 0x00080104, 0x00080104, 0x00080104, 0x00080104, 0x00080104,
    0x00080104, 0x00080104, 0x00080104, 0x00080104, 0x00080104, 0x00080104,
    0x00080104, 0x00080104, 0x00080007, 0x00080007, 0x00080007, 0x00080007,
    0x00080007, 0x00080007, 0x00080007, 0x00080007, 0x00080007, 0x00080007,
    0x00080007, 0x00080007, 0x00080007, 0x00080007, 0x00080007, 0x00080007,
    0x00080006, 0x00080006, 0x00080006, 0x00080006, 0x00080006, 0x00080006,
    0x00080006, 0x00080006, 0x00080006, 0x00080006, 0x00080006, 0x00080006,
    0x00080006, 0x00080006, 0x00080006, 0x00080006, 0x00070701, 0x00070701,
    0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701,
    0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701,
    0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701,
    0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701,
    0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701, 0x00070701,
    0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601,
    0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601,
    0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601,
    0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601,
    0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601, 0x00070601,
    0x00070601, 0x00070601, 0x00070402, 0x00070402, 0x00070402, 0x00070402,
    0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402,
    0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402,
    0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402,
    0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070402,
    0x00070402, 0x00070402, 0x00070402, 0x00070402, 0x00070302, 0x00070302,
    0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302,
    0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302,
    0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302,
    0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302,
    0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302, 0x00070302,
    0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203,
    0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203,
    0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203,
    0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203,
    0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203, 0x00070203,
    0x00070203, 0x00070203, 0x00070103, 0x00070103, 0x00070103, 0x00070103,
    0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103,
    0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103,
    0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103,
    0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070103,
    0x00070103, 0x00070103, 0x00070103, 0x00070103, 0x00070005, 0x00070005,
    0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005,
    0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005,
    0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005,
    0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005,
    0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005, 0x00070005,
    0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004,
    0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004,
    0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004,
    0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004,
    0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004, 0x00070004,
    0x00070004, 0x00070004, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501, 0x00060501,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060202,
    0x00060202, 0x00060202, 0x00060202, 0x00060202, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003, 0x00060003,
    0x00060003, 0x00060003, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050401,
    0x00050401, 0x00050401, 0x00050401, 0x00050401, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
    0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301, 0x00050301,
];

/// Control words for windows in `0x400..0x800`, indexed from the range start by `window >> 4`.
pub(crate) static AC_TABLE_0400: [u32; 64] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0x800D0A08, 0x800D0908, 0x800D0809, 0x800D0808, 0x800D0709, 0x800D0708,
    0x800D060A, 0x800D0609, 0x800D0608, 0x800D050B, 0x800D050A, 0x800D0509,
    0x800D0508, 0x800D040B, 0x800D040A, 0x800D0409, 0x800D0408, 0x800D030C,
    0x800D030B, 0x800D030A, 0x800D0309, 0x800D0308, 0x800D020C, 0x800D020B,
    0x800D020A, 0x800D0209, 0x800D0208, 0x800D010D, 0x800D010C, 0x800D010B,
    0x800D010A, 0x800D0109, 0x800D0108, 0x800D000E, 0x800D000D, 0x800D000C,
    0x800D000B, 0x800D000A, 0x800D0009, 0x800D0008,
];

/// Control words for windows in `0x200..0x400`, indexed from the range start by `window >> 3`.
pub(crate) static AC_TABLE_0200: [u32; 64] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0x800E0D08, 0x800E0C09,
    0x800E0C08, 0x800E0B09, 0x800E0B08, 0x800E0A0A, 0x800E0A09, 0x800E090A,
    0x800E0909, 0x800E080B, 0x800E080A, 0x800E070B, 0x800E070A, 0x800E060C,
    0x800E060B, 0x800E050D, 0x800E050C, 0x800E040D, 0x800E040C, 0x800E030E,
    0x800E030D, 0x800E020E, 0x800E020D, 0x800E010E,
];

/// Control words for windows in `0x100..0x200`, indexed from the range start by `window >> 2`.
pub(crate) static AC_TABLE_0100: [u32; 64] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0x800F0F08, 0x800F0E09, 0x800F0E08, 0x800F0D09, 0x800F0C0A, 0x800F0B0B,
    0x800F0B0A, 0x800F0A0B, 0x800F090C, 0x800F090B, 0x800F080C, 0x800F070D,
    0x800F070C, 0x800F060D, 0x800F050E, 0x800F040E,
];

/// Control words for windows in `0x80..0x100`, indexed from the range start by `window >> 1`.
pub(crate) static AC_TABLE_0080: [u32; 64] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0x80100F0A, 0x80100F09, 0x80100E0B, 0x80100E0A, 0x80100D0B, 0x80100D0A,
    0x80100C0C, 0x80100C0B, 0x80100B0C, 0x80100A0D, 0x80100A0C, 0x8010090D,
    0x8010080E, 0x8010080D, 0x8010070E, 0x8010060E,
];

/// Control words for windows in `0x40..0x80`.
pub(crate) static AC_TABLE_0040: [u32; 64] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0x80110F0B, 0x80110E0C, 0x80110D0C, 0x80110C0D,
    0x80110B0E, 0x80110B0D, 0x80110A0E, 0x8011090E,
];

/// Control words for windows in `0x20..0x40`.
pub(crate) static AC_TABLE_0020: [u32; 32] = [
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
    0x80110F0E, 0x80110F0D, 0x80110F0C, 0x80110E0E, 0x80110E0D, 0x80110D0E,
    0x80110D0D, 0x80110C0E,
];

/// Per-slot dequantisation and transform prescale, 16.16 fixed point.
///
/// Slot 0 is exactly `1 << 16`, so a DC-only block transforms to the same
/// samples as a blanket fill.
pub(crate) static COEFFICIENT_SCALE: [i32; 64] = [
    65536, 47249, 50159, 111468, 196608, 417058, 726568, 1900287,
    94498, 68129, 72325, 80364, 141746, 420954, 698436, 1198777,
    100318, 72325, 76780, 127970, 250795, 446883, 834137, 1272615,
    111468, 80364, 127970, 189591, 334403, 780292, 1029826, 1616061,
    131072, 141746, 250795, 390137, 524288, 1167761, 1574232, 2375359,
    250235, 240545, 446883, 567485, 834115, 1380115, 2157741, 3627910,
    726568, 698436, 926819, 1132809, 1574232, 2311866, 3356309, 5705818,
    2137823, 2055046, 2181625, 2424092, 3325502, 3627910, 5705818, 10331413,
];

/// Output slot for each value of the remaining-coefficient counter.
///
/// The counter starts at 63 and walks the zig-zag order backwards, so the
/// first AC coefficient (counter 63) lands in slot 1 and the last one
/// (counter 1) in slot 63. Slot 0 belongs to the DC term.
pub(crate) static AC_POSITION_INDEX: [u8; 64] = [
    0, 63, 62, 55, 47, 54, 61, 60, 53, 46, 39, 31, 38, 45, 52, 59,
    58, 51, 44, 37, 30, 23, 15, 22, 29, 36, 43, 50, 57, 56, 49, 42,
    35, 28, 21, 14, 7, 6, 13, 20, 27, 34, 41, 48, 40, 33, 26, 19,
    12, 5, 4, 11, 18, 25, 32, 24, 17, 10, 3, 2, 9, 16, 8, 1,
];
