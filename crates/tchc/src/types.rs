//! High-level types for indexed textures.

use tchc_decode::DecodedImage;

/// Number of mip levels a texture can carry.
pub const MIP_LEVELS: usize = 4;

/// Per-texture header of one directory row, read from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Full row name, including the mip suffix.
    pub name: String,
    /// Mip level parsed from the name suffix.
    pub level: usize,
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels.
    pub height: i32,
    /// Secondary width stored beside the header, used for cross-checks.
    pub width2: i16,
    /// Secondary height stored beside the header, used for cross-checks.
    pub height2: i16,
    /// Compressed payload length in bytes.
    pub payload_len: i64,
    /// Byte offset of the payload in the data file.
    pub payload_offset: u64,
    /// Whether blocks carry an alpha plane.
    pub has_alpha: bool,
}

/// Mip levels indexed under one base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRecord {
    /// Base name as it first appeared in the directory.
    pub name: String,
    /// Entry index of each level, if present.
    pub levels: [Option<usize>; MIP_LEVELS],
}

impl TextureRecord {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            levels: [None; MIP_LEVELS],
        }
    }

    /// Number of levels present.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.iter().filter(|level| level.is_some()).count()
    }

    /// Present levels in ascending order, paired with their entry indices.
    pub fn present_levels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.levels
            .iter()
            .enumerate()
            .filter_map(|(level, entry)| entry.map(|entry| (level, entry)))
    }
}

/// One decoded mip level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipLevel {
    /// Mip level (0 is the largest).
    pub level: usize,
    /// Decoded RGBA8 pixels.
    pub image: DecodedImage,
}

/// Split a directory name of the form `<base>MM<n>` into its base and level.
///
/// The suffix letters match case-insensitively. Returns `None` for names
/// without a recognized suffix or with an empty base.
#[must_use]
pub fn split_mip_name(name: &str) -> Option<(&str, usize)> {
    let bytes = name.as_bytes();
    let [.., m1, m2, digit] = bytes else {
        return None;
    };
    if !m1.eq_ignore_ascii_case(&b'm') || !m2.eq_ignore_ascii_case(&b'm') {
        return None;
    }

    let level = match digit {
        b'0'..=b'3' => usize::from(digit - b'0'),
        _ => return None,
    };
    let base = &name[..name.len() - 3];
    if base.is_empty() {
        return None;
    }
    Some((base, level))
}

/// Expected dimension of `level` given the level-0 dimension.
#[must_use]
pub fn mip_dimension(base: i32, level: usize) -> i32 {
    (base >> level).max(1)
}
