//! Directory parsing.
//!
//! The directory file starts with a 16-byte header (`TCHC`, total length,
//! version, entry count) followed by packed rows of a NUL-terminated name
//! and a little-endian data offset. Every row whose name carries a mip
//! suffix has a 20-byte header in the data file at that offset.

use std::{
    collections::BTreeMap,
    io::{Read, Seek, SeekFrom},
};

use crate::{
    error::{Error, Result},
    types::{MIP_LEVELS, TextureEntry, TextureRecord, split_mip_name},
};

/// Directory signature.
pub const SIGNATURE: &[u8; 4] = b"TCHC";

/// The only supported directory version.
pub const FORMAT_VERSION: i32 = 2;

/// Size of the directory header.
pub const DIRECTORY_HEADER_LEN: usize = 16;

/// Size of the per-texture header in the data file.
pub const ENTRY_HEADER_LEN: u64 = 20;

/// Difference between the stored length field and the payload length.
const STORED_LEN_CORRECTION: i64 = 8;

const ALPHA_FLAG: u32 = 1 << 7;

fn container_error(context: &'static str, detail: impl Into<String>) -> Error {
    Error::Container {
        context,
        detail: detail.into(),
    }
}

/// Cursor over the directory bytes.
struct DirectoryReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> DirectoryReader<'a> {
    fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let bytes = self.bytes.get(self.offset..self.offset.checked_add(len)?)?;
        self.offset += len;
        Some(bytes)
    }

    fn read_i32(&mut self) -> Option<i32> {
        let bytes = self.read_bytes(4)?;
        Some(i32::from_le_bytes(bytes.try_into().ok()?))
    }

    fn read_name(&mut self) -> Option<&'a [u8]> {
        let rest = self.bytes.get(self.offset..)?;
        let end = rest.iter().position(|&b| b == 0)?;
        self.offset += end + 1;
        Some(&rest[..end])
    }
}

/// Name-to-entry index of an opened container.
#[derive(Debug, Clone, Default)]
pub struct TextureIndex {
    entries: Vec<Option<TextureEntry>>,
    records: BTreeMap<String, TextureRecord>,
}

impl TextureIndex {
    /// Parse `directory` and read each indexed row's header from `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Container`] on a signature or version mismatch, a
    /// truncated directory or a truncated per-texture header. No partial
    /// index is returned.
    pub fn parse<R: Read + Seek>(directory: &[u8], data: &mut R) -> Result<Self> {
        let mut reader = DirectoryReader {
            bytes: directory,
            offset: 0,
        };
        let truncated = || container_error("directory header", "truncated");

        let signature = reader.read_bytes(SIGNATURE.len()).ok_or_else(truncated)?;
        if signature != SIGNATURE {
            return Err(container_error(
                "directory header",
                format!("bad signature {signature:02x?}"),
            ));
        }

        let total_len = reader.read_i32().ok_or_else(truncated)?;
        let version = reader.read_i32().ok_or_else(truncated)?;
        let count = reader.read_i32().ok_or_else(truncated)?;
        if version != FORMAT_VERSION {
            return Err(container_error(
                "directory header",
                format!("unsupported version {version}"),
            ));
        }
        let count = usize::try_from(count).map_err(|_| {
            container_error("directory header", format!("negative entry count {count}"))
        })?;

        if usize::try_from(total_len).ok() != Some(directory.len()) {
            tracing::debug!(
                total_len,
                actual = directory.len(),
                "directory length disagrees with header"
            );
        }

        let mut index = Self {
            entries: Vec::with_capacity(count.min(directory.len())),
            records: BTreeMap::new(),
        };

        for row in 0..count {
            let name = reader.read_name().ok_or_else(|| {
                container_error("directory", format!("row {row} name is truncated"))
            })?;
            let offset = reader.read_i32().ok_or_else(|| {
                container_error("directory", format!("row {row} offset is truncated"))
            })?;
            let name = String::from_utf8_lossy(name).into_owned();

            let Some((base, level)) = split_mip_name(&name) else {
                tracing::debug!(row, name = %name, "skipping directory row without mip suffix");
                index.entries.push(None);
                continue;
            };
            let base = base.to_string();

            let offset = u64::try_from(offset).map_err(|_| {
                container_error("directory", format!("{name} has negative offset {offset}"))
            })?;
            let entry = read_entry(data, name, level, offset)?;

            index.insert(base, level, row);
            index.entries.push(Some(entry));
        }

        Ok(index)
    }

    fn insert(&mut self, base: String, level: usize, row: usize) {
        let record = self
            .records
            .entry(base.to_ascii_lowercase())
            .or_insert_with(|| TextureRecord::new(base));

        let slot = &mut record.levels[level];
        debug_assert!(
            slot.is_none(),
            "duplicate mip level {level} for {}",
            record.name
        );
        if slot.is_none() {
            *slot = Some(row);
        }
    }

    /// Look up a record by base name, ignoring case.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&TextureRecord> {
        self.records.get(&name.to_ascii_lowercase())
    }

    /// Entry for a directory row, if the row was indexed.
    #[must_use]
    pub fn entry(&self, row: usize) -> Option<&TextureEntry> {
        self.entries.get(row)?.as_ref()
    }

    /// All records, sorted by lowercased base name.
    pub fn records(&self) -> impl Iterator<Item = &TextureRecord> {
        self.records.values()
    }

    /// Number of indexed base names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no base names are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read the 20-byte header of the row `name` at `offset`.
fn read_entry<R: Read + Seek>(
    data: &mut R,
    name: String,
    level: usize,
    offset: u64,
) -> Result<TextureEntry> {
    debug_assert!(level < MIP_LEVELS);

    let mut header = [0u8; ENTRY_HEADER_LEN as usize];
    data.seek(SeekFrom::Start(offset))
        .and_then(|_| data.read_exact(&mut header))
        .map_err(|e| container_error("entry header", format!("{name} at {offset}: {e}")))?;

    let u32_at = |at: usize| {
        u32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]])
    };
    let i32_at = |at: usize| u32_at(at) as i32;
    let i16_at = |at: usize| i16::from_le_bytes([header[at], header[at + 1]]);

    let width = i32_at(0);
    let height = i32_at(4);
    let stored_len = i32_at(8);
    let width2 = i16_at(12);
    let height2 = i16_at(14);
    let flags = u32_at(16);

    if i32::from(width2) != width || i32::from(height2) != height {
        tracing::debug!(
            name = %name,
            width,
            height,
            width2,
            height2,
            "secondary dimensions disagree"
        );
    }

    Ok(TextureEntry {
        name,
        level,
        width,
        height,
        width2,
        height2,
        payload_len: i64::from(stored_len) - STORED_LEN_CORRECTION,
        payload_offset: offset + ENTRY_HEADER_LEN,
        has_alpha: flags & ALPHA_FLAG != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ContainerBuilder;
    use std::io::Cursor;

    fn parse(directory: &[u8], data: Vec<u8>) -> Result<TextureIndex> {
        TextureIndex::parse(directory, &mut Cursor::new(data))
    }

    #[test]
    fn test_parse_entries() {
        let (directory, data) = ContainerBuilder::new()
            .flat("wallMM0", 16, 16, 100)
            .flat("wallMM1", 8, 8, 100)
            .flat("floorMM0", 8, 8, 20)
            .build();

        let index = parse(&directory, data).unwrap();
        assert_eq!(index.len(), 2);

        let wall = index.record("wall").unwrap();
        assert_eq!(wall.levels, [Some(0), Some(1), None, None]);
        let entry = index.entry(1).unwrap();
        assert_eq!(entry.name, "wallMM1");
        assert_eq!((entry.width, entry.height), (8, 8));
        assert!(!entry.has_alpha);
        assert!(entry.payload_len > 0);

        let names: Vec<_> = index.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["floor", "wall"]);
    }

    #[test]
    fn test_payload_follows_header() {
        let (directory, data) = ContainerBuilder::new()
            .flat("aMM0", 8, 8, 0)
            .flat("bMM0", 8, 8, 0)
            .build();

        let index = parse(&directory, data).unwrap();
        let first = index.entry(0).unwrap();
        let second = index.entry(1).unwrap();
        assert_eq!(first.payload_offset, ENTRY_HEADER_LEN);
        assert_eq!(
            second.payload_offset,
            first.payload_offset + first.payload_len as u64 + ENTRY_HEADER_LEN
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        let (directory, data) = ContainerBuilder::new()
            .flat("StoneWallMM0", 8, 8, 50)
            .flat("stonewallmm1", 4, 4, 50)
            .build();

        let index = parse(&directory, data).unwrap();
        assert_eq!(index.len(), 1);
        let record = index.record("STONEWALL").unwrap();
        assert_eq!(record.name, "StoneWall");
        assert_eq!(record.level_count(), 2);
    }

    #[test]
    fn test_unsuffixed_rows_are_skipped() {
        let (directory, data) = ContainerBuilder::new()
            .flat("palette", 8, 8, 0)
            .flat("wallMM0", 8, 8, 0)
            .build();

        let index = parse(&directory, data).unwrap();
        assert!(index.record("palette").is_none());
        assert!(index.entry(0).is_none());
        assert_eq!(index.record("wall").unwrap().levels[0], Some(1));
    }

    #[test]
    fn test_alpha_flag() {
        let (directory, data) = ContainerBuilder::new()
            .flat_with_alpha("glassMM0", 8, 8, 100, 128)
            .build();

        let index = parse(&directory, data).unwrap();
        assert!(index.entry(0).unwrap().has_alpha);
    }

    #[test]
    fn test_bad_signature() {
        let (mut directory, data) = ContainerBuilder::new().flat("aMM0", 8, 8, 0).build();
        directory[..4].copy_from_slice(b"TCHX");

        let result = parse(&directory, data);
        assert!(matches!(result, Err(Error::Container { .. })));
    }

    #[test]
    fn test_bad_version() {
        let (mut directory, data) = ContainerBuilder::new().flat("aMM0", 8, 8, 0).build();
        directory[8..12].copy_from_slice(&3i32.to_le_bytes());

        let result = parse(&directory, data);
        assert!(matches!(
            result,
            Err(Error::Container { context: "directory header", .. })
        ));
    }

    #[test]
    fn test_truncated_directory() {
        let (directory, data) = ContainerBuilder::new()
            .flat("aMM0", 8, 8, 0)
            .flat("bMM0", 8, 8, 0)
            .build();

        for len in [3, 12, directory.len() - 6, directory.len() - 2] {
            let result = parse(&directory[..len], data.clone());
            assert!(
                matches!(result, Err(Error::Container { .. })),
                "length {len} should be rejected"
            );
        }
    }

    #[test]
    fn test_truncated_entry_header() {
        let (directory, mut data) = ContainerBuilder::new().flat("aMM0", 8, 8, 0).build();
        data.truncate(12);

        let result = parse(&directory, data);
        assert!(matches!(
            result,
            Err(Error::Container { context: "entry header", .. })
        ));
    }

    #[test]
    fn test_empty_container() {
        let (directory, data) = ContainerBuilder::new().build();
        let index = parse(&directory, data).unwrap();
        assert!(index.is_empty());
    }
}
