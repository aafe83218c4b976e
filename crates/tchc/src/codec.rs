//! The texture cache façade.

use std::{
    fs::{self, File},
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use tchc_decode::{BitReader, DecodeError, DecodedImage, ImageHeader, decode_image_with_stats};

use crate::{
    error::{Error, Result},
    index::TextureIndex,
    types::{MipLevel, TextureEntry, TextureRecord, mip_dimension},
};

fn positive(dimension: i32) -> Option<u32> {
    u32::try_from(dimension).ok().filter(|&d| d > 0)
}

/// An opened texture cache.
///
/// Holds the directory index and the data file handle for its whole
/// lifetime. Every decode builds its own reader and DC predictors, so no
/// state carries over between calls.
#[derive(Debug)]
pub struct TextureCache<R> {
    index: TextureIndex,
    data: R,
    /// Size of the data file in bytes, taken at open.
    data_len: u64,
}

impl TextureCache<BufReader<File>> {
    /// Open the directory file and data file at the given paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if either file cannot be opened, or any error
    /// from [`TextureCache::open`].
    pub fn open_files(directory: impl AsRef<Path>, data: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        let data = data.as_ref();

        let directory_bytes = fs::read(directory).map_err(|e| Error::Io {
            path: directory.to_path_buf(),
            message: e.to_string(),
        })?;
        let file = File::open(data).map_err(|e| Error::Io {
            path: data.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::open(&directory_bytes, BufReader::new(file))
    }
}

impl<R: Read + Seek> TextureCache<R> {
    /// Parse `directory` and index the textures stored in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Container`] if the directory or any indexed
    /// per-texture header is unusable, or the data file cannot be sized.
    pub fn open(directory: &[u8], mut data: R) -> Result<Self> {
        let index = TextureIndex::parse(directory, &mut data)?;
        let data_len = data.seek(SeekFrom::End(0)).map_err(|e| Error::Container {
            context: "data file",
            detail: e.to_string(),
        })?;
        tracing::info!(textures = index.len(), data_len, "opened texture cache");
        Ok(Self {
            index,
            data,
            data_len,
        })
    }

    /// Whether a texture with this base name is indexed (ignoring case).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.record(name).is_some()
    }

    /// Indexed base names, sorted case-insensitively.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.records().map(|record| record.name.as_str())
    }

    /// Number of indexed base names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache indexes no textures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Mip levels indexed under `name`.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&TextureRecord> {
        self.index.record(name)
    }

    /// Header of a directory row, if the row was indexed.
    #[must_use]
    pub fn entry(&self, row: usize) -> Option<&TextureEntry> {
        self.index.entry(row)
    }

    /// The underlying index.
    #[must_use]
    pub fn index(&self) -> &TextureIndex {
        &self.index
    }

    /// Decode every present mip level of `name`, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the name is not indexed,
    /// [`Error::MalformedStream`] if level 0 is missing or a level's
    /// dimensions are not the halved level-0 dimensions, and
    /// [`Error::Decode`] if a payload fails to decode.
    pub fn decode(&mut self, name: &str) -> Result<Vec<MipLevel>> {
        let record = self.lookup(name)?.clone();
        let (width, height) = self.base_dimensions(&record)?;

        let mut levels = Vec::with_capacity(record.level_count());
        for (level, row) in record.present_levels() {
            let image = self.decode_row(&record.name, row, level, width, height)?;
            levels.push(MipLevel { level, image });
        }
        Ok(levels)
    }

    /// Decode a single mip level of `name`.
    ///
    /// # Errors
    ///
    /// As [`TextureCache::decode`]; additionally [`Error::NotFound`] if the
    /// level is absent.
    pub fn decode_level(&mut self, name: &str, level: usize) -> Result<DecodedImage> {
        let record = self.lookup(name)?.clone();
        let (width, height) = self.base_dimensions(&record)?;
        let row = record
            .levels
            .get(level)
            .copied()
            .flatten()
            .ok_or_else(|| Error::NotFound {
                name: format!("{}MM{level}", record.name),
            })?;

        self.decode_row(&record.name, row, level, width, height)
    }

    fn lookup(&self, name: &str) -> Result<&TextureRecord> {
        self.index.record(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })
    }

    fn row_entry(&self, name: &str, row: usize) -> Result<&TextureEntry> {
        self.index.entry(row).ok_or_else(|| Error::MalformedStream {
            name: name.to_string(),
            detail: format!("row {row} is not indexed"),
        })
    }

    fn base_dimensions(&self, record: &TextureRecord) -> Result<(i32, i32)> {
        let row = record.levels[0].ok_or_else(|| Error::MalformedStream {
            name: record.name.clone(),
            detail: "mip level 0 is missing".to_string(),
        })?;
        let entry = self.row_entry(&record.name, row)?;
        Ok((entry.width, entry.height))
    }

    fn decode_row(
        &mut self,
        name: &str,
        row: usize,
        level: usize,
        base_width: i32,
        base_height: i32,
    ) -> Result<DecodedImage> {
        let entry = self.row_entry(name, row)?.clone();
        let malformed = |detail: String| Error::MalformedStream {
            name: name.to_string(),
            detail,
        };

        let (Some(width), Some(height)) = (positive(entry.width), positive(entry.height)) else {
            return Err(malformed(format!(
                "level {level} has invalid size {}x{}",
                entry.width, entry.height
            )));
        };

        let expected = (
            mip_dimension(base_width, level),
            mip_dimension(base_height, level),
        );
        if (entry.width, entry.height) != expected {
            return Err(malformed(format!(
                "level {level} is {}x{}, expected {}x{}",
                entry.width, entry.height, expected.0, expected.1
            )));
        }

        let Ok(payload_len) = u64::try_from(entry.payload_len) else {
            return Err(malformed(format!(
                "level {level} has negative payload length {}",
                entry.payload_len
            )));
        };

        let in_file = entry
            .payload_offset
            .checked_add(payload_len)
            .is_some_and(|end| end <= self.data_len);
        if !in_file {
            return Err(Error::Decode {
                name: name.to_string(),
                source: DecodeError::UnexpectedEof { context: "payload" },
            });
        }

        let header = ImageHeader {
            width,
            height,
            has_alpha: entry.has_alpha,
        };
        header
            .rgba_len()
            .map_err(|e| malformed(format!("level {level}: {e}")))?;

        // Every plane block takes at least two bits, which bounds the
        // dimensions a payload of this size can describe.
        let min_bits = header.min_payload_bits();
        if min_bits > payload_len.saturating_mul(8) {
            return Err(malformed(format!(
                "level {level} is {width}x{height} but its {payload_len}-byte payload \
                 cannot hold {min_bits} bits"
            )));
        }

        let reader = BitReader::new(&mut self.data, entry.payload_offset, payload_len);
        let (image, stats) =
            decode_image_with_stats(reader, header).map_err(|source| Error::Decode {
                name: name.to_string(),
                source,
            })?;

        tracing::debug!(
            name,
            level,
            width,
            height,
            fill = stats.fill,
            transformed = stats.transformed,
            "decoded mip level"
        );
        Ok(image)
    }
}
