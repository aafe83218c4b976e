//! Bulk export of decoded textures to PNG files.

use std::{
    collections::HashSet,
    fs,
    io::{Read, Seek},
    path::{Path, PathBuf},
};

use crate::{
    codec::TextureCache,
    error::{Error, Result},
};

/// A texture that could not be exported.
#[derive(Debug)]
pub struct DumpFailure {
    /// Base name of the texture.
    pub name: String,
    /// Why it failed.
    pub error: Error,
}

/// Outcome of [`TextureCache::dump_all`].
#[derive(Debug, Default)]
pub struct DumpReport {
    /// Files written, in name order.
    pub written: Vec<PathBuf>,
    /// Textures skipped because they failed to decode or write.
    pub failed: Vec<DumpFailure>,
}

/// Replace every character that is not ASCII alphanumeric, `-` or `_` with `_`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "_".to_string()
    } else {
        sanitized
    }
}

/// Claim a file stem for `name` that no earlier texture in this dump used.
///
/// Stems are compared ignoring ASCII case so that case-insensitive
/// filesystems cannot merge them either.
fn unique_stem(used: &mut HashSet<String>, name: &str) -> String {
    let base = sanitize_file_name(name);
    let mut stem = base.clone();
    let mut suffix = 1;
    while !used.insert(stem.to_ascii_lowercase()) {
        suffix += 1;
        stem = format!("{base}_{suffix}");
    }
    if suffix > 1 {
        tracing::warn!(name = %name, file = %stem, "sanitized file name collides, renamed");
    }
    stem
}

impl<R: Read + Seek> TextureCache<R> {
    /// Decode level 0 of every indexed texture and write it as
    /// `<sanitized name>.png` in `out_dir`.
    ///
    /// When two names sanitize to the same file name, the later one gets a
    /// `_2`, `_3`, ... suffix instead of overwriting the earlier file. A
    /// texture that fails is logged, recorded in the report, and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] only if `out_dir` cannot be created.
    pub fn dump_all(&mut self, out_dir: impl AsRef<Path>) -> Result<DumpReport> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir).map_err(|e| Error::Io {
            path: out_dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let names: Vec<String> = self.names().map(str::to_string).collect();
        let mut report = DumpReport::default();
        let mut stems = HashSet::new();

        for name in names {
            let stem = unique_stem(&mut stems, &name);
            let path = out_dir.join(format!("{stem}.png"));
            match self.dump_one(&name, &path) {
                Ok(()) => report.written.push(path),
                Err(error) => {
                    tracing::warn!(name = %name, error = %error, "failed to dump texture");
                    report.failed.push(DumpFailure { name, error });
                }
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failed.len(),
            out_dir = %out_dir.display(),
            "dumped textures"
        );
        Ok(report)
    }

    fn dump_one(&mut self, name: &str, path: &Path) -> Result<()> {
        let image = self.decode_level(name, 0)?;
        let image_error = |message: String| Error::Image {
            path: path.to_path_buf(),
            message,
        };

        let rgba = image.to_rgba_image().ok_or_else(|| {
            image_error(format!(
                "buffer does not match {}x{}",
                image.width, image.height
            ))
        })?;
        rgba.save_with_format(path, ::image::ImageFormat::Png)
            .map_err(|e| image_error(e.to_string()))
    }
}
