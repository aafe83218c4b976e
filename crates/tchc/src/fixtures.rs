//! Synthetic containers for tests.

use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
};

use tchc_decode::test_support::BitWriter;

use crate::index::{DIRECTORY_HEADER_LEN, FORMAT_VERSION, SIGNATURE};

/// Payload whose every block is a uniform `luma` (and `alpha`, if given).
pub(crate) fn flat_payload(width: i32, height: i32, luma: i32, alpha: Option<i32>) -> Vec<u8> {
    let blocks = (width.max(1) as u32).div_ceil(8) * (height.max(1) as u32).div_ceil(8);
    let mut stream = BitWriter::new();
    let mut fill = |delta: i32| {
        stream.push_dc(delta);
        stream.push_fill();
    };
    for block in 0..blocks {
        let first = block == 0;
        fill(if first { luma } else { 0 });
        fill(0);
        fill(0);
        if let Some(alpha) = alpha {
            fill(if first { alpha } else { 0 });
        }
    }
    stream.into_bytes()
}

#[derive(Debug, Clone)]
struct FixtureEntry {
    name: String,
    width: i32,
    height: i32,
    has_alpha: bool,
    payload: Vec<u8>,
    /// Bytes declared beyond the payload actually written.
    missing: i32,
}

/// Builder for an in-memory directory and data file pair.
#[derive(Debug, Clone, Default)]
pub(crate) struct ContainerBuilder {
    entries: Vec<FixtureEntry>,
}

impl ContainerBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Row with uniform gray content.
    pub(crate) fn flat(self, name: &str, width: i32, height: i32, luma: i32) -> Self {
        self.payload(name, width, height, false, flat_payload(width, height, luma, None))
    }

    /// Row with uniform gray content and a uniform alpha plane.
    pub(crate) fn flat_with_alpha(
        self,
        name: &str,
        width: i32,
        height: i32,
        luma: i32,
        alpha: i32,
    ) -> Self {
        let payload = flat_payload(width, height, luma, Some(alpha));
        self.payload(name, width, height, true, payload)
    }

    /// Row whose header declares far more payload than the data file holds.
    ///
    /// Only meaningful as the last row, where the data file ends early.
    pub(crate) fn truncated(mut self, name: &str, width: i32, height: i32) -> Self {
        self = self.payload(name, width, height, false, vec![0xC0]);
        if let Some(entry) = self.entries.last_mut() {
            entry.missing = 4096;
        }
        self
    }

    /// Row with an explicit payload.
    pub(crate) fn payload(
        mut self,
        name: &str,
        width: i32,
        height: i32,
        has_alpha: bool,
        payload: Vec<u8>,
    ) -> Self {
        self.entries.push(FixtureEntry {
            name: name.to_string(),
            width,
            height,
            has_alpha,
            payload,
            missing: 0,
        });
        self
    }

    /// Produce the `(directory, data)` byte pair.
    pub(crate) fn build(&self) -> (Vec<u8>, Vec<u8>) {
        let mut rows = Vec::new();
        let mut data = Vec::new();

        for entry in &self.entries {
            rows.extend_from_slice(entry.name.as_bytes());
            rows.push(0);
            rows.extend_from_slice(&(data.len() as i32).to_le_bytes());

            let stored_len = entry.payload.len() as i32 + 8 + entry.missing;
            let flags: u32 = if entry.has_alpha { 1 << 7 } else { 0 };
            data.extend_from_slice(&entry.width.to_le_bytes());
            data.extend_from_slice(&entry.height.to_le_bytes());
            data.extend_from_slice(&stored_len.to_le_bytes());
            data.extend_from_slice(&(entry.width as i16).to_le_bytes());
            data.extend_from_slice(&(entry.height as i16).to_le_bytes());
            data.extend_from_slice(&flags.to_le_bytes());
            data.extend_from_slice(&entry.payload);
        }

        let total_len = (DIRECTORY_HEADER_LEN + rows.len()) as i32;
        let mut directory = Vec::with_capacity(total_len as usize);
        directory.extend_from_slice(SIGNATURE);
        directory.extend_from_slice(&total_len.to_le_bytes());
        directory.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        directory.extend_from_slice(&(self.entries.len() as i32).to_le_bytes());
        directory.extend_from_slice(&rows);

        (directory, data)
    }
}

/// Shared buffer that a test subscriber writes formatted events into.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Run `f` with a subscriber at `level` writing into a fresh buffer.
    pub(crate) fn capture<T>(level: tracing::Level, f: impl FnOnce() -> T) -> (Self, T) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (logs, result)
    }

    /// Captured lines containing `needle`.
    pub(crate) fn lines_containing(&self, needle: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `tracing` output through the test harness.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

mod tests {
    use super::*;

    #[test]
    fn test_flat_payload_encoding() {
        // 11110 1100100 10, then 00 10 twice for the chroma planes.
        assert_eq!(flat_payload(8, 8, 100, None), [0xF6, 0x48, 0x88]);
        // 010 0 10, then 00 10 for the remaining planes.
        assert_eq!(flat_payload(8, 8, -1, Some(0)), [0x48, 0x88, 0x80]);
    }

    #[test]
    fn test_captured_logs_filter_by_level() {
        let (logs, ()) = CapturedLogs::capture(tracing::Level::WARN, || {
            tracing::debug!("quiet");
            tracing::warn!(name = "wall", "loud");
        });

        assert!(logs.lines_containing("quiet").is_empty());
        let loud = logs.lines_containing("loud");
        assert_eq!(loud.len(), 1);
        assert!(loud[0].contains("name=\"wall\""));
    }
}
