//! One open temperature-input stream and its per-tick reading.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Byte budget for a single reading. Milli-degree values are at most a
/// handful of digits plus a newline.
const READ_BUF_LEN: usize = 16;

/// An open handle to one `tempN_input` file.
///
/// The handle is opened once at startup and held for the process lifetime;
/// the kernel updates the value in place, so every read seeks back to the
/// start instead of tailing.
#[derive(Debug)]
pub struct SensorSource {
    path: PathBuf,
    file: File,
}

impl SensorSource {
    /// Open a discovered sensor path. Failure here is fatal to the caller:
    /// the unanimity logic needs the full discovered set.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|source| Error::SourceOpenFailed {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current reading in milli-degrees Celsius, or `None` if the read
    /// produced no usable value.
    ///
    /// `None` is never substituted with zero: zero is numerically close to
    /// real low temperatures and would poison the rate computation.
    pub fn read_millidegrees(&mut self) -> Option<i32> {
        let mut buf = [0u8; READ_BUF_LEN];
        self.file.seek(SeekFrom::Start(0)).ok()?;
        let n = self.file.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        parse_leading_int(&buf[..n])
    }
}

/// Parse the leading (optionally negative) decimal integer of a buffer.
fn parse_leading_int(buf: &[u8]) -> Option<i32> {
    let mut end = usize::from(buf.first() == Some(&b'-'));
    while end < buf.len() && buf[end].is_ascii_digit() {
        end += 1;
    }
    // Safe: the slice is ASCII '-' and digits only.
    std::str::from_utf8(&buf[..end]).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn source_with(value: &str) -> (TempDir, SensorSource) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("temp1_input");
        fs::write(&path, value).unwrap();
        let source = SensorSource::open(path).unwrap();
        (dir, source)
    }

    #[test]
    fn reads_millidegrees() {
        let (_dir, mut source) = source_with("42000\n");
        assert_eq!(source.read_millidegrees(), Some(42000));
    }

    #[test]
    fn rereads_in_place_after_update() {
        let (_dir, mut source) = source_with("42000\n");
        assert_eq!(source.read_millidegrees(), Some(42000));

        fs::write(source.path(), "55125\n").unwrap();
        assert_eq!(source.read_millidegrees(), Some(55125));
    }

    #[test]
    fn parses_negative_values() {
        // Below-zero ambient sensors are legal; only unparsable reads fail.
        let (_dir, mut source) = source_with("-5000\n");
        assert_eq!(source.read_millidegrees(), Some(-5000));
    }

    #[test]
    fn empty_file_is_a_failed_read() {
        let (_dir, mut source) = source_with("");
        assert_eq!(source.read_millidegrees(), None);
    }

    #[test]
    fn garbage_is_a_failed_read() {
        let (_dir, mut source) = source_with("not a number\n");
        assert_eq!(source.read_millidegrees(), None);
    }

    #[test]
    fn bare_minus_is_a_failed_read() {
        let (_dir, mut source) = source_with("-\n");
        assert_eq!(source.read_millidegrees(), None);
    }

    #[test]
    fn open_missing_path_is_source_open_failed() {
        let dir = TempDir::new().unwrap();
        let err = SensorSource::open(dir.path().join("temp9_input")).unwrap_err();
        assert!(matches!(err, Error::SourceOpenFailed { .. }), "got {err}");
    }
}
