//! Append-mode file sink for match records.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::worker::VanityResult;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot open output file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write to output file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append-mode sink for found matches.
///
/// Every record is flushed as soon as it is written so results survive an
/// interrupted search.
pub struct OutputSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputSink {
    /// Opens the sink in append mode, creating the file if needed.
    pub fn open(path: &Path) -> Result<Self, OutputError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| OutputError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Appends one match record and flushes it.
    pub fn write_match(&mut self, result: &VanityResult) -> Result<(), OutputError> {
        let record = format!("{}\n", result);
        self.writer
            .write_all(record.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Returns the path the sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(n: u8) -> VanityResult {
        VanityResult {
            address: format!("0x{:040x}", n),
            private_key: format!("0x{:064x}", n),
            worker_id: 0,
        }
    }

    #[test]
    fn writes_records_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut sink = OutputSink::open(&path).unwrap();
        sink.write_match(&sample_result(1)).unwrap();
        sink.write_match(&sample_result(2)).unwrap();
        drop(sink);

        // Reopening appends rather than truncating.
        let mut sink = OutputSink::open(&path).unwrap();
        sink.write_match(&sample_result(3)).unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Address: ").count(), 3);
        assert_eq!(contents.matches("Private Key: ").count(), 3);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn open_fails_for_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.txt");
        assert!(matches!(
            OutputSink::open(&path),
            Err(OutputError::Open { .. })
        ));
    }
}
