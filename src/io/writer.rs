//! PDF writing and saving operations.
//!
//! Each output document is written through a buffered file handle that is
//! closed before [`PdfWriter::write`] returns, whether serialization succeeded
//! or not. Optional compression and object renumbering are applied to the
//! document in place before it is serialized.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriteOptions {
    /// Compress content streams before writing.
    pub compress: bool,

    /// Renumber objects so the output has a dense object table.
    pub optimize: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compress: true,
            optimize: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,

    /// Whether optimization was applied.
    pub optimized: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Options this writer applies.
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Write a document to `path`, replacing any file already there.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::FailedToCreateOutput`] if the file cannot be
    /// created and [`SplitError::FailedToWrite`] if serialization or flushing
    /// fails.
    pub fn write<P: AsRef<Path>>(&self, doc: &mut Document, path: P) -> Result<WriteStatistics> {
        let path = path.as_ref();
        let start = Instant::now();

        if self.options.compress {
            doc.compress();
        }

        if self.options.optimize {
            doc.renumber_objects();
        }

        self.serialize(doc, path)?;

        let stats = WriteStatistics {
            write_time: start.elapsed(),
            file_size: std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
            output_path: path.to_path_buf(),
            compressed: self.options.compress,
            optimized: self.options.optimize,
        };

        debug!(
            "Wrote {} ({}) in {:?}",
            path.display(),
            stats.format_file_size(),
            stats.write_time
        );

        Ok(stats)
    }

    /// Serialize into a freshly created file. The handle is dropped, and the
    /// file closed, on every return path.
    fn serialize(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| SplitError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| SplitError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| SplitError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
