//! Error types for pdfsplit.
//!
//! Every failure surfaces as a [`SplitError`]. Variants fall into a small
//! number of categories, exposed through [`SplitError::kind`]:
//!
//! - **NotFound**: the source document does not exist
//! - **InvalidInput**: the source path is not a readable PDF file
//! - **Value**: split points or filenames requested by the caller are invalid
//! - **Config**: a [`SplitConfig`](crate::config::SplitConfig) is malformed
//! - **Io**: creating or writing output failed
//! - **Pdf**: the page tree could not be rebuilt for a segment

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Broad category of a [`SplitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source path does not exist.
    NotFound,
    /// Source path is not a regular PDF file.
    InvalidInput,
    /// A split point or filename argument is out of range or malformed.
    Value,
    /// Configuration is invalid.
    Config,
    /// Filesystem failure while producing output.
    Io,
    /// PDF structure failure while extracting pages.
    Pdf,
}

/// Main error type for pdfsplit operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Source file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that does not exist.
        path: PathBuf,
    },

    /// Source path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Source file does not carry the `.pdf` extension.
    #[error("Not a PDF document: {}\n  Hint: the file name must end in .pdf", .path.display())]
    NotAPdf {
        /// Offending path.
        path: PathBuf,
    },

    /// Source file could not be parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Source file is encrypted.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// A single split at this page would leave the first part empty.
    #[error("Cannot split at page {page}: the first part would be empty (page must be 2 or greater)")]
    DegenerateSplit {
        /// Requested 1-indexed page.
        page: u32,
    },

    /// A split point lies outside the pages that may start a segment.
    #[error(
        "Split point {page} is out of range for a document with {page_count} page(s)\n  \
         Valid split points are between 2 and {max}",
        max = .page_count.saturating_sub(1)
    )]
    SplitPointOutOfRange {
        /// Requested 1-indexed page.
        page: u32,
        /// Pages in the source document.
        page_count: usize,
    },

    /// The same split point was requested twice.
    #[error("Split point {page} was given more than once")]
    DuplicateSplitPoint {
        /// Repeated 1-indexed page.
        page: u32,
    },

    /// No split points were given to a multi split.
    #[error("At least one split point is required")]
    NoSplitPoints,

    /// More output names than output documents.
    #[error("{given} filename(s) given but only {segments} document(s) will be created")]
    TooManyFilenames {
        /// Number of names supplied.
        given: usize,
        /// Number of segments in the plan.
        segments: usize,
    },

    /// Output name is empty or reaches outside the output directory.
    #[error("Invalid output filename: '{name}'")]
    InvalidFilename {
        /// Offending name.
        name: String,
    },

    /// An output file would replace the source document.
    #[error("Output file would overwrite the source document: {}", .path.display())]
    OverwritesSource {
        /// Resolved output path.
        path: PathBuf,
    },

    /// Two segments would be written to the same file.
    #[error("Output filename '{name}' is used more than once")]
    DuplicateFilename {
        /// Name after extension normalization.
        name: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Failed to create an output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to serialize into an output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Building a segment document failed.
    #[error("Failed to extract pages: {reason}")]
    ExtractionFailed {
        /// Details about the failure.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl SplitError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: PathBuf) -> Self {
        Self::NotAPdf { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an InvalidFilename error.
    pub fn invalid_filename(name: impl Into<String>) -> Self {
        Self::InvalidFilename { name: name.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an ExtractionFailed error.
    pub fn extraction_failed(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            reason: reason.into(),
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::NotFound,
            Self::NotAFile { .. }
            | Self::NotAPdf { .. }
            | Self::FailedToLoadPdf { .. }
            | Self::EncryptedPdf { .. } => ErrorKind::InvalidInput,
            Self::DegenerateSplit { .. }
            | Self::SplitPointOutOfRange { .. }
            | Self::DuplicateSplitPoint { .. }
            | Self::NoSplitPoints
            | Self::TooManyFilenames { .. }
            | Self::InvalidFilename { .. }
            | Self::DuplicateFilename { .. }
            | Self::OverwritesSource { .. } => ErrorKind::Value,
            Self::InvalidConfig { .. } => ErrorKind::Config,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io { .. } => {
                ErrorKind::Io
            }
            Self::ExtractionFailed { .. } => ErrorKind::Pdf,
        }
    }

    /// True for errors caused by the split request rather than the source
    /// file or the filesystem.
    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}
