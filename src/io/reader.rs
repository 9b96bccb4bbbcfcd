//! Opening source documents.
//!
//! A [`PdfDocument`] is the read-only handle every split works from. Opening
//! validates the path before the parser ever sees it, so callers get a precise
//! error for a missing file, a directory, or a file without the `.pdf`
//! extension.

use lopdf::{Document, ObjectId};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::utils;

/// An opened, validated source PDF.
#[derive(Debug)]
pub struct PdfDocument {
    document: Document,
    path: PathBuf,
    /// Page object ids in page order.
    page_ids: Vec<ObjectId>,
}

impl PdfDocument {
    /// Open a PDF document for splitting.
    ///
    /// Accepts any path-like value (`&str`, `String`, `&Path`, `PathBuf`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist ([`SplitError::FileNotFound`])
    /// - The path is not a regular file ([`SplitError::NotAFile`])
    /// - The path does not end in `.pdf` ([`SplitError::NotAPdf`])
    /// - The file is encrypted ([`SplitError::EncryptedPdf`])
    /// - The file is not a readable PDF ([`SplitError::FailedToLoadPdf`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfsplit::io::PdfDocument;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = PdfDocument::open("report.pdf")?;
    /// println!("Loaded {} pages from {}", doc.page_count(), doc.path().display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Self::check_path(&path)?;

        let start = Instant::now();
        let document = Document::load(&path).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                SplitError::encrypted_pdf(path.clone())
            } else {
                SplitError::failed_to_load_pdf(path.clone(), err_msg)
            }
        })?;

        if document.is_encrypted() {
            return Err(SplitError::encrypted_pdf(path));
        }

        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();

        debug!(
            "Loaded {} ({} pages) in {:?}",
            path.display(),
            page_ids.len(),
            start.elapsed()
        );

        Ok(Self {
            document,
            path,
            page_ids,
        })
    }

    /// Validate that `path` names an existing regular `.pdf` file.
    fn check_path(path: &Path) -> Result<()> {
        if !path.try_exists()? {
            return Err(SplitError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(SplitError::not_a_file(path.to_path_buf()));
        }

        if !utils::has_pdf_extension(path) {
            return Err(SplitError::not_a_pdf(path.to_path_buf()));
        }

        Ok(())
    }

    /// Path the document was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the source document.
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Page object ids for a half-open, 0-indexed page range, in page order.
    ///
    /// # Panics
    ///
    /// Panics unless `range.start <= range.end <= self.page_count()`.
    pub fn pages(&self, range: Range<usize>) -> &[ObjectId] {
        &self.page_ids[range]
    }

    /// The parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
