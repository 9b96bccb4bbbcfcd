//! Splitting a document into several documents.
//!
//! A split runs in three steps:
//! 1. Validate the request and compute a [`SplitPlan`] and its filenames.
//!    Nothing touches the filesystem until this succeeds.
//! 2. Resolve the output directory and collision-free names ([`OutputPlan`])
//!    and create the directory.
//! 3. Extract each segment with [`PageExtractor`] and write it with
//!    [`PdfWriter`], one file at a time.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::{MultiSplitOptions, PdfDocument, Splitter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = PdfDocument::open("book.pdf")?;
//! let splitter = Splitter::new(&source);
//!
//! // Pages 1-2 and 3-end.
//! let (front, back) = splitter.single_split(3)?;
//! println!("{} / {}", front.display(), back.display());
//!
//! // Pages 1-2, 3-7, 8-9 and 10-end, two of them named.
//! let options = MultiSplitOptions::new().with_filenames(["preface", "chapter-1"]);
//! let output = splitter.multi_split(&[3, 8, 10], &options)?;
//! println!("{} files in {}", output.filenames.len(), output.directory.display());
//! # Ok(())
//! # }
//! ```

pub mod naming;
pub mod pages;
pub mod plan;

pub use naming::OutputPlan;
pub use pages::PageExtractor;
pub use plan::SplitPlan;

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::io::{PdfDocument, PdfWriter};

/// Caller choices for a multi split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSplitOptions {
    /// Names for the first segments. May be shorter than the number of
    /// segments; the rest are named `part_<i>.pdf`.
    pub filenames: Vec<String>,

    /// Output directory, relative to the source document's directory.
    /// `None` uses the configured default, which is numbered when it exists.
    pub directory: Option<String>,
}

impl MultiSplitOptions {
    /// Options with no filenames and the default directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the names of the first segments.
    pub fn with_filenames<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filenames = filenames.into_iter().map(Into::into).collect();
        self
    }

    /// Write into this directory instead of the default one.
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }
}

/// Result of a multi split: where the files went and what they are called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutput {
    /// Directory holding the output files.
    pub directory: PathBuf,

    /// Filenames actually used, one per segment, in page order.
    pub filenames: Vec<String>,
}

impl SplitOutput {
    /// Full path of every output file, in page order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.filenames
            .iter()
            .map(|name| self.directory.join(name))
            .collect()
    }
}

impl From<OutputPlan> for SplitOutput {
    fn from(plan: OutputPlan) -> Self {
        let (directory, filenames) = plan.into_parts();
        Self {
            directory,
            filenames,
        }
    }
}

/// Splits one source document.
#[derive(Debug)]
pub struct Splitter<'a> {
    source: &'a PdfDocument,
    config: SplitConfig,
    extractor: PageExtractor,
    writer: PdfWriter,
}

impl<'a> Splitter<'a> {
    /// Create a splitter with the default configuration.
    pub fn new(source: &'a PdfDocument) -> Self {
        Self::build(source, SplitConfig::default())
    }

    /// Create a splitter with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`](crate::SplitError::InvalidConfig) if `config`
    /// fails [`SplitConfig::validate`].
    pub fn with_config(source: &'a PdfDocument, config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    fn build(source: &'a PdfDocument, config: SplitConfig) -> Self {
        let writer = PdfWriter::with_options(config.write.clone());
        Self {
            source,
            config,
            extractor: PageExtractor::new(),
            writer,
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split into two documents using the configured default filenames.
    ///
    /// `page` (1-indexed) becomes the first page of the second document.
    /// See [`single_split_named`](Self::single_split_named).
    pub fn single_split(&self, page: u32) -> Result<(PathBuf, PathBuf)> {
        let [first, second] = &self.config.single_filenames;
        self.single_split_named(page, [first.as_str(), second.as_str()])
    }

    /// Split into two documents named `filenames`.
    ///
    /// Output goes to the configured single-split directory next to the
    /// source. If that directory already exists and either file is taken,
    /// both names are numbered (`part_1(1).pdf`, `part_2(1).pdf`, ...) until
    /// neither is.
    ///
    /// # Errors
    ///
    /// - [`DegenerateSplit`](crate::SplitError::DegenerateSplit) if `page <= 1`
    /// - [`SplitPointOutOfRange`](crate::SplitError::SplitPointOutOfRange) if
    ///   `page` is past the last page
    /// - [`InvalidFilename`](crate::SplitError::InvalidFilename) /
    ///   [`DuplicateFilename`](crate::SplitError::DuplicateFilename) for bad
    ///   names
    /// - I/O and extraction errors while writing
    pub fn single_split_named(&self, page: u32, filenames: [&str; 2]) -> Result<(PathBuf, PathBuf)> {
        let plan = SplitPlan::single(page, self.source.page_count())?;
        let [first, second] = filenames;
        let names = [
            naming::normalize_filename(first)?,
            naming::normalize_filename(second)?,
        ];
        naming::check_unique(&names)?;

        info!(
            "Splitting {} at page {page}",
            self.source.path().display()
        );

        let output = OutputPlan::single(
            self.source.parent_dir(),
            &self.config.single_dir_name,
            names,
        );
        self.write_segments(&plan, &output)?;

        let (directory, names) = output.into_parts();
        Ok((directory.join(&names[0]), directory.join(&names[1])))
    }

    /// Split at every page in `pages` (1-indexed; each starts a new document).
    ///
    /// # Errors
    ///
    /// - [`NoSplitPoints`](crate::SplitError::NoSplitPoints) if `pages` is
    ///   empty
    /// - [`SplitPointOutOfRange`](crate::SplitError::SplitPointOutOfRange) if
    ///   a page is `<= 1` or `>=` the page count
    /// - [`DuplicateSplitPoint`](crate::SplitError::DuplicateSplitPoint) if a
    ///   page repeats
    /// - [`TooManyFilenames`](crate::SplitError::TooManyFilenames) if more
    ///   names than documents are given
    /// - [`InvalidFilename`](crate::SplitError::InvalidFilename) /
    ///   [`DuplicateFilename`](crate::SplitError::DuplicateFilename) for bad
    ///   names or an empty directory name
    /// - [`OverwritesSource`](crate::SplitError::OverwritesSource) if an
    ///   output file resolves to the source document
    /// - I/O and extraction errors while writing
    pub fn multi_split(&self, pages: &[u32], options: &MultiSplitOptions) -> Result<SplitOutput> {
        let plan = SplitPlan::multi(pages, self.source.page_count())?;
        let filenames = naming::fill_filenames(&options.filenames, plan.segment_count())?;

        let default_dir = self.config.multi_dir_name.as_str();
        let dir_name = options.directory.as_deref().unwrap_or(default_dir);
        if dir_name.is_empty() {
            return Err(SplitError::invalid_filename(dir_name));
        }

        info!(
            "Splitting {} into {} documents",
            self.source.path().display(),
            plan.segment_count()
        );

        let output = OutputPlan::multi(self.source.parent_dir(), dir_name, default_dir, filenames);
        self.write_segments(&plan, &output)?;

        Ok(output.into())
    }

    /// Create the output directory and write one file per segment.
    fn write_segments(&self, plan: &SplitPlan, output: &OutputPlan) -> Result<()> {
        self.check_source_not_replaced(output)?;
        std::fs::create_dir_all(output.directory())?;

        for (range, path) in plan.segments().zip(output.paths()) {
            let mut doc = self.extractor.extract(self.source, range.clone())?;
            self.writer.write(&mut doc, &path)?;
            debug!(
                "Pages {}-{} -> {}",
                range.start + 1,
                range.end,
                path.display()
            );
        }

        info!(
            "Wrote {} documents to {}",
            plan.segment_count(),
            output.directory().display()
        );
        Ok(())
    }

    /// Reject a plan that would write over the source document, however the
    /// output directory was spelled.
    fn check_source_not_replaced(&self, output: &OutputPlan) -> Result<()> {
        let source = std::fs::canonicalize(self.source.path())?;
        for path in output.paths() {
            if path.exists() && std::fs::canonicalize(&path)? == source {
                return Err(SplitError::OverwritesSource { path });
            }
        }
        Ok(())
    }
}
