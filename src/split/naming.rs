//! Output filenames and directories.
//!
//! Two collision rules apply and they are deliberately different:
//! - A single split always writes into the same directory and avoids
//!   clobbering earlier output by numbering the files: `part_1(1).pdf`.
//! - A multi split into the default directory numbers the directory instead:
//!   `Multi Split PDFs (1)`. Any other directory is reused as is.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::utils::{self, ensure_pdf_extension, with_counter};

/// Where each segment of a split is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    directory: PathBuf,
    filenames: Vec<String>,
}

impl OutputPlan {
    /// Resolve the output of a single split into `parent/dir_name`.
    ///
    /// When the directory already exists, both names get the smallest `(n)`
    /// suffix for which neither file exists yet.
    pub fn single(parent: &Path, dir_name: &str, filenames: [String; 2]) -> Self {
        let directory = parent.join(dir_name);
        let [mut first, mut second] = filenames;

        if directory.exists() {
            let [base_first, base_second] = [first.clone(), second.clone()];
            let mut n = 1;
            while directory.join(&first).exists() || directory.join(&second).exists() {
                first = with_counter(&base_first, n);
                second = with_counter(&base_second, n);
                n += 1;
            }
            debug!("Resolved single split names to {first}, {second}");
        }

        Self {
            directory,
            filenames: vec![first, second],
        }
    }

    /// Resolve the output of a multi split.
    ///
    /// `dir_name` is resolved relative to `parent` unless absolute. When its
    /// last component is `default_dir_name` (`"Multi Split PDFs"` or
    /// `"sub/Multi Split PDFs"`), an existing directory is avoided by
    /// numbering that component `"<default> (n)"`. Any other directory is
    /// used verbatim.
    pub fn multi(
        parent: &Path,
        dir_name: &str,
        default_dir_name: &str,
        filenames: Vec<String>,
    ) -> Self {
        let mut directory = parent.join(dir_name);

        if directory.file_name() == Some(OsStr::new(default_dir_name)) {
            let mut n = 1;
            while directory.exists() {
                directory = directory.with_file_name(format!("{default_dir_name} ({n})"));
                n += 1;
            }
            debug!("Resolved multi split directory to {}", directory.display());
        }

        Self {
            directory,
            filenames,
        }
    }

    /// Directory the files go into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// One filename per segment, in segment order.
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Full path of every output file, in segment order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.filenames
            .iter()
            .map(|name| self.directory.join(name))
            .collect()
    }

    /// Split into directory and filenames.
    pub fn into_parts(self) -> (PathBuf, Vec<String>) {
        (self.directory, self.filenames)
    }
}

/// Append `.pdf` to `name` if missing.
///
/// # Errors
///
/// Returns [`SplitError::InvalidFilename`] unless `name` is a plain file name
/// (non-empty, no directory parts).
pub fn normalize_filename(name: &str) -> Result<String> {
    if utils::is_plain_file_name(name) {
        Ok(ensure_pdf_extension(name))
    } else {
        Err(SplitError::invalid_filename(name))
    }
}

/// Normalize caller-supplied filenames: append `.pdf` where missing and
/// reject names that are not plain file names or that repeat.
pub fn normalize_filenames<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    let normalized = names
        .iter()
        .map(|name| normalize_filename(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    check_unique(&normalized)?;
    Ok(normalized)
}

/// Filenames for `segment_count` segments: the supplied names first, then
/// `part_<i>.pdf` (1-indexed position) for every segment left unnamed.
///
/// # Errors
///
/// - [`SplitError::TooManyFilenames`] if more names than segments are given
/// - [`SplitError::InvalidFilename`] / [`SplitError::DuplicateFilename`] as in
///   [`normalize_filenames`]
///
/// # Examples
///
/// ```
/// use pdfsplit::split::naming::fill_filenames;
///
/// let names = fill_filenames(&["intro", "body.pdf"], 4).unwrap();
/// assert_eq!(names, ["intro.pdf", "body.pdf", "part_3.pdf", "part_4.pdf"]);
/// ```
pub fn fill_filenames<S: AsRef<str>>(supplied: &[S], segment_count: usize) -> Result<Vec<String>> {
    if supplied.len() > segment_count {
        return Err(SplitError::TooManyFilenames {
            given: supplied.len(),
            segments: segment_count,
        });
    }

    let mut names: Vec<String> = supplied.iter().map(|s| s.as_ref().to_string()).collect();
    names.extend((supplied.len() + 1..=segment_count).map(|i| format!("part_{i}.pdf")));

    normalize_filenames(&names)
}

/// Reject the first name that appears twice with
/// [`SplitError::DuplicateFilename`].
pub fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(SplitError::DuplicateFilename { name: name.clone() });
        }
    }
    Ok(())
}
