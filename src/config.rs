//! Configuration for split operations.
//!
//! [`SplitConfig`] carries the defaults a [`Splitter`](crate::Splitter)
//! applies when the caller does not say otherwise:
//! - Output directory names for single and multi splits
//! - Default filenames of a single split
//! - How output documents are serialized
//!
//! Configurations can be built in code or read from JSON; missing JSON fields
//! take their default values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SplitError};
use crate::io::WriteOptions;
use crate::utils;

/// Directory a single split writes into.
pub const DEFAULT_SINGLE_DIR: &str = "Split PDFs";

/// Directory a multi split writes into when no name is given. Only this name
/// is disambiguated with a ` (n)` suffix when it already exists.
pub const DEFAULT_MULTI_DIR: &str = "Multi Split PDFs";

/// Names of the two documents produced by a single split.
pub const DEFAULT_SINGLE_FILENAMES: [&str; 2] = ["part_1.pdf", "part_2.pdf"];

/// Defaults applied by a splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitConfig {
    /// Directory name (next to the source) for single splits.
    pub single_dir_name: String,

    /// Default directory name (next to the source) for multi splits.
    pub multi_dir_name: String,

    /// Filenames used by a single split when none are given.
    pub single_filenames: [String; 2],

    /// Serialization options for output documents.
    pub write: WriteOptions,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            single_dir_name: DEFAULT_SINGLE_DIR.to_string(),
            multi_dir_name: DEFAULT_MULTI_DIR.to_string(),
            single_filenames: DEFAULT_SINGLE_FILENAMES.map(String::from),
            write: WriteOptions::default(),
        }
    }
}

impl SplitConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if the JSON is malformed or the
    /// resulting configuration fails [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::config::SplitConfig;
    ///
    /// let config = SplitConfig::from_json(r#"{ "multiDirName": "Chapters" }"#).unwrap();
    /// assert_eq!(config.multi_dir_name, "Chapters");
    /// assert_eq!(config.single_dir_name, "Split PDFs");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SplitError::invalid_config(format!("Malformed JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::FileNotFound`] if the file is missing, and the
    /// errors of [`from_json`](Self::from_json) otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.try_exists()? {
            return Err(SplitError::file_not_found(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::invalid_config(format!("Cannot serialize: {e}")))
    }

    /// Check the configuration for values a split cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if:
    /// - A directory name is empty or spans more than one path component
    /// - A single-split filename is not a plain file name
    /// - Both single-split filenames resolve to the same file
    /// - The write buffer size is zero
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("singleDirName", &self.single_dir_name),
            ("multiDirName", &self.multi_dir_name),
        ] {
            if !utils::is_plain_file_name(name) {
                return Err(SplitError::invalid_config(format!(
                    "{field} must be a single directory name, got '{name}'"
                )));
            }
        }

        let mut seen = HashSet::new();
        for name in &self.single_filenames {
            if !utils::is_plain_file_name(name) {
                return Err(SplitError::invalid_config(format!(
                    "singleFilenames contains an invalid name: '{name}'"
                )));
            }
            if !seen.insert(utils::ensure_pdf_extension(name)) {
                return Err(SplitError::invalid_config(format!(
                    "singleFilenames contains '{name}' twice"
                )));
            }
        }

        if self.write.buffer_size == 0 {
            return Err(SplitError::invalid_config(
                "write.bufferSize must be greater than zero",
            ));
        }

        Ok(())
    }
}
