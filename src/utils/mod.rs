//! Small helpers for file names and sizes.

use std::path::{Component, Path};

/// Extension every input and output document carries.
pub const PDF_EXTENSION: &str = "pdf";

const PDF_SUFFIX: &str = ".pdf";

/// Check whether a path has the `pdf` extension (case-sensitive).
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PDF_EXTENSION)
}

/// Append `.pdf` unless the name already ends with it.
///
/// # Examples
///
/// ```
/// use pdfsplit::utils::ensure_pdf_extension;
///
/// assert_eq!(ensure_pdf_extension("intro"), "intro.pdf");
/// assert_eq!(ensure_pdf_extension("intro.pdf"), "intro.pdf");
/// ```
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.ends_with(PDF_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{PDF_SUFFIX}")
    }
}

/// Insert `(n)` right before the `.pdf` suffix, so `part_1.pdf` becomes
/// `part_1(2).pdf` for `n = 2`.
pub fn with_counter(name: &str, n: u32) -> String {
    let stem = name.strip_suffix(PDF_SUFFIX).unwrap_or(name);
    format!("{stem}({n}){PDF_SUFFIX}")
}

/// True if `name` is a single, plain path component usable as a file or
/// directory name inside another directory.
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
