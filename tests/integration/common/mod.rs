//! Shared fixtures for integration tests.
//!
//! Source documents are generated with lopdf rather than checked in. Every
//! page carries a `PageMarker` entry holding its original 1-indexed page
//! number, so tests can tell which pages ended up in which output.

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Write a `pages`-page PDF named `name` into `dir`.
pub fn write_fixture(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");

    let catalog_id = doc.new_object_id();
    let pages_id = doc.new_object_id();

    let page_ids: Vec<Object> = (1..=pages)
        .map(|n| {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "PageMarker" => n as i64,
            };
            doc.add_object(page).into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => pages as i64,
        }
        .into(),
    );
    doc.objects.insert(
        catalog_id,
        dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }
        .into(),
    );
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// Original page numbers of the pages in the PDF at `path`, in order.
pub fn page_markers(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load output PDF");
    doc.get_pages()
        .into_values()
        .map(|id| {
            doc.get_dictionary(id)
                .and_then(|page| page.get(b"PageMarker"))
                .and_then(Object::as_i64)
                .expect("Page without marker")
        })
        .collect()
}

/// Number of pages in the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path)
        .expect("Failed to load output PDF")
        .get_pages()
        .len()
}

/// Names of all PDF files directly inside `dir`, sorted.
pub fn list_pdfs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".pdf"))
        .collect();
    names.sort();
    names
}

/// Names of all directories directly inside `dir`, sorted.
pub fn list_dirs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
