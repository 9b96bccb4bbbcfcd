//! Integration tests for splitting into any number of documents.

use pdfsplit::{MultiSplitOptions, PdfDocument, Splitter};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{list_dirs, list_pdfs, page_count, page_markers, write_fixture};

#[test]
fn test_twenty_page_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 20)).unwrap();

    let output = Splitter::new(&source)
        .multi_split(&[3, 8, 10], &MultiSplitOptions::new())
        .unwrap();

    assert_eq!(output.directory, temp_dir.path().join("Multi Split PDFs"));
    assert_eq!(
        output.filenames,
        ["part_1.pdf", "part_2.pdf", "part_3.pdf", "part_4.pdf"]
    );

    let paths = output.paths();
    assert_eq!(page_markers(&paths[0]), vec![1, 2]);
    assert_eq!(page_markers(&paths[1]), vec![3, 4, 5, 6, 7]);
    assert_eq!(page_markers(&paths[2]), vec![8, 9]);
    assert_eq!(page_markers(&paths[3]), (10..=20).collect::<Vec<i64>>());

    let counts: Vec<usize> = paths.iter().map(|p| page_count(p)).collect();
    assert_eq!(counts, vec![2, 5, 2, 11]);
}

#[rstest]
#[case(&[2])]
#[case(&[9])]
#[case(&[4, 7])]
#[case(&[2, 3, 4, 5, 6, 7, 8, 9])]
fn test_page_counts_sum_to_source(#[case] points: &[u32]) {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();

    let output = Splitter::new(&source)
        .multi_split(points, &MultiSplitOptions::new())
        .unwrap();

    assert_eq!(output.filenames.len(), points.len() + 1);
    let total: usize = output.paths().iter().map(|p| page_count(p)).sum();
    assert_eq!(total, 10);
}

#[test]
fn test_unsorted_points() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();

    let output = Splitter::new(&source)
        .multi_split(&[7, 3], &MultiSplitOptions::new())
        .unwrap();

    let markers: Vec<Vec<i64>> = output.paths().iter().map(|p| page_markers(p)).collect();
    assert_eq!(markers, vec![vec![1, 2], vec![3, 4, 5, 6], vec![7, 8, 9, 10]]);
}

#[test]
fn test_partial_filenames_are_completed() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();

    let options = MultiSplitOptions::new().with_filenames(["intro", "middle.pdf"]);
    let output = Splitter::new(&source)
        .multi_split(&[3, 5, 8], &options)
        .unwrap();

    assert_eq!(
        output.filenames,
        ["intro.pdf", "middle.pdf", "part_3.pdf", "part_4.pdf"]
    );
    assert_eq!(
        list_pdfs(&output.directory),
        ["intro.pdf", "middle.pdf", "part_3.pdf", "part_4.pdf"]
    );
}

#[test]
fn test_default_directory_is_numbered() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();
    let splitter = Splitter::new(&source);

    let first = splitter.multi_split(&[5], &MultiSplitOptions::new()).unwrap();
    let second = splitter.multi_split(&[6], &MultiSplitOptions::new()).unwrap();
    let third = splitter.multi_split(&[7], &MultiSplitOptions::new()).unwrap();

    assert_eq!(first.directory, temp_dir.path().join("Multi Split PDFs"));
    assert_eq!(second.directory, temp_dir.path().join("Multi Split PDFs (1)"));
    assert_eq!(third.directory, temp_dir.path().join("Multi Split PDFs (2)"));

    // Earlier output survives.
    assert_eq!(page_markers(&first.paths()[1]), vec![5, 6, 7, 8, 9, 10]);
    assert_eq!(
        list_dirs(temp_dir.path()),
        ["Multi Split PDFs", "Multi Split PDFs (1)", "Multi Split PDFs (2)"]
    );
}

#[test]
fn test_explicit_default_name_is_still_numbered() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();
    std::fs::create_dir(temp_dir.path().join("Multi Split PDFs")).unwrap();

    let options = MultiSplitOptions::new().with_directory("Multi Split PDFs");
    let output = Splitter::new(&source).multi_split(&[5], &options).unwrap();

    assert_eq!(output.directory, temp_dir.path().join("Multi Split PDFs (1)"));
}

#[test]
fn test_named_directory_is_reused() {
    let temp_dir = TempDir::new().unwrap();
    let source = PdfDocument::open(write_fixture(temp_dir.path(), "source.pdf", 10)).unwrap();
    let splitter = Splitter::new(&source);

    let options = MultiSplitOptions::new().with_directory("Chapters");
    let first = splitter.multi_split(&[5], &options).unwrap();

    let options = options.with_filenames(["again"]);
    let second = splitter.multi_split(&[3], &options).unwrap();

    assert_eq!(first.directory, temp_dir.path().join("Chapters"));
    assert_eq!(second.directory, first.directory);

    // part_2.pdf was rewritten by the second split.
    assert_eq!(page_markers(&second.paths()[1]), (3..=10).collect::<Vec<i64>>());
    assert_eq!(
        list_pdfs(&first.directory),
        ["again.pdf", "part_1.pdf", "part_2.pdf"]
    );
    assert_eq!(list_dirs(temp_dir.path()), ["Chapters"]);
}
