//! I/O operations for pdfsplit.
//!
//! This module handles all file I/O operations:
//! - Opening and validating the source document
//! - Writing segment documents to disk
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::io::{PdfDocument, PdfWriter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = PdfDocument::open("input.pdf")?;
//! println!("{} pages", source.page_count());
//!
//! let mut copy = source.document().clone();
//! PdfWriter::new().write(&mut copy, "copy.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::PdfDocument;
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
