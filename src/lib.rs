//! pdfsplit - Split a PDF document into smaller documents.
//!
//! This library cuts one PDF into several at caller-chosen pages:
//!
//! - Single split: two documents, divided at one page
//! - Multi split: one document per segment between any number of pages
//! - Output directories and filenames that never overwrite earlier results
//! - Typed errors for every invalid request, raised before anything is written
//!
//! # Examples
//!
//! ## Single Split
//!
//! ```no_run
//! use pdfsplit::{PdfDocument, Splitter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = PdfDocument::open("lecture.pdf")?;
//!
//! // Page 5 becomes the first page of the second document.
//! let (first, second) = Splitter::new(&source).single_split(5)?;
//! println!("Wrote {} and {}", first.display(), second.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Multi Split
//!
//! ```no_run
//! use pdfsplit::{MultiSplitOptions, PdfDocument, Splitter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = PdfDocument::open("book.pdf")?;
//! let options = MultiSplitOptions::new()
//!     .with_filenames(["front-matter", "part-one"])
//!     .with_directory("Book Parts");
//!
//! let output = Splitter::new(&source).multi_split(&[3, 8, 10], &options)?;
//! for path in output.paths() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod split;
pub mod utils;


// Re-export commonly used types
pub use config::SplitConfig;
pub use error::{ErrorKind, Result, SplitError};
pub use io::PdfDocument;
pub use split::{MultiSplitOptions, SplitOutput, Splitter};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
