//! # sheetpack
//!
//! Reader for OPC spreadsheet packages: sheet names and raw cell values.
//!
//! This library opens the ZIP-based Open Packaging Conventions container
//! used by modern spreadsheet documents, verifies the package really is a
//! spreadsheet (and not some other OPC format such as a word-processing
//! document), and resolves each declared sheet to its worksheet part
//! through the package relationship graph. Cell values are returned as the
//! raw strings stored in the worksheet parts — shared-string indices are
//! not resolved, formulas are not evaluated, and nothing is ever written.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetpack::SpreadsheetPackage;
//!
//! let package = SpreadsheetPackage::open("animals.xlsx")?;
//!
//! for sheet in package.sheets()? {
//!     println!("sheet {}: {}", sheet.sheet_id, sheet.name);
//! }
//!
//! let dogs = package.worksheet("dogs")?;
//! for row in dogs.rows() {
//!     for cell in &row.cells {
//!         print!("{}\t", cell.value);
//!     }
//!     println!();
//! }
//!
//! package.close()?;
//! # Ok::<(), sheetpack::Error>(())
//! ```
//!
//! ## In-memory packages
//!
//! ```no_run
//! use sheetpack::SpreadsheetPackage;
//!
//! let data = std::fs::read("animals.xlsx")?;
//! let package = SpreadsheetPackage::from_bytes(&data)?;
//! let names = package.sheet_names()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod container;
pub mod error;
pub mod rels;
pub mod workbook;
pub mod worksheet;

mod decode;

// Re-exports
pub use container::SpreadsheetPackage;
pub use error::{Error, Result};
pub use rels::{Relationship, Relationships};
pub use workbook::Sheet;
pub use worksheet::{Cell, Row, Worksheet};
