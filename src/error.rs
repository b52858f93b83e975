//! Error types for the sheetpack library.

use std::io;
use thiserror::Error;

/// Result type alias for sheetpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a spreadsheet package.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the archive or one of its parts.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte source is not a readable ZIP archive.
    #[error("ZIP archive error: {0}")]
    Zip(String),

    /// The archive is a valid OPC package but not a spreadsheet document.
    #[error("not a spreadsheet package")]
    NotSpreadsheet,

    /// A required package part is absent from the archive.
    #[error("missing package part: {0}")]
    MissingPart(String),

    /// A part exists but its content does not match the expected schema.
    #[error("decoding {part}: {source}")]
    Decode {
        /// The package part (or sheet) whose content failed to decode.
        part: String,
        #[source]
        source: quick_xml::DeError,
    },

    /// No sheet with the requested name is declared in the workbook.
    #[error("sheet not available: {0}")]
    SheetNotFound(String),

    /// A declared sheet has no matching worksheet relationship.
    #[error("relationship not available for sheet '{0}'")]
    MissingRelationship(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotSpreadsheet;
        assert_eq!(err.to_string(), "not a spreadsheet package");

        let err = Error::SheetNotFound("dogs".to_string());
        assert_eq!(err.to_string(), "sheet not available: dogs");

        let err = Error::MissingPart("xl/workbook.xml".to_string());
        assert_eq!(err.to_string(), "missing package part: xl/workbook.xml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
