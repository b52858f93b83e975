//! The spreadsheet package façade.
//!
//! [`SpreadsheetPackage`] opens an OPC container over a ZIP archive,
//! verifies that it is a spreadsheet document, and resolves the workbook's
//! sheet declarations to their worksheet parts through the package
//! relationship graph.

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::decode;
use crate::error::{Error, Result};
use crate::rels::Relationships;
use crate::workbook::{Sheet, Workbook};
use crate::worksheet::Worksheet;

/// Package-level relationships part, fixed by the container conventions.
const ROOT_RELS: &str = "_rels/.rels";
/// Relationship id the root part must assign to the workbook.
const WORKBOOK_REL_ID: &str = "rId1";
/// The workbook part every spreadsheet package carries.
const WORKBOOK_PART: &str = "xl/workbook.xml";
/// Relationships of the workbook part, mapping sheet rel ids to targets.
const WORKBOOK_RELS: &str = "xl/_rels/workbook.xml.rels";
/// Worksheet targets are relative to this directory.
const WORKSHEET_ROOT: &str = "xl";

/// The underlying archive, tagged by ownership.
///
/// `OwnedFile` holds a file handle the package is responsible for
/// releasing; `BorrowedBytes` reads from caller-owned memory and has no
/// closing responsibility.
enum PackageArchive<'a> {
    OwnedFile(ZipArchive<BufReader<File>>),
    BorrowedBytes(ZipArchive<Cursor<&'a [u8]>>),
}

impl PackageArchive<'_> {
    fn read_part(&mut self, part: &str) -> Result<String> {
        match self {
            PackageArchive::OwnedFile(archive) => read_part_from(archive, part),
            PackageArchive::BorrowedBytes(archive) => read_part_from(archive, part),
        }
    }
}

fn read_part_from<R: Read + Seek>(archive: &mut ZipArchive<R>, part: &str) -> Result<String> {
    let mut entry = match archive.by_name(part) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(Error::MissingPart(part.to_string())),
        Err(err) => return Err(err.into()),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    // A leading BOM upsets the XML decoder.
    if let Some(stripped) = xml.strip_prefix('\u{feff}') {
        return Ok(stripped.to_string());
    }
    Ok(xml)
}

/// Join a target path onto a root directory with package path semantics:
/// a leading `/` makes the target package-absolute, and `.`/`..` segments
/// are normalized.
fn join_part_path(root: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = root.split('/').collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// An opened, read-only spreadsheet package.
///
/// Opening verifies the document type; every query performs fresh I/O
/// against the archive, so results always reflect the underlying bytes.
/// The package is single-threaded: queries borrow the archive handle
/// mutably through a [`RefCell`].
///
/// # Example
///
/// ```no_run
/// use sheetpack::SpreadsheetPackage;
///
/// let package = SpreadsheetPackage::open("inventory.xlsx")?;
/// for sheet in package.sheets()? {
///     println!("{} -> {}", sheet.name, sheet.target);
/// }
/// let dogs = package.worksheet("dogs")?;
/// for row in dogs.rows() {
///     let values: Vec<&str> = row.cells.iter().map(|c| c.value.as_str()).collect();
///     println!("{}", values.join(", "));
/// }
/// package.close()?;
/// # Ok::<(), sheetpack::Error>(())
/// ```
pub struct SpreadsheetPackage<'a> {
    archive: RefCell<PackageArchive<'a>>,
}

impl SpreadsheetPackage<'static> {
    /// Open the spreadsheet package at `path`.
    ///
    /// Fails with [`Error::Io`] or [`Error::Zip`] when the path cannot be
    /// opened as an archive, and with [`Error::NotSpreadsheet`] when the
    /// archive is some other OPC document (a word-processing package, for
    /// example). On failure the file handle is released.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        Self::from_archive(PackageArchive::OwnedFile(archive))
    }
}

impl<'a> SpreadsheetPackage<'a> {
    /// Open a spreadsheet package held in memory.
    ///
    /// Same contract as [`SpreadsheetPackage::open`], but over a borrowed
    /// byte source. Closing a package opened this way is a no-op.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Self::from_archive(PackageArchive::BorrowedBytes(archive))
    }

    fn from_archive(mut archive: PackageArchive<'a>) -> Result<Self> {
        verify_spreadsheet(&mut archive)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// The declared sheets, in workbook document order, each with its
    /// worksheet part target resolved through the workbook relationships.
    ///
    /// A declaration whose relationship id has no match keeps an empty
    /// target; the mismatch only surfaces when the sheet is read.
    pub fn sheets(&self) -> Result<Vec<Sheet>> {
        let mut archive = self.archive.borrow_mut();

        let workbook_xml = archive.read_part(WORKBOOK_PART)?;
        let workbook: Workbook = decode::from_xml(WORKBOOK_PART, &workbook_xml)?;

        let rels_xml = archive.read_part(WORKBOOK_RELS)?;
        let rels: Relationships = decode::from_xml(WORKBOOK_RELS, &rels_xml)?;

        let mut sheets = workbook.sheets.entries;
        for sheet in &mut sheets {
            if let Some(rel) = rels.get(&sheet.rel_id) {
                sheet.target = rel.target.clone();
            }
        }

        Ok(sheets)
    }

    /// The declared sheet names, in workbook document order.
    pub fn sheet_names(&self) -> Result<Vec<String>> {
        Ok(self.sheets()?.into_iter().map(|s| s.name).collect())
    }

    /// Read the worksheet declared under `name` (exact match, first match
    /// wins on duplicates).
    ///
    /// Fails with [`Error::SheetNotFound`] when no declaration matches and
    /// with [`Error::MissingRelationship`] when the declaration resolves to
    /// no worksheet part. The content is decoded fresh on every call.
    pub fn worksheet(&self, name: &str) -> Result<Worksheet> {
        let sheets = self.sheets()?;
        let sheet = sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;

        if sheet.target.is_empty() {
            return Err(Error::MissingRelationship(name.to_string()));
        }

        let part = join_part_path(WORKSHEET_ROOT, &sheet.target);
        let xml = self.archive.borrow_mut().read_part(&part)?;
        decode::from_xml(&format!("worksheet '{name}'"), &xml)
    }

    /// Release the underlying archive.
    ///
    /// For a package opened from borrowed bytes there is nothing to
    /// release and this is a guaranteed no-op; it may still be called
    /// unconditionally for uniform resource scoping. Consuming `self`
    /// makes the open/closed transition one-way.
    pub fn close(self) -> Result<()> {
        match self.archive.into_inner() {
            PackageArchive::OwnedFile(archive) => {
                drop(archive);
                Ok(())
            }
            PackageArchive::BorrowedBytes(_) => Ok(()),
        }
    }

    /// Like [`SpreadsheetPackage::close`] but panics on failure. Mainly
    /// useful in tests and teardown paths where a close failure is
    /// unexpected.
    pub fn must_close(self) {
        if let Err(err) = self.close() {
            panic!("closing spreadsheet package: {err}");
        }
    }
}

/// A package is a spreadsheet iff its root relationships assign `rId1`
/// the workbook part. Any other OPC document fails this single check; no
/// file extensions or further content are inspected.
fn verify_spreadsheet(archive: &mut PackageArchive<'_>) -> Result<()> {
    let target = archive
        .read_part(ROOT_RELS)
        .ok()
        .and_then(|xml| decode::from_xml::<Relationships>(ROOT_RELS, &xml).ok())
        .and_then(|rels| rels.get(WORKBOOK_REL_ID).map(|rel| rel.target.clone()));

    match target.as_deref() {
        Some(WORKBOOK_PART) => Ok(()),
        _ => Err(Error::NotSpreadsheet),
    }
}

impl std::fmt::Debug for SpreadsheetPackage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match *self.archive.borrow() {
            PackageArchive::OwnedFile(_) => "file",
            PackageArchive::BorrowedBytes(_) => "bytes",
        };
        f.debug_struct("SpreadsheetPackage")
            .field("source", &mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_part_path() {
        assert_eq!(
            join_part_path("xl", "worksheets/sheet2.xml"),
            "xl/worksheets/sheet2.xml"
        );
        assert_eq!(
            join_part_path("xl", "./worksheets/sheet1.xml"),
            "xl/worksheets/sheet1.xml"
        );
        assert_eq!(join_part_path("xl", "../sharedStrings.xml"), "sharedStrings.xml");
        assert_eq!(
            join_part_path("xl", "/xl/worksheets/sheet1.xml"),
            "xl/worksheets/sheet1.xml"
        );
    }
}
