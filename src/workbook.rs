//! The workbook part.
//!
//! `xl/workbook.xml` declares the package's sheets in document order. Each
//! declaration carries a relationship id rather than a path; the physical
//! worksheet part is resolved through `xl/_rels/workbook.xml.rels`.

use serde::Deserialize;

/// The decoded workbook part.
#[derive(Debug, Deserialize)]
#[serde(rename = "workbook")]
pub struct Workbook {
    #[serde(default)]
    pub sheets: SheetList,
}

/// The `<sheets>` container of the workbook part.
#[derive(Debug, Default, Deserialize)]
pub struct SheetList {
    #[serde(rename = "sheet", default)]
    pub entries: Vec<Sheet>,
}

/// One declared sheet.
///
/// Document order of the declarations is the authoritative sheet order:
/// "third sheet" means the third entry here, regardless of names or ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sheet {
    /// Display name, as shown on the sheet tab.
    #[serde(rename = "@name")]
    pub name: String,
    /// Numeric sheet id declared in the workbook.
    #[serde(rename = "@sheetId")]
    pub sheet_id: u32,
    /// Relationship id linking the declaration to its worksheet part.
    #[serde(rename = "@id")]
    pub rel_id: String,
    /// Package path of the worksheet part, relative to the `xl` directory.
    /// Empty until resolved against the workbook relationships.
    #[serde(skip)]
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use crate::error::Error;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"
          xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="cats" sheetId="1" r:id="rId1"/>
    <sheet name="dogs" sheetId="2" r:id="rId2"/>
    <sheet name="birds" sheetId="3" r:id="rId3"/>
  </sheets>
</workbook>"#;

    #[test]
    fn test_sheets_in_document_order() {
        let wb: Workbook = decode::from_xml("xl/workbook.xml", WORKBOOK).unwrap();
        let names: Vec<&str> = wb.sheets.entries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["cats", "dogs", "birds"]);
    }

    #[test]
    fn test_sheet_fields() {
        let wb: Workbook = decode::from_xml("xl/workbook.xml", WORKBOOK).unwrap();
        let dogs = &wb.sheets.entries[1];
        assert_eq!(dogs.name, "dogs");
        assert_eq!(dogs.sheet_id, 2);
        assert_eq!(dogs.rel_id, "rId2");
        assert!(dogs.target.is_empty());
    }

    #[test]
    fn test_empty_sheet_list() {
        let wb: Workbook =
            decode::from_xml("xl/workbook.xml", "<workbook><sheets/></workbook>").unwrap();
        assert!(wb.sheets.entries.is_empty());
    }

    #[test]
    fn test_malformed_markup_fails() {
        let err = decode::from_xml::<Workbook>("xl/workbook.xml", "<workbook><sheets>").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
