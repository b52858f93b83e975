//! Generic XML part decoding.
//!
//! Every part schema in the package (relationships, workbook, worksheet) is a
//! plain `#[derive(Deserialize)]` struct; this module is the single place
//! where bytes meet those schemas.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode one XML part into its schema type.
///
/// `part` names the part (or sheet) being decoded and is carried into the
/// error so callers can tell which part of the package was malformed.
pub(crate) fn from_xml<T: DeserializeOwned>(part: &str, xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(|source| Error::Decode {
        part: part.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Pair {
        #[serde(rename = "@a")]
        a: String,
        b: String,
    }

    #[test]
    fn test_decodes_attributes_and_elements() {
        let pair: Pair = from_xml("pair", r#"<pair a="x"><b>y</b></pair>"#).unwrap();
        assert_eq!(pair.a, "x");
        assert_eq!(pair.b, "y");
    }

    #[test]
    fn test_malformed_markup_names_the_part() {
        let err = from_xml::<Pair>("xl/workbook.xml", "<pair><broken").unwrap_err();
        match err {
            Error::Decode { part, .. } => assert_eq!(part, "xl/workbook.xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
