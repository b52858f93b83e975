//! OPC relationship parts.
//!
//! A `.rels` part is a flat list of `(id, type, target)` triples. The
//! workbook uses them to point each declared sheet at the physical part
//! holding its data, and the package root uses them to identify the
//! document type.

use serde::Deserialize;

/// A single relationship entry from a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    #[serde(rename = "@Id")]
    pub id: String,
    /// Relationship type URI
    #[serde(rename = "@Type")]
    pub rel_type: String,
    /// Target path, relative to the part that owns the `.rels` file
    #[serde(rename = "@Target")]
    pub target: String,
}

/// The ordered relationship list of one `.rels` part.
///
/// Ids are expected to be unique within a part; on duplicates the first
/// match wins. This is not validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Relationships")]
pub struct Relationships {
    #[serde(rename = "Relationship", default)]
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Look up a relationship by id. Linear scan; relationship lists are
    /// small (typically tens of entries).
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|rel| rel.id == id)
    }

    /// All relationships, in document order.
    pub fn entries(&self) -> &[Relationship] {
        &self.entries
    }
}
