//! Content element types.

use serde::{Deserialize, Serialize};

/// A table as rows of cell strings.
pub type Grid = Vec<Vec<String>>;

/// A typed unit of document content.
///
/// Serializes externally tagged: `{"Text": "..."}` or `{"Table": [["..."]]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentElement {
    /// Running text
    Text(String),
    /// A table grid
    Table(Grid),
}

impl ContentElement {
    /// Create a text element.
    pub fn text(text: impl Into<String>) -> Self {
        ContentElement::Text(text.into())
    }

    /// Create a table element from rows of string-like cells.
    pub fn table<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentElement::Table(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Check if this is a text element.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentElement::Text(_))
    }

    /// Check if this is a table element.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentElement::Table(_))
    }

    /// True when both elements carry the same tag.
    pub fn same_kind(&self, other: &ContentElement) -> bool {
        self.is_text() == other.is_text()
    }

    /// Text content, if this is a text element.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentElement::Text(text) => Some(text),
            ContentElement::Table(_) => None,
        }
    }

    /// Table rows, if this is a table element.
    pub fn as_table(&self) -> Option<&Grid> {
        match self {
            ContentElement::Table(rows) => Some(rows),
            ContentElement::Text(_) => None,
        }
    }

    /// Get plain text representation. Table rows are tab-separated lines.
    pub fn plain_text(&self) -> String {
        match self {
            ContentElement::Text(text) => text.clone(),
            ContentElement::Table(rows) => rows
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
