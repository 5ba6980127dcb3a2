//! Document-level types.

use super::ContentElement;
use serde::{Deserialize, Deserializer, Serialize};

/// The reconstructed document: content elements in reading order.
///
/// Produced by the cross-page merger, so no two adjacent elements share a
/// tag and text elements are never empty. Serializes as a bare JSON array.
/// Deserializing or converting from a plain element list re-establishes both
/// properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<ContentElement>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_elements(elements: Vec<ContentElement>) -> Self {
        Self { elements }
    }

    /// Elements in reading order.
    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Consume the document, returning its elements.
    pub fn into_elements(self) -> Vec<ContentElement> {
        self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of table elements.
    pub fn table_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_table()).count()
    }

    /// Iterate over elements.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentElement> {
        self.elements.iter()
    }

    /// Apply `f` to every text run and every table cell.
    pub fn map_text<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for element in &mut self.elements {
            match element {
                ContentElement::Text(text) => *text = f(text),
                ContentElement::Table(rows) => {
                    for cell in rows.iter_mut().flat_map(|row| row.iter_mut()) {
                        *cell = f(cell);
                    }
                }
            }
        }
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|element| element.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<ContentElement>> for Document {
    /// Drop blank text and merge adjacent same-kind elements.
    fn from(elements: Vec<ContentElement>) -> Self {
        let kept = elements
            .into_iter()
            .filter(|element| !matches!(element, ContentElement::Text(text) if text.trim().is_empty()));
        crate::parser::merge_pages(std::iter::once(kept))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<ContentElement>::deserialize(deserializer).map(Document::from)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ContentElement;
    type IntoIter = std::slice::Iter<'a, ContentElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_elements(vec![
            ContentElement::text("Intro"),
            ContentElement::table([vec!["a", "b"], vec!["c", "d"]]),
            ContentElement::text("End"),
        ])
    }

    #[test]
    fn test_document_accessors() {
        let doc = sample();
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert_eq!(doc.table_count(), 1);
        assert!(Document::new().is_empty());
    }

    #[test]
    fn test_document_serializes_as_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"Text":"Intro"},{"Table":[["a","b"],["c","d"]]},{"Text":"End"}]"#
        );
    }

    #[test]
    fn test_map_text_reaches_cells() {
        let mut doc = sample();
        doc.map_text(|s| s.to_uppercase());

        assert_eq!(doc.elements()[0].as_text(), Some("INTRO"));
        assert_eq!(doc.elements()[1].as_table().unwrap()[1][0], "C");
    }

    #[test]
    fn test_deserialize_restores_invariants() {
        let doc: Document = serde_json::from_str(
            r#"[{"Text":"a"},{"Text":"b"},{"Text":"  "},{"Table":[]},{"Table":[["x"]]}]"#,
        )
        .unwrap();

        assert_eq!(
            doc.elements(),
            &[ContentElement::text("a b"), ContentElement::table([["x"]])]
        );
        for pair in doc.elements().windows(2) {
            assert!(!pair[0].same_kind(&pair[1]));
        }
    }

    #[test]
    fn test_from_elements_list() {
        let doc = Document::from(vec![
            ContentElement::text(""),
            ContentElement::table([["1"]]),
            ContentElement::text("tail"),
            ContentElement::text("end"),
        ]);
        assert_eq!(
            doc.elements(),
            &[ContentElement::table([["1"]]), ContentElement::text("tail end")]
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(sample().plain_text(), "Intro\n\na\tb\nc\td\n\nEnd");
    }
}
