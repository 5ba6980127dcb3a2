//! Extraction statistics.

use serde::{Deserialize, Serialize};

use crate::model::{ContentElement, Document};

/// Statistics about a reconstructed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of pages processed
    pub page_count: usize,

    /// Number of text elements after merging
    pub text_count: usize,

    /// Number of table elements after merging
    pub table_count: usize,

    /// Total table rows
    pub row_count: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// Character count (excluding whitespace)
    pub char_count: usize,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document reconstructed from `page_count` pages.
    pub fn from_document(doc: &Document, page_count: usize) -> Self {
        let mut stats = Self {
            page_count,
            ..Self::default()
        };

        for element in doc {
            match element {
                ContentElement::Text(text) => {
                    stats.text_count = stats.text_count.saturating_add(1);
                    stats.count_text(text);
                }
                ContentElement::Table(rows) => {
                    stats.table_count = stats.table_count.saturating_add(1);
                    stats.row_count = stats.row_count.saturating_add(rows.len());
                    for cell in rows.iter().flatten() {
                        stats.count_text(cell);
                    }
                }
            }
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        let words = text.split_whitespace().count();
        let chars = text.chars().filter(|c| !c.is_whitespace()).count();
        self.word_count = self.word_count.saturating_add(words);
        self.char_count = self.char_count.saturating_add(chars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_stats_count_text() {
        let mut stats = ExtractionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_document() {
        let doc = Document::from_elements(vec![
            ContentElement::text("two words"),
            ContentElement::table([["a", "b"], ["c", "d"]]),
        ]);
        let stats = ExtractionStats::from_document(&doc, 3);

        assert_eq!(stats.page_count, 3);
        assert_eq!(stats.text_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.row_count, 2);
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 12);
    }

    #[test]
    fn test_counts_saturate() {
        let mut stats = ExtractionStats {
            word_count: usize::MAX - 1,
            char_count: usize::MAX,
            ..ExtractionStats::default()
        };
        stats.count_text("three more words");

        assert_eq!(stats.word_count, usize::MAX);
        assert_eq!(stats.char_count, usize::MAX);

        let doc = Document::from_elements(vec![ContentElement::text("x")]);
        let large = usize::MAX;
        assert_eq!(ExtractionStats::from_document(&doc, large).page_count, large);
    }
}
