//! Cross-page merging.
//!
//! Paragraphs broken by a page break (or by a table splitting a page) and
//! tables continued on the next page come out of page assembly as separate
//! elements. The merger folds each run of same-kind elements into one.

use crate::model::{ContentElement, Document};

/// Running merge state.
///
/// Feed page lists in page order with [`Merger::push_page`], then call
/// [`Merger::finish`].
#[derive(Debug, Default)]
pub struct Merger {
    output: Vec<ContentElement>,
}

impl Merger {
    /// Create an empty merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one element into the running output.
    pub fn push(&mut self, element: ContentElement) {
        match (self.output.last_mut(), element) {
            (Some(ContentElement::Text(last)), ContentElement::Text(text)) => {
                last.push(' ');
                last.push_str(&text);
            }
            (Some(ContentElement::Table(last)), ContentElement::Table(rows)) => {
                last.extend(rows);
            }
            (_, element) => self.output.push(element),
        }
    }

    /// Merge the ordered elements of the next page.
    pub fn push_page(&mut self, elements: impl IntoIterator<Item = ContentElement>) {
        for element in elements {
            self.push(element);
        }
    }

    /// Finish merging and return the document.
    pub fn finish(self) -> Document {
        Document::from_elements(self.output)
    }
}

/// Merge per-page element lists, given in page order, into one document.
pub fn merge_pages<I, P>(pages: I) -> Document
where
    I: IntoIterator<Item = P>,
    P: IntoIterator<Item = ContentElement>,
{
    let mut merger = Merger::new();
    for page in pages {
        merger.push_page(page);
    }
    merger.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ContentElement {
        ContentElement::text(s)
    }

    fn table(rows: &[&[&str]]) -> ContentElement {
        ContentElement::Table(
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_text_across_pages() {
        let doc = merge_pages(vec![vec![text("foo")], vec![text("bar")]]);
        assert_eq!(doc.elements(), &[text("foo bar")]);
    }

    #[test]
    fn test_table_across_pages() {
        let doc = merge_pages(vec![
            vec![table(&[&["1", "2"]])],
            vec![table(&[&["3", "4"]])],
        ]);
        assert_eq!(doc.elements(), &[table(&[&["1", "2"], &["3", "4"]])]);
    }

    #[test]
    fn test_two_page_scenario() {
        let doc = merge_pages(vec![
            vec![text("Intro"), table(&[&["a"]])],
            vec![table(&[&["b"]]), text("End")],
        ]);
        assert_eq!(
            doc.elements(),
            &[text("Intro"), table(&[&["a"], &["b"]]), text("End")]
        );
    }

    #[test]
    fn test_already_merged_page_unchanged() {
        let page = vec![
            text("Intro"),
            table(&[&["a", "b"]]),
            text("Body"),
            table(&[&["c"]]),
        ];
        let doc = merge_pages(vec![page.clone()]);
        assert_eq!(doc.elements(), page.as_slice());
    }

    #[test]
    fn test_no_adjacent_same_kind() {
        let doc = merge_pages(vec![
            vec![text("a"), text("b"), table(&[&["1"]])],
            vec![],
            vec![table(&[&["2"]]), table(&[]), text("c")],
            vec![text("d")],
        ]);

        for pair in doc.elements().windows(2) {
            assert!(!pair[0].same_kind(&pair[1]));
        }
        assert_eq!(
            doc.elements(),
            &[text("a b"), table(&[&["1"], &["2"]]), text("c d")]
        );
    }

    #[test]
    fn test_empty_table_starts_table_run() {
        let doc = merge_pages(vec![vec![text("x"), table(&[]), table(&[&["r"]])]]);
        assert_eq!(doc.elements(), &[text("x"), table(&[&["r"]])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_pages(Vec::<Vec<ContentElement>>::new()).is_empty());
    }
}
