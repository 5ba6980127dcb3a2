//! Multi-page layout documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::PageSource;

use super::page::LayoutPage;

/// A document made of pre-extracted page layouts.
///
/// Serialized as `{"pages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Pages in document order
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    /// Create a document from pages.
    pub fn new(pages: Vec<LayoutPage>) -> Self {
        Self { pages }
    }

    /// Load a layout document from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading layout document: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a layout document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: Self = serde_json::from_reader(reader)?;
        log::debug!("Loaded layout document with {} pages", doc.pages.len());
        Ok(doc)
    }

    /// Load a layout document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a page at the end.
    pub fn push(&mut self, page: LayoutPage) {
        self.pages.push(page);
    }
}

impl From<Vec<LayoutPage>> for LayoutDocument {
    fn from(pages: Vec<LayoutPage>) -> Self {
        Self::new(pages)
    }
}

impl PageSource for LayoutDocument {
    type Page<'a> = &'a LayoutPage;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Self::Page<'_>> {
        let page = self
            .pages
            .get(index)
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))?;
        page.validate()?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_page_access() {
        let doc = LayoutDocument::new(vec![LayoutPage::letter(), LayoutPage::new(0.0, 10.0)]);

        assert_eq!(doc.page_count(), 2);
        assert!(doc.page(0).is_ok());
        assert!(matches!(doc.page(1), Err(Error::Geometry(_))));
        assert!(matches!(doc.page(2), Err(Error::PageOutOfRange(2, 2))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pages": [{{"width": 612, "height": 792}}, {{"width": 842, "height": 595}}]}}"#
        )
        .unwrap();

        let doc = LayoutDocument::from_path(file.path()).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[1].width, 842.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LayoutDocument::from_json("{\"pages\": 3}"),
            Err(Error::InvalidLayout(_))
        ));
        assert!(matches!(
            LayoutDocument::from_path("/nonexistent/layout.json"),
            Err(Error::Io(_))
        ));
    }
}
