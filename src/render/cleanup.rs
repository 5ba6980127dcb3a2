//! Text cleanup applied to reconstructed documents.

use serde::{Deserialize, Serialize};
use unicode_bidi::BidiInfo;
use unicode_normalization::UnicodeNormalization;

use crate::model::Document;

/// Options for text cleanup. Everything is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    /// Apply Unicode NFKC normalization (ligatures, full-width forms)
    pub normalize_unicode: bool,

    /// Reorder right-to-left runs into visual (display) order, line by line
    pub visual_order: bool,
}

impl CleanupOptions {
    /// Create options with every step disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC normalization.
    pub fn with_normalize_unicode(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable visual reordering of right-to-left text.
    pub fn with_visual_order(mut self, enabled: bool) -> Self {
        self.visual_order = enabled;
        self
    }

    /// True when no step is enabled.
    pub fn is_noop(&self) -> bool {
        !self.normalize_unicode && !self.visual_order
    }
}

/// Text cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Process a string through the enabled steps.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfkc().collect();
        }

        if self.options.visual_order {
            result = result
                .split('\n')
                .map(visual_line)
                .collect::<Vec<_>>()
                .join("\n");
        }

        result
    }

    /// Clean every text element and table cell of a document in place.
    pub fn apply(&self, doc: &mut Document) {
        if self.options.is_noop() {
            return;
        }
        doc.map_text(|text| self.process(text));
    }
}

fn visual_line(line: &str) -> String {
    let info = BidiInfo::new(line, None);
    if !info.has_rtl() {
        return line.to_string();
    }

    info.paragraphs
        .iter()
        .map(|para| info.reorder_line(para, para.range.clone()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentElement;

    #[test]
    fn test_default_is_noop() {
        let pipeline = CleanupPipeline::new(CleanupOptions::default());
        assert!(CleanupOptions::default().is_noop());
        assert_eq!(pipeline.process("\u{FB01}le"), "\u{FB01}le");
    }

    #[test]
    fn test_nfkc() {
        let pipeline = CleanupPipeline::new(CleanupOptions::new().with_normalize_unicode(true));
        assert_eq!(pipeline.process("\u{FB01}le"), "file");
        assert_eq!(pipeline.process("\u{FF21}\u{FF22}\u{FF23}"), "ABC");
    }

    #[test]
    fn test_visual_order() {
        let pipeline = CleanupPipeline::new(CleanupOptions::new().with_visual_order(true));
        assert_eq!(pipeline.process("plain text"), "plain text");
        assert_eq!(
            pipeline.process("\u{5D0}\u{5D1}\u{5D2}\nabc"),
            "\u{5D2}\u{5D1}\u{5D0}\nabc"
        );
    }

    #[test]
    fn test_apply_covers_cells() {
        let mut doc = Document::from_elements(vec![
            ContentElement::text("\u{FB02}ow"),
            ContentElement::table([["\u{FF11}", "x"]]),
        ]);
        CleanupPipeline::new(CleanupOptions::new().with_normalize_unicode(true)).apply(&mut doc);

        assert_eq!(
            doc.elements(),
            &[
                ContentElement::text("flow"),
                ContentElement::table([["1", "x"]]),
            ]
        );
    }
}
