//! Plain text rendering.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::Document;

use super::{CleanupPipeline, RenderOptions};

/// Convert a document to plain text.
///
/// Elements are separated by a blank line; table rows become tab-separated
/// lines.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let doc = cleaned(doc, options);
    Ok(doc.plain_text().trim().to_string())
}

/// The document after the configured cleanup, borrowed when nothing applies.
pub(crate) fn cleaned<'a>(doc: &'a Document, options: &RenderOptions) -> Cow<'a, Document> {
    match options.cleanup {
        Some(cleanup) if !cleanup.is_noop() => {
            let mut owned = doc.clone();
            CleanupPipeline::new(cleanup).apply(&mut owned);
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(doc),
    }
}
