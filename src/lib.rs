//! # pagestitch
//!
//! Page-layout reconstruction for text-and-table documents.
//!
//! Each page is split into table regions and the text bands between them,
//! each region is extracted, the pieces are ordered top to bottom, and
//! finally content that continues across page boundaries is stitched back
//! together: text runs are joined and tables split over several pages become
//! one table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagestitch::{extract_file, render};
//!
//! fn main() -> pagestitch::Result<()> {
//!     // Reconstruct a pre-extracted page layout
//!     let doc = extract_file("layout.json")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table-aware segmentation**: full-width table bands and text bands per page
//! - **Cross-page stitching**: adjacent text and table fragments are merged
//! - **Annex cut-off**: stop before the first page carrying an annex marker
//! - **Pluggable geometry**: bring your own [`PageSource`] or use [`layout`]
//! - **Parallel processing**: uses Rayon across pages
//! - **Output formats**: JSON, plain text, Markdown

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutDocument, LayoutPage, Word};
pub use model::{ContentElement, Document, Grid, Orientation, Rect};
pub use parser::{
    locate_annex, DocumentExtractor, ExtractOptions, ExtractedTable, PageGeometry, PageSelection,
    PageSource, Padding, TablePolicy, TableSettings,
};
pub use render::{
    CleanupOptions, CleanupPipeline, ExtractionStats, JsonFormat, RenderOptions,
};

use std::ops::Range;
use std::path::Path;

/// Reconstruct every page of a layout file.
///
/// # Example
///
/// ```no_run
/// use pagestitch::extract_file;
///
/// let doc = extract_file("layout.json").unwrap();
/// println!("Elements: {}", doc.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Reconstruct every page of a layout file with custom options.
///
/// # Example
///
/// ```no_run
/// use pagestitch::{extract_file_with_options, ExtractOptions, TablePolicy};
///
/// let options = ExtractOptions::new()
///     .with_table_policy(TablePolicy::Largest)
///     .sequential();
/// let doc = extract_file_with_options("layout.json", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Document> {
    let source = LayoutDocument::from_path(path)?;
    DocumentExtractor::with_options(&source, options).extract_all()
}

/// Reconstruct a page range of any page source.
///
/// # Arguments
///
/// * `source` - The page source
/// * `pages` - Half-open range of zero-based page indices
/// * `options` - Extraction options
pub fn extract_range<S>(source: &S, pages: Range<usize>, options: ExtractOptions) -> Result<Document>
where
    S: PageSource + Sync + ?Sized,
{
    DocumentExtractor::with_options(source, options).extract_range(pages)
}

/// Reconstruct a page range on the calling thread.
///
/// For page sources that are not `Sync`.
pub fn extract_range_sequential<S>(
    source: &S,
    pages: Range<usize>,
    options: ExtractOptions,
) -> Result<Document>
where
    S: PageSource + ?Sized,
{
    DocumentExtractor::with_options(source, options).extract_range_sequential(pages)
}

/// Reconstruct a layout file from `start` up to the first annex page.
///
/// # Example
///
/// ```no_run
/// use pagestitch::extract_until_annex;
///
/// // Skip the cover page, stop before the annexes
/// let doc = extract_until_annex("layout.json", 1).unwrap();
/// ```
pub fn extract_until_annex<P: AsRef<Path>>(path: P, start: usize) -> Result<Document> {
    let source = LayoutDocument::from_path(path)?;
    DocumentExtractor::new(&source).extract_until_annex(start)
}

/// Convert a layout file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = extract_file(path)?;
    render::to_json(&doc, format)
}

/// Convert a layout file to Markdown.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = extract_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a layout file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = extract_file(path)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Builder for reconstructing and rendering documents.
///
/// # Example
///
/// ```no_run
/// use pagestitch::{CleanupOptions, Pagestitch};
///
/// let markdown = Pagestitch::new()
///     .until_annex(1)
///     .with_cleanup(CleanupOptions::new().with_normalize_unicode(true))
///     .extract_file("layout.json")?
///     .to_markdown()?;
/// # Ok::<(), pagestitch::Error>(())
/// ```
pub struct Pagestitch {
    options: ExtractOptions,
    pages: PageSelection,
    cleanup: CleanupOptions,
    render_options: RenderOptions,
}

impl Pagestitch {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            pages: PageSelection::All,
            cleanup: CleanupOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Replace the extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Stop before the first annex page at or after `start`.
    pub fn until_annex(mut self, start: usize) -> Self {
        self.pages = PageSelection::UntilAnnex(start);
        self
    }

    /// Set the annex marker.
    pub fn with_annex_marker(mut self, marker: impl Into<String>) -> Self {
        self.options = self.options.with_annex_marker(marker);
        self
    }

    /// Set text cleanup, applied to the document before rendering.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Set the JSON layout used by [`ExtractResult::to_json`].
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.render_options = self.render_options.with_json_format(format);
        self
    }

    /// Load a layout file and reconstruct the selected pages.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<ExtractResult> {
        let source = LayoutDocument::from_path(path)?;
        self.extract_source(&source)
    }

    /// Reconstruct the selected pages of a page source.
    pub fn extract_source<S>(self, source: &S) -> Result<ExtractResult>
    where
        S: PageSource + Sync + ?Sized,
    {
        let extractor = DocumentExtractor::with_options(source, self.options.clone());
        let range = extractor.resolve(&self.pages)?;
        let page_count = range.len();

        let document = extractor.extract_range(range)?;
        Ok(self.finish(document, page_count))
    }

    /// Reconstruct the selected pages on the calling thread.
    ///
    /// Accepts sources that cannot be shared across threads.
    pub fn extract_source_sequential<S>(self, source: &S) -> Result<ExtractResult>
    where
        S: PageSource + ?Sized,
    {
        let extractor = DocumentExtractor::with_options(source, self.options.clone());
        let range = extractor.resolve(&self.pages)?;
        let page_count = range.len();

        let document = extractor.extract_range_sequential(range)?;
        Ok(self.finish(document, page_count))
    }

    fn finish(self, mut document: Document, page_count: usize) -> ExtractResult {
        CleanupPipeline::new(self.cleanup).apply(&mut document);

        let stats = ExtractionStats::from_document(&document, page_count);
        ExtractResult {
            document,
            stats,
            render_options: self.render_options,
        }
    }
}

impl Default for Pagestitch {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a [`Pagestitch`] run, ready to be rendered.
pub struct ExtractResult {
    document: Document,
    stats: ExtractionStats,
    render_options: RenderOptions,
}

impl ExtractResult {
    /// The reconstructed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Statistics for the reconstructed document.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Render as JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.document, self.render_options.json_format)
    }

    /// Render as plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }
}
