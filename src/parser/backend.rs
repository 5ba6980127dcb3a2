//! Geometry provider abstraction layer.
//!
//! Provides a trait-based interface for the page-extraction collaborator,
//! isolating the layout reconstruction stages from whatever decodes the
//! underlying document.

use crate::error::Result;
use crate::model::{Grid, Orientation, Rect};

use super::options::TableSettings;

/// A table structure returned by an extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    /// Bounding box of the structure in page coordinates
    pub bbox: Rect,
    /// Cell text, row by row
    pub rows: Grid,
}

impl ExtractedTable {
    /// Create a new extracted table.
    pub fn new(bbox: Rect, rows: Grid) -> Self {
        Self { bbox, rows }
    }
}

/// Abstract interface to one page of a document.
///
/// Every extraction call is confined to `region`; implementations decide how
/// objects straddling the region boundary are treated. Degenerate regions
/// must not be an error.
pub trait PageGeometry {
    /// Page width in page units.
    fn width(&self) -> f32;

    /// Page height in page units.
    fn height(&self) -> f32;

    /// Text inside `region`, or `None` if the region holds no text.
    fn extract_text(&self, region: Rect) -> Result<Option<String>>;

    /// Bounding boxes of the tables found inside `region`.
    fn find_tables(&self, region: Rect, settings: &TableSettings) -> Result<Vec<Rect>>;

    /// Table structures found inside `region`, with their cell text.
    fn extract_tables(&self, region: Rect, settings: &TableSettings)
        -> Result<Vec<ExtractedTable>>;

    /// Orientation derived from the page dimensions.
    fn orientation(&self) -> Orientation {
        Orientation::of(self.width(), self.height())
    }
}

impl<T: PageGeometry + ?Sized> PageGeometry for &T {
    fn width(&self) -> f32 {
        (**self).width()
    }

    fn height(&self) -> f32 {
        (**self).height()
    }

    fn extract_text(&self, region: Rect) -> Result<Option<String>> {
        (**self).extract_text(region)
    }

    fn find_tables(&self, region: Rect, settings: &TableSettings) -> Result<Vec<Rect>> {
        (**self).find_tables(region, settings)
    }

    fn extract_tables(
        &self,
        region: Rect,
        settings: &TableSettings,
    ) -> Result<Vec<ExtractedTable>> {
        (**self).extract_tables(region, settings)
    }
}

/// Abstract interface to a paginated document.
///
/// A page handle lives only as long as one page is being processed.
pub trait PageSource {
    /// Page handle type.
    type Page<'a>: PageGeometry
    where
        Self: 'a;

    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Open the page at a zero-based index.
    fn page(&self, index: usize) -> Result<Self::Page<'_>>;
}
