//! Region content extraction.
//!
//! Text bands are read as trimmed text; table boxes are re-read with the
//! lenient settings, which over-merge when used for detection but recover
//! ragged cell borders once the region is known.

use crate::error::Result;
use crate::model::{Grid, Rect};

use super::backend::{ExtractedTable, PageGeometry};
use super::options::{ExtractOptions, TablePolicy};

/// Extracts content from text bands and table boxes.
pub struct RegionExtractor<'a> {
    options: &'a ExtractOptions,
}

impl<'a> RegionExtractor<'a> {
    /// Create a new region extractor.
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self { options }
    }

    /// Trimmed text of a band, or `None` when the band holds no text.
    ///
    /// Degenerate bands are not passed to the provider.
    pub fn extract_band<P: PageGeometry + ?Sized>(
        &self,
        page: &P,
        band: &Rect,
    ) -> Result<Option<String>> {
        if band.is_degenerate() {
            log::trace!("RegionExtractor: skipping degenerate band {:?}", band);
            return Ok(None);
        }

        let text = page.extract_text(*band)?;
        Ok(text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    /// Cell grid of a table box. Empty when the crop yields no structure.
    pub fn extract_table<P: PageGeometry + ?Sized>(&self, page: &P, table: &Rect) -> Result<Grid> {
        let padding = &self.options.table_padding;
        let crop = table.expand(padding.horizontal, padding.vertical);
        let structures = page.extract_tables(crop, &self.options.extraction)?;

        if structures.len() > 1 {
            log::debug!(
                "RegionExtractor: {} structures in table crop {:?}, policy {:?}",
                structures.len(),
                crop,
                self.options.table_policy
            );
        }

        Ok(select_structure(structures, self.options.table_policy))
    }
}

/// Reduce the structures of one crop to a single grid.
pub fn select_structure(structures: Vec<ExtractedTable>, policy: TablePolicy) -> Grid {
    match policy {
        TablePolicy::First => structures
            .into_iter()
            .next()
            .map(|t| t.rows)
            .unwrap_or_default(),
        TablePolicy::Largest => {
            let mut best: Option<ExtractedTable> = None;
            for candidate in structures {
                let better = best
                    .as_ref()
                    .map_or(true, |b| candidate.bbox.area() > b.bbox.area());
                if better {
                    best = Some(candidate);
                }
            }
            best.map(|t| t.rows).unwrap_or_default()
        }
        TablePolicy::MergeAll => structures.into_iter().flat_map(|t| t.rows).collect(),
    }
}
