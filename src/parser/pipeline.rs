//! Page-range reconstruction pipeline.
//!
//! Each page goes through detect, partition, extract, assemble on its own,
//! so pages fan out across rayon's pool. The merge that follows is a
//! separate sequential pass over the page lists in page order.

use std::ops::Range;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{ContentElement, Document, Rect};

use super::annex::locate_annex;
use super::assembler::assemble_page;
use super::backend::{PageGeometry, PageSource};
use super::bands::partition;
use super::extractor::RegionExtractor;
use super::merger::merge_pages;
use super::options::ExtractOptions;
use super::table_detector::{sort_by_top, TableDetector};

/// Geometric breakdown of one page, before any content is extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Usable area selected by orientation
    pub area: Rect,
    /// Width-normalized table boxes, sorted by top edge
    pub tables: Vec<Rect>,
    /// Complementary text bands, top to bottom
    pub bands: Vec<Rect>,
}

/// Which pages of a source to reconstruct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// From a page to the last page
    From(usize),
    /// An explicit half-open range
    Range(Range<usize>),
    /// From a page up to, not including, the first annex page
    UntilAnnex(usize),
}

/// Reconstructs documents from a page source.
pub struct DocumentExtractor<'s, S: ?Sized> {
    source: &'s S,
    options: ExtractOptions,
}

impl<'s, S> DocumentExtractor<'s, S>
where
    S: PageSource + ?Sized,
{
    /// Create an extractor with default options.
    pub fn new(source: &'s S) -> Self {
        Self::with_options(source, ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(source: &'s S, options: ExtractOptions) -> Self {
        Self { source, options }
    }

    /// Options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get the number of pages in the source.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Reconstruct the pages in `range` on the calling thread.
    ///
    /// Ignores [`ExtractOptions::parallel`], so it works for sources that
    /// cannot be shared across threads. The first page failure aborts the
    /// whole range.
    pub fn extract_range_sequential(&self, range: Range<usize>) -> Result<Document> {
        self.begin(&range, "sequential")?;
        let pages = range
            .map(|index| self.page_elements(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(pages))
    }

    /// Reconstruct the selected pages on the calling thread.
    pub fn extract_sequential(&self, selection: &PageSelection) -> Result<Document> {
        let range = self.resolve(selection)?;
        self.extract_range_sequential(range)
    }

    /// Concrete page range for a selection. Annex selections scan the source.
    pub fn resolve(&self, selection: &PageSelection) -> Result<Range<usize>> {
        let count = self.page_count();
        let range = match selection {
            PageSelection::All => 0..count,
            PageSelection::From(start) => *start..count.max(*start),
            PageSelection::Range(range) => range.clone(),
            PageSelection::UntilAnnex(start) => {
                let end = self.locate_annex(*start).unwrap_or(count);
                *start..end.max(*start)
            }
        };
        self.check_range(&range)?;
        Ok(range)
    }

    /// Index of the first page at or after `start` containing the annex marker.
    pub fn locate_annex(&self, start: usize) -> Option<usize> {
        locate_annex(self.source, start, &self.options)
    }

    /// Ordered elements of a single page, before cross-page merging.
    pub fn page_elements(&self, index: usize) -> Result<Vec<ContentElement>> {
        self.source
            .page(index)
            .and_then(|page| process_page(&page, &self.options))
            .map_err(|e| e.at_page(index))
    }

    /// Geometric breakdown of a single page.
    pub fn page_layout(&self, index: usize) -> Result<PageLayout> {
        self.source
            .page(index)
            .and_then(|page| page_layout(&page, &self.options))
            .map_err(|e| e.at_page(index))
    }

    fn begin(&self, range: &Range<usize>, mode: &str) -> Result<()> {
        self.options.validate()?;
        self.check_range(range)?;
        log::debug!(
            "DocumentExtractor: pages {}..{} ({})",
            range.start,
            range.end,
            mode
        );
        Ok(())
    }

    fn finish(&self, pages: Vec<Vec<ContentElement>>) -> Document {
        let document = merge_pages(pages);
        log::debug!(
            "DocumentExtractor: merged into {} elements ({} tables)",
            document.len(),
            document.table_count()
        );
        document
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(Error::InvalidPageRange(format!(
                "start {} is after end {}",
                range.start, range.end
            )));
        }
        let count = self.page_count();
        if range.end > count {
            return Err(Error::PageOutOfRange(range.end, count));
        }
        Ok(())
    }
}

impl<'s, S> DocumentExtractor<'s, S>
where
    S: PageSource + Sync + ?Sized,
{
    /// Reconstruct the pages in `range` into one merged document.
    ///
    /// Pages fan out across rayon's pool unless the options are
    /// [`sequential`](ExtractOptions::sequential). The first page failure
    /// aborts the whole range.
    pub fn extract_range(&self, range: Range<usize>) -> Result<Document> {
        if !self.options.parallel {
            return self.extract_range_sequential(range);
        }

        self.begin(&range, "parallel")?;
        let pages = range
            .into_par_iter()
            .map(|index| self.page_elements(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(pages))
    }

    /// Reconstruct the selected pages.
    pub fn extract(&self, selection: &PageSelection) -> Result<Document> {
        let range = self.resolve(selection)?;
        self.extract_range(range)
    }

    /// Reconstruct every page of the source.
    pub fn extract_all(&self) -> Result<Document> {
        self.extract_range(0..self.page_count())
    }

    /// Reconstruct from `start` up to (not including) the annex page.
    ///
    /// Runs to the last page when no annex marker is found.
    pub fn extract_until_annex(&self, start: usize) -> Result<Document> {
        self.extract(&PageSelection::UntilAnnex(start))
    }
}

/// Table boxes and text bands of one page.
pub fn page_layout<P: PageGeometry + ?Sized>(page: &P, options: &ExtractOptions) -> Result<PageLayout> {
    let detector = TableDetector::new(options);
    let area = detector.usable_area(page);

    let mut tables = detector.detect(page)?;
    sort_by_top(&mut tables);
    let bands = partition(&area, &tables);

    Ok(PageLayout {
        area,
        tables,
        bands,
    })
}

/// Ordered content elements of one page.
pub fn process_page<P: PageGeometry + ?Sized>(
    page: &P,
    options: &ExtractOptions,
) -> Result<Vec<ContentElement>> {
    let layout = page_layout(page, options)?;
    let extractor = RegionExtractor::new(options);

    let mut tables = Vec::with_capacity(layout.tables.len());
    for table in layout.tables {
        let grid = extractor.extract_table(page, &table)?;
        tables.push((table, grid));
    }

    let mut bands = Vec::with_capacity(layout.bands.len());
    for band in layout.bands {
        let text = extractor.extract_band(page, &band)?;
        bands.push((band, text));
    }

    let elements = assemble_page(bands, tables);
    log::trace!("process_page: {} elements", elements.len());
    Ok(elements)
}
