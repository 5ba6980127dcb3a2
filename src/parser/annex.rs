//! Annex location.
//!
//! Finds the first page, at or after a start index, whose usable-area text
//! contains the annex marker. Used to bound the page range fed to the
//! pipeline. Scanning is best-effort: a page that cannot be read is treated
//! as a page without text.

use super::backend::{PageGeometry, PageSource};
use super::options::ExtractOptions;

/// Index of the first page at or after `start` containing the marker.
///
/// Returns `None` when the pages are exhausted without a match, and without
/// scanning when the marker is empty.
pub fn locate_annex<S>(source: &S, start: usize, options: &ExtractOptions) -> Option<usize>
where
    S: PageSource + ?Sized,
{
    let marker = options.annex_marker.as_str();
    if marker.is_empty() {
        log::warn!("Annex scan: empty marker, nothing to locate");
        return None;
    }

    for index in start..source.page_count() {
        let text = match source.page(index).and_then(|page| {
            let area = options.usable_area(page.orientation());
            page.extract_text(area)
        }) {
            Ok(Some(text)) => text,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Annex scan: skipping unreadable page {}: {}", index, e);
                continue;
            }
        };

        if text.contains(marker) {
            log::debug!("Annex scan: marker {:?} found on page {}", marker, index);
            return Some(index);
        }
    }

    log::debug!("Annex scan: marker {:?} not found from page {}", marker, start);
    None
}
