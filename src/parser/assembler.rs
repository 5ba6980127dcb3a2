//! Page assembly: one y-ordered element list per page.

use crate::model::{ContentElement, Grid, Rect};

/// Build the ordered element list of one page.
///
/// Empty text bands are dropped; tables are always kept, even with an empty
/// grid. Elements are ordered by the top edge of their source region with a
/// stable sort, text bands ahead of tables on ties.
pub fn assemble_page(
    bands: Vec<(Rect, Option<String>)>,
    tables: Vec<(Rect, Grid)>,
) -> Vec<ContentElement> {
    let mut positioned: Vec<(f32, ContentElement)> = Vec::with_capacity(bands.len() + tables.len());

    for (band, text) in bands {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            positioned.push((band.y1, ContentElement::Text(text)));
        }
    }

    for (table, grid) in tables {
        positioned.push((table.y1, ContentElement::Table(grid)));
    }

    positioned.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    positioned.into_iter().map(|(_, element)| element).collect()
}
