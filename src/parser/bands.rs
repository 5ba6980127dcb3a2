//! Text band partitioning.
//!
//! The usable area minus the table boxes leaves a stack of full-width
//! horizontal strips. Those strips hold the running text of the page.

use crate::model::Rect;

/// Compute the text bands complementary to `tables` inside `area`.
///
/// `tables` must be sorted by top edge. With no tables the whole area is one
/// band; with N tables there are N + 1 bands, top to bottom. Bands between
/// abutting or overlapping tables come out degenerate and are left for the
/// extractor to skip.
pub fn partition(area: &Rect, tables: &[Rect]) -> Vec<Rect> {
    let (first, last) = match (tables.first(), tables.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return vec![*area],
    };

    let mut bands = Vec::with_capacity(tables.len() + 1);
    bands.push(area.with_vertical(area.y1, first.y1));
    for pair in tables.windows(2) {
        bands.push(area.with_vertical(pair[0].y2, pair[1].y1));
    }
    bands.push(area.with_vertical(last.y2, area.y2));

    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::options::{LANDSCAPE_AREA, PORTRAIT_AREA};

    fn table(top: f32, bottom: f32) -> Rect {
        PORTRAIT_AREA.with_vertical(top, bottom)
    }

    #[test]
    fn test_no_tables_single_band() {
        assert_eq!(partition(&PORTRAIT_AREA, &[]), vec![PORTRAIT_AREA]);
        assert_eq!(partition(&LANDSCAPE_AREA, &[]), vec![LANDSCAPE_AREA]);
    }

    #[test]
    fn test_bands_around_tables() {
        let tables = [table(100.0, 200.0), table(300.0, 450.0)];
        let bands = partition(&PORTRAIT_AREA, &tables);

        assert_eq!(
            bands,
            vec![
                Rect::new(0.0, 0.0, 612.0, 100.0),
                Rect::new(0.0, 200.0, 612.0, 300.0),
                Rect::new(0.0, 450.0, 612.0, 792.0),
            ]
        );
    }

    #[test]
    fn test_bands_and_tables_cover_area() {
        let tables = [
            table(50.0, 120.0),
            table(120.0, 300.0),
            table(410.5, 411.0),
            table(600.0, 792.0),
        ];
        let bands = partition(&PORTRAIT_AREA, &tables);
        assert_eq!(bands.len(), tables.len() + 1);

        // Interleave band, table, band, ... and check the extents chain.
        let mut cursor = PORTRAIT_AREA.y1;
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.y1, cursor);
            assert_eq!(band.x1, PORTRAIT_AREA.x1);
            assert_eq!(band.x2, PORTRAIT_AREA.x2);
            cursor = band.y2;
            if let Some(t) = tables.get(i) {
                assert_eq!(t.y1, cursor);
                cursor = t.y2;
            }
        }
        assert_eq!(cursor, PORTRAIT_AREA.y2);

        let covered: f32 = bands.iter().map(|b| b.height()).sum::<f32>()
            + tables.iter().map(|t| t.height()).sum::<f32>();
        assert_eq!(covered, PORTRAIT_AREA.height());
    }

    #[test]
    fn test_abutting_tables_leave_degenerate_band() {
        let tables = [table(0.0, 100.0), table(100.0, 200.0)];
        let bands = partition(&PORTRAIT_AREA, &tables);

        assert_eq!(bands.len(), 3);
        assert!(bands[0].is_degenerate());
        assert!(bands[1].is_degenerate());
        assert!(!bands[2].is_degenerate());
    }

    #[test]
    fn test_overlapping_tables_negative_band() {
        let tables = [table(100.0, 250.0), table(200.0, 300.0)];
        let bands = partition(&PORTRAIT_AREA, &tables);
        assert!(bands[1].height() < 0.0);
    }
}
