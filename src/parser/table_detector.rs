//! Table region detection.
//!
//! Locates table boxes inside the orientation-specific usable area with the
//! strict detection settings, then widens each box to the full usable width
//! so the text bands computed from these boxes never leave untreated slivers
//! beside a table.

use crate::error::Result;
use crate::model::Rect;

use super::backend::PageGeometry;
use super::options::ExtractOptions;

/// Detects table regions on a page.
pub struct TableDetector<'a> {
    options: &'a ExtractOptions,
}

impl<'a> TableDetector<'a> {
    /// Create a new table detector.
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self { options }
    }

    /// Usable area for this page, selected by orientation.
    pub fn usable_area<P: PageGeometry + ?Sized>(&self, page: &P) -> Rect {
        self.options.usable_area(page.orientation())
    }

    /// Detect table boxes on the page.
    ///
    /// Returned in the provider's detection order, which is not guaranteed to
    /// be top-to-bottom; see [`sort_by_top`].
    pub fn detect<P: PageGeometry + ?Sized>(&self, page: &P) -> Result<Vec<Rect>> {
        let area = self.usable_area(page);
        let found = page.find_tables(area, &self.options.detection)?;

        log::debug!(
            "TableDetector: {} tables in {:?} area {:?}",
            found.len(),
            page.orientation(),
            area
        );

        Ok(found
            .iter()
            .map(|raw| normalize_width(raw, &area))
            .collect())
    }
}

/// Replace a box's left/right edges with the usable area's.
pub fn normalize_width(raw: &Rect, area: &Rect) -> Rect {
    area.with_vertical(raw.y1, raw.y2)
}

/// Stable sort of table boxes by top edge.
pub fn sort_by_top(boxes: &mut [Rect]) {
    boxes.sort_by(|a, b| a.y1.partial_cmp(&b.y1).unwrap_or(std::cmp::Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Orientation;
    use crate::parser::backend::ExtractedTable;
    use crate::parser::options::{TableSettings, LANDSCAPE_AREA, PORTRAIT_AREA};
    use std::cell::RefCell;

    struct FixedTables {
        width: f32,
        height: f32,
        tables: Vec<Rect>,
        seen: RefCell<Vec<(Rect, f32)>>,
    }

    impl FixedTables {
        fn new(width: f32, height: f32, tables: Vec<Rect>) -> Self {
            Self {
                width,
                height,
                tables,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageGeometry for FixedTables {
        fn width(&self) -> f32 {
            self.width
        }

        fn height(&self) -> f32 {
            self.height
        }

        fn extract_text(&self, _region: Rect) -> Result<Option<String>> {
            Ok(None)
        }

        fn find_tables(&self, region: Rect, settings: &TableSettings) -> Result<Vec<Rect>> {
            self.seen
                .borrow_mut()
                .push((region, settings.intersection_tolerance));
            Ok(self.tables.clone())
        }

        fn extract_tables(
            &self,
            _region: Rect,
            _settings: &TableSettings,
        ) -> Result<Vec<ExtractedTable>> {
            Err(Error::Geometry("not used".into()))
        }
    }

    #[test]
    fn test_detect_uses_portrait_area_and_strict_settings() {
        let options = ExtractOptions::default();
        let page = FixedTables::new(612.0, 792.0, vec![]);

        let boxes = TableDetector::new(&options).detect(&page).unwrap();
        assert!(boxes.is_empty());
        assert_eq!(page.seen.borrow()[0], (PORTRAIT_AREA, 3.0));
    }

    #[test]
    fn test_detect_normalizes_width_landscape() {
        let options = ExtractOptions::default();
        let page = FixedTables::new(
            842.0,
            595.0,
            vec![
                Rect::new(120.0, 100.0, 400.0, 180.0),
                Rect::new(50.0, 300.0, 700.0, 350.0),
            ],
        );
        assert_eq!(page.orientation(), Orientation::Landscape);

        let boxes = TableDetector::new(&options).detect(&page).unwrap();
        assert_eq!(page.seen.borrow()[0].0, LANDSCAPE_AREA);
        assert_eq!(
            boxes,
            vec![
                Rect::new(34.0, 100.0, 783.0, 180.0),
                Rect::new(34.0, 300.0, 783.0, 350.0),
            ]
        );
        for b in &boxes {
            assert_eq!(b.x1, LANDSCAPE_AREA.x1);
            assert_eq!(b.x2, LANDSCAPE_AREA.x2);
        }
    }

    #[test]
    fn test_detect_keeps_detection_order() {
        let options = ExtractOptions::default();
        let page = FixedTables::new(
            612.0,
            792.0,
            vec![
                Rect::new(10.0, 500.0, 90.0, 600.0),
                Rect::new(10.0, 100.0, 90.0, 200.0),
            ],
        );

        let mut boxes = TableDetector::new(&options).detect(&page).unwrap();
        assert_eq!(boxes[0].y1, 500.0);

        sort_by_top(&mut boxes);
        assert_eq!(boxes[0].y1, 100.0);
        assert_eq!(boxes[1].y1, 500.0);
    }
}
