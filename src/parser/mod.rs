//! Page-layout reconstruction module.

mod annex;
mod assembler;
mod backend;
mod bands;
mod extractor;
mod merger;
mod options;
mod pipeline;
mod table_detector;

pub use annex::locate_annex;
pub use assembler::assemble_page;
pub use backend::{ExtractedTable, PageGeometry, PageSource};
pub use bands::partition;
pub use extractor::{select_structure, RegionExtractor};
pub use merger::{merge_pages, Merger};
pub use options::{
    ExtractOptions, Padding, TablePolicy, TableSettings, LANDSCAPE_AREA,
    LENIENT_INTERSECTION_TOLERANCE, PORTRAIT_AREA, STRICT_INTERSECTION_TOLERANCE,
};
pub use pipeline::{page_layout, process_page, DocumentExtractor, PageLayout, PageSelection};
pub use table_detector::{normalize_width, sort_by_top, TableDetector};
