//! Extraction options and configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Orientation, Rect};

/// Default usable area of a portrait page (US Letter, no margins).
pub const PORTRAIT_AREA: Rect = Rect::new(0.0, 0.0, 612.0, 792.0);

/// Default usable area of a landscape page (A4, 34pt left margin).
pub const LANDSCAPE_AREA: Rect = Rect::new(34.0, 0.0, 783.0, 595.0);

/// Intersection tolerance used to detect table regions.
pub const STRICT_INTERSECTION_TOLERANCE: f32 = 3.0;

/// Intersection tolerance used to extract cells from a known table region.
pub const LENIENT_INTERSECTION_TOLERANCE: f32 = 100.0;

const DEFAULT_SNAP_TOLERANCE: f32 = 3.0;

/// Options for reconstructing a page range.
///
/// Immutable once handed to the pipeline; every stage reads its tuning from
/// here rather than from globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Usable area of portrait pages
    pub portrait_area: Rect,

    /// Usable area of landscape pages
    pub landscape_area: Rect,

    /// Table settings for the detection pass
    pub detection: TableSettings,

    /// Table settings for the cell extraction pass
    pub extraction: TableSettings,

    /// Padding added around a detected table before extracting it
    pub table_padding: Padding,

    /// Which structure to keep when a table crop yields several
    pub table_policy: TablePolicy,

    /// Marker searched for by the annex locator
    pub annex_marker: String,

    /// Whether to extract pages in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Usable area for a page of the given orientation.
    pub fn usable_area(&self, orientation: Orientation) -> Rect {
        match orientation {
            Orientation::Portrait => self.portrait_area,
            Orientation::Landscape => self.landscape_area,
        }
    }

    /// Set the portrait usable area.
    pub fn with_portrait_area(mut self, area: Rect) -> Self {
        self.portrait_area = area;
        self
    }

    /// Set the landscape usable area.
    pub fn with_landscape_area(mut self, area: Rect) -> Self {
        self.landscape_area = area;
        self
    }

    /// Set detection pass settings.
    pub fn with_detection(mut self, settings: TableSettings) -> Self {
        self.detection = settings;
        self
    }

    /// Set extraction pass settings.
    pub fn with_extraction(mut self, settings: TableSettings) -> Self {
        self.extraction = settings;
        self
    }

    /// Set table padding.
    pub fn with_table_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.table_padding = Padding {
            horizontal,
            vertical,
        };
        self
    }

    /// Set the multi-structure policy.
    pub fn with_table_policy(mut self, policy: TablePolicy) -> Self {
        self.table_policy = policy;
        self
    }

    /// Set the annex marker.
    pub fn with_annex_marker(mut self, marker: impl Into<String>) -> Self {
        self.annex_marker = marker.into();
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the options for values no page could satisfy.
    pub fn validate(&self) -> Result<()> {
        for (name, area) in [
            ("portrait_area", self.portrait_area),
            ("landscape_area", self.landscape_area),
        ] {
            if area.is_degenerate() {
                return Err(Error::Config(format!("{} {:?} is empty", name, area)));
            }
        }
        for (name, settings) in [("detection", &self.detection), ("extraction", &self.extraction)]
        {
            if !(settings.intersection_tolerance >= 0.0 && settings.snap_tolerance >= 0.0) {
                return Err(Error::Config(format!(
                    "{} tolerances must be non-negative",
                    name
                )));
            }
        }
        if !(self.table_padding.horizontal >= 0.0 && self.table_padding.vertical >= 0.0) {
            return Err(Error::Config("table padding must be non-negative".into()));
        }
        if self.annex_marker.is_empty() {
            return Err(Error::Config("annex marker must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            portrait_area: PORTRAIT_AREA,
            landscape_area: LANDSCAPE_AREA,
            detection: TableSettings::strict(),
            extraction: TableSettings::lenient(),
            table_padding: Padding::default(),
            table_policy: TablePolicy::First,
            annex_marker: "ANNEX".to_string(),
            parallel: true,
        }
    }
}

/// Settings for a table detection or extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// How far apart a vertical and horizontal ruling may be and still count
    /// as intersecting
    pub intersection_tolerance: f32,

    /// Rulings closer than this are aligned to a common coordinate
    pub snap_tolerance: f32,
}

impl TableSettings {
    /// Precision-oriented settings for locating tables.
    pub fn strict() -> Self {
        Self {
            intersection_tolerance: STRICT_INTERSECTION_TOLERANCE,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }

    /// Recall-oriented settings for capturing ragged cell borders.
    pub fn lenient() -> Self {
        Self {
            intersection_tolerance: LENIENT_INTERSECTION_TOLERANCE,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }

    /// Set the intersection tolerance.
    pub fn with_intersection_tolerance(mut self, tolerance: f32) -> Self {
        self.intersection_tolerance = tolerance;
        self
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self::strict()
    }
}

/// Margins added around a table box before extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Added to the left and right edges
    pub horizontal: f32,
    /// Added to the top and bottom edges
    pub vertical: f32,
}

/// What to keep when one table crop yields several table structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePolicy {
    /// Keep the first structure
    #[default]
    First,
    /// Keep the structure with the largest bounding box
    Largest,
    /// Concatenate the rows of every structure
    MergeAll,
}
