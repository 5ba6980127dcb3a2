//! Pre-extracted page layouts.
//!
//! A [`LayoutPage`] holds what a PDF text/graphics decoder would report for a
//! page: positioned words and ruling lines. It implements [`PageGeometry`]
//! directly, so decoded layouts (or hand-written fixtures) can be fed to the
//! reconstruction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Rect;
use crate::parser::{ExtractedTable, PageGeometry, TableSettings};

use super::lattice::{self, Edge};
use super::text::{words_to_text, DEFAULT_Y_TOLERANCE};

/// A positioned word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The text content
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>, x0: f32, top: f32, x1: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Bounding box of the word.
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x0, self.top, self.x1, self.bottom)
    }

    /// Center point of the word.
    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// A straight ruling line. Horizontal or vertical; others are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruling {
    /// Start x
    pub x0: f32,
    /// Start y
    pub top: f32,
    /// End x
    pub x1: f32,
    /// End y
    pub bottom: f32,
}

/// A page of positioned words and ruling lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Words on the page
    #[serde(default)]
    pub words: Vec<Word>,
    /// Ruling lines
    #[serde(default)]
    pub lines: Vec<Ruling>,
    /// Rectangles, each contributing four ruling edges
    #[serde(default)]
    pub rects: Vec<Rect>,
}

impl LayoutPage {
    /// Create an empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            words: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
        }
    }

    /// Create an empty US Letter portrait page.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Add a word.
    pub fn add_word(&mut self, text: impl Into<String>, x0: f32, top: f32, x1: f32, bottom: f32) {
        self.words.push(Word::new(text, x0, top, x1, bottom));
    }

    /// Add a ruling line.
    pub fn add_line(&mut self, x0: f32, top: f32, x1: f32, bottom: f32) {
        self.lines.push(Ruling {
            x0,
            top,
            x1,
            bottom,
        });
    }

    /// Add a rectangle outline.
    pub fn add_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Rule a full grid: a horizontal line at each `ys`, a vertical line at
    /// each `xs`, spanning the outer coordinates.
    pub fn add_grid(&mut self, xs: &[f32], ys: &[f32]) {
        let (Some(&left), Some(&right), Some(&top), Some(&bottom)) =
            (xs.first(), xs.last(), ys.first(), ys.last())
        else {
            return;
        };
        for &y in ys {
            self.add_line(left, y, right, y);
        }
        for &x in xs {
            self.add_line(x, top, x, bottom);
        }
    }

    /// Check that the page can be processed.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(Error::Geometry(format!(
                "invalid page size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// All ruling edges of the page.
    pub(crate) fn edges(&self) -> Vec<Edge> {
        self.lines
            .iter()
            .filter_map(Edge::from_ruling)
            .chain(self.rects.iter().flat_map(Edge::from_rect))
            .collect()
    }
}

impl PageGeometry for LayoutPage {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn extract_text(&self, region: Rect) -> Result<Option<String>> {
        if region.is_degenerate() {
            return Ok(None);
        }

        let words: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| region.contains(&w.bbox()))
            .collect();
        if words.is_empty() {
            return Ok(None);
        }

        Ok(Some(words_to_text(&words, DEFAULT_Y_TOLERANCE)))
    }

    fn find_tables(&self, region: Rect, settings: &TableSettings) -> Result<Vec<Rect>> {
        if region.is_degenerate() {
            return Ok(vec![]);
        }

        let tables = lattice::find_tables(self.edges(), &region, settings);
        Ok(tables.into_iter().map(|t| t.bbox).collect())
    }

    fn extract_tables(
        &self,
        region: Rect,
        settings: &TableSettings,
    ) -> Result<Vec<ExtractedTable>> {
        if region.is_degenerate() {
            return Ok(vec![]);
        }

        let words: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| {
                let (x, y) = w.center();
                region.contains_point(x, y)
            })
            .collect();

        Ok(lattice::find_tables(self.edges(), &region, settings)
            .into_iter()
            .map(|table| ExtractedTable::new(table.bbox, table.rows(&words)))
            .collect())
    }
}
