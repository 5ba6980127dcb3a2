//! Document model types.
//!
//! Geometry primitives shared by the layout reconstruction stages and the
//! typed content elements they produce.

mod document;
mod element;
mod geometry;

pub use document::Document;
pub use element::{ContentElement, Grid};
pub use geometry::{Orientation, Rect};
