//! In-memory geometry provider.
//!
//! Pages are described by positioned words and ruling lines, typically the
//! output of a PDF decoding step serialized to JSON. Tables are found by
//! lattice analysis of the rulings.

mod lattice;
mod page;
mod source;
mod text;

pub use page::{LayoutPage, Ruling, Word};
pub use source::LayoutDocument;
pub use text::{words_to_text, DEFAULT_Y_TOLERANCE};
