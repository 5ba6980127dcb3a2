//! Rendering module for converting documents to output formats.

mod cleanup;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline};
pub use json::{error_envelope, to_json, to_json_envelope, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::ExtractionStats;
pub use text::to_text;
