//! Rendering options.

use super::{CleanupOptions, JsonFormat};

/// Options for rendering a document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Text cleanup applied before rendering
    pub cleanup: Option<CleanupOptions>,

    /// Escape Markdown formatting characters in text blocks
    pub escape_special_chars: bool,

    /// JSON layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Enable or disable escaping of Markdown formatting characters.
    pub fn with_escape_special_chars(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}
