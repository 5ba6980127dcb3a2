//! Markdown rendering for reconstructed documents.

use crate::error::Result;
use crate::model::{ContentElement, Document, Grid};

use super::text::cleaned;
use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    ///
    /// Text elements become paragraphs and tables become pipe tables whose
    /// first row is the header.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let doc = cleaned(doc, &self.options);
        let mut output = String::new();

        for element in doc.iter() {
            match element {
                ContentElement::Text(text) => self.render_text(&mut output, text),
                ContentElement::Table(rows) => self.render_table(&mut output, rows),
            }
        }

        Ok(output.trim_end().to_string() + "\n")
    }

    fn render_text(&self, output: &mut String, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if self.options.escape_special_chars {
            output.push_str(&escape_markdown(text));
        } else {
            output.push_str(text);
        }
        output.push_str("\n\n");
    }

    fn render_table(&self, output: &mut String, rows: &Grid) {
        let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        if col_count == 0 {
            return;
        }

        for (i, row) in rows.iter().enumerate() {
            output.push('|');
            for c in 0..col_count {
                let content = row.get(c).map(|cell| escape_cell(cell)).unwrap_or_default();
                output.push_str(&format!(" {} |", content));
            }
            output.push('\n');

            // Separator after header row
            if i == 0 {
                output.push('|');
                output.push_str(&" --- |".repeat(col_count));
                output.push('\n');
            }
        }

        output.push('\n');
    }
}

fn escape_cell(cell: &str) -> String {
    cell.trim().replace('\n', " ").replace('|', "\\|")
}

fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_table() {
        let doc = Document::from_elements(vec![
            ContentElement::text("Intro"),
            ContentElement::table([vec!["Name", "Age"], vec!["Alice"]]),
            ContentElement::text("Outro"),
        ]);

        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(
            md,
            "Intro\n\n| Name | Age |\n| --- | --- |\n| Alice |  |\n\nOutro\n"
        );
    }

    #[test]
    fn test_cell_escaping() {
        let doc = Document::from_elements(vec![ContentElement::table([["a|b", "two\nlines"]])]);

        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert!(md.starts_with("| a\\|b | two lines |\n"));
    }

    #[test]
    fn test_empty_table_skipped() {
        let doc = Document::from_elements(vec![
            ContentElement::Table(vec![]),
            ContentElement::text("After"),
        ]);

        assert_eq!(to_markdown(&doc, &RenderOptions::default()).unwrap(), "After\n");
    }

    #[test]
    fn test_escape_special_chars() {
        let doc = Document::from_elements(vec![ContentElement::text("a*b_c")]);
        let options = RenderOptions::new().with_escape_special_chars(true);

        assert_eq!(to_markdown(&doc, &options).unwrap(), "a\\*b\\_c\n");
    }
}
