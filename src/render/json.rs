//! JSON rendering for reconstructed documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a document to a JSON array of tagged elements.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Render an error as `{"error": "<message>"}`.
pub fn error_envelope(err: &Error, format: JsonFormat) -> Result<String> {
    serialize(
        &ErrorEnvelope {
            error: err.to_string(),
        },
        format,
    )
}

/// Render the outcome of an extraction: the document array on success, the
/// error envelope on failure.
pub fn to_json_envelope(result: &Result<Document>, format: JsonFormat) -> Result<String> {
    match result {
        Ok(doc) => to_json(doc, format),
        Err(err) => error_envelope(err, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentElement;

    fn sample() -> Document {
        Document::from_elements(vec![
            ContentElement::text("Hello"),
            ContentElement::table([["a", "b"]]),
        ])
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"[{"Text":"Hello"},{"Table":[["a","b"]]}]"#);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["Text"], "Hello");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_json(&Document::new(), JsonFormat::Compact).unwrap(), "[]");
    }

    #[test]
    fn test_error_envelope() {
        let result: Result<Document> = Err(Error::Geometry("bad page".into()).at_page(3));
        let json = to_json_envelope(&result, JsonFormat::Compact).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["error"],
            "Page 3 failed: Geometry provider error: bad page"
        );
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
