//! Response decoder — recovers a JSON value from raw model output.
//!
//! Models sometimes wrap the object in prose or markdown fences, so decoding is
//! two-stage: strict parse of the whole text, then a strict parse of the slice
//! between the first `{` and the last `}`.
//!
//! The slice heuristic can mis-cut when prose after the object contains a `}`
//! or when stray braces precede it. That is accepted as is; the result is not
//! checked against any schema here (see `survey::result` for the typed view).

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No `{ ... }` span in the text.
    #[error("Model returned non-JSON.")]
    Malformed { raw: String },

    /// A `{ ... }` span exists but is not valid JSON.
    #[error("Model returned invalid JSON.")]
    InvalidContent { raw: String },
}

impl DecodeError {
    /// The model output exactly as it was passed to [`decode`].
    pub fn raw(&self) -> &str {
        match self {
            DecodeError::Malformed { raw } | DecodeError::InvalidContent { raw } => raw,
        }
    }
}

/// Decodes model output into a JSON value.
pub fn decode(raw: &str) -> Result<Value, DecodeError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }

    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if end > start => &raw[start..=end],
        _ => {
            return Err(DecodeError::Malformed {
                raw: raw.to_string(),
            })
        }
    };

    serde_json::from_str::<Value>(span).map_err(|_| DecodeError::InvalidContent {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_parse() {
        assert_eq!(decode(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_strict_parse_tolerates_surrounding_whitespace() {
        assert_eq!(decode("\n  {\"a\": 1}\n").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_salvage_from_prose() {
        let raw = r#"Here is the result: {"a":1} — hope that helps"#;
        assert_eq!(decode(raw).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_salvage_from_markdown_fence() {
        let raw = "```json\n{\"label\": \"혼합형\", \"stats\": {\"질서\": 60}}\n```";
        assert_eq!(
            decode(raw).unwrap(),
            json!({"label": "혼합형", "stats": {"질서": 60}})
        );
    }

    #[test]
    fn test_salvage_keeps_nested_objects() {
        let raw = r#"result => {"outer": {"inner": {"x": [1, 2]}}} <= done"#;
        assert_eq!(
            decode(raw).unwrap(),
            json!({"outer": {"inner": {"x": [1, 2]}}})
        );
    }

    #[test]
    fn test_no_braces_is_malformed() {
        let err = decode("no braces here").unwrap_err();
        assert_eq!(
            err,
            DecodeError::Malformed {
                raw: "no braces here".to_string()
            }
        );
    }

    #[test]
    fn test_closing_before_opening_is_malformed() {
        let err = decode("} backwards {").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.raw(), "} backwards {");
    }

    #[test]
    fn test_only_opening_brace_is_malformed() {
        assert!(matches!(
            decode("{ never closed").unwrap_err(),
            DecodeError::Malformed { .. }
        ));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.raw(), "");
    }

    #[test]
    fn test_bad_span_is_invalid_content() {
        let err = decode("{not json}").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidContent {
                raw: "{not json}".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_content_keeps_full_raw_text() {
        let raw = "prefix {\"a\": } suffix";
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidContent { .. }));
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn test_trailing_brace_in_prose_breaks_salvage() {
        // first `{` .. last `}` includes the prose brace
        let raw = r#"{"a": 1} and then } more"#;
        assert!(matches!(
            decode(raw).unwrap_err(),
            DecodeError::InvalidContent { .. }
        ));
    }

    #[test]
    fn test_any_shape_is_accepted() {
        assert_eq!(
            decode(r#"{"unexpected":"shape"}"#).unwrap(),
            json!({"unexpected": "shape"})
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DecodeError::Malformed { raw: String::new() }.to_string(),
            "Model returned non-JSON."
        );
        assert_eq!(
            DecodeError::InvalidContent { raw: String::new() }.to_string(),
            "Model returned invalid JSON."
        );
    }
}
