use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One recorded decision for one catalog question.
///
/// Both fields are untrusted: `question_id` may be NULL in storage or absent
/// from a request body, and `decision` is only interpreted by the prompt
/// compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vote {
    #[serde(alias = "questionId", default)]
    pub question_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_decision")]
    pub decision: String,
}

impl Vote {
    pub fn new(question_id: i64, decision: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id),
            decision: decision.into(),
        }
    }
}

/// Accepts any JSON value for `decision`. Strings pass through; `null`
/// becomes empty and anything else its JSON text, so the compiler rejects it
/// against the question id instead of the body failing to parse.
fn lenient_decision<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
