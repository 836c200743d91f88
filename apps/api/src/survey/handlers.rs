//! Axum route handlers for the Analysis API.
//!
//! Bodies are taken as raw JSON so shape problems surface through `AppError`
//! rather than axum's plain-text rejections, and so auth is checked before
//! the body is looked at.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::llm_client::CompletionOptions;
use crate::models::vote::Vote;
use crate::state::AppState;
use crate::survey::compiler::compile;
use crate::survey::decoder::decode;
use crate::survey::mock::mock_analysis;
use crate::survey::prompts::ANALYSIS_SYSTEM;
use crate::survey::result::check_analysis;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// Echoed as sent (string or number).
    #[serde(rename = "roomId")]
    pub room_id: Value,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub analysis: Value,
}

#[derive(Debug, Serialize)]
pub struct DevAnalysisResponse {
    pub analysis: Value,
}

/// Unwraps an extracted JSON body. A missing or unparsable body is treated
/// as `null` so the field checks below produce the error.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!("Request body not usable as JSON: {rejection}");
            Value::Null
        }
    }
}

/// `roomId` as the lookup key. Any non-empty string or non-zero number is
/// accepted; the string is used verbatim.
fn room_key(body: &Value) -> Option<(Value, String)> {
    let raw = body.get("roomId")?;
    let key = match raw {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        _ => return None,
    };
    Some((raw.clone(), key))
}

/// `votes` must be a non-empty array of vote objects. Field contents are
/// left for the compiler to judge.
fn request_votes(body: &Value) -> Result<Vec<Vote>, AppError> {
    let items = body
        .get("votes")
        .and_then(Value::as_array)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("votes array required".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item.clone())
                .map_err(|e| AppError::Validation(format!("invalid vote at index {i}: {e}")))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analysis
///
/// Authenticates the caller, loads their votes for the room and returns the
/// model's analysis.
pub async fn handle_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let token = bearer_token(header)?;
    let user = state.auth.user_for_token(token).await?;

    let body = json_body(body);
    let (room_id, room_key) =
        room_key(&body).ok_or_else(|| AppError::Validation("roomId required".to_string()))?;

    let votes = state.votes.load_votes(&room_key, user.id).await?;
    if votes.is_empty() {
        return Err(AppError::Validation("No votes found for user".to_string()));
    }

    info!(
        "Analyzing {} votes for user {} in room {}",
        votes.len(),
        user.id,
        room_key
    );
    let analysis = run_analysis(&state, &votes, &CompletionOptions::analysis()).await?;

    Ok(Json(AnalysisResponse {
        room_id,
        user_id: user.id,
        analysis,
    }))
}

/// POST /analysis/dev
///
/// Takes votes directly in the body; no auth. With `MOCK_ANALYSIS=true` the
/// model is never called.
pub async fn handle_analysis_dev(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DevAnalysisResponse>, AppError> {
    let votes = request_votes(&json_body(body))?;

    if state.config.mock_analysis {
        return Ok(Json(DevAnalysisResponse {
            analysis: mock_analysis(),
        }));
    }

    let analysis = run_analysis(&state, &votes, &CompletionOptions::analysis_dev()).await?;
    Ok(Json(DevAnalysisResponse { analysis }))
}

/// compile → model call → decode. The decoded value is returned as is; a
/// reply that drifts from the contract is only logged.
async fn run_analysis(
    state: &AppState,
    votes: &[Vote],
    options: &CompletionOptions,
) -> Result<Value, AppError> {
    let prompt = compile(votes).inspect_err(|e| warn!("Rejected votes: {e}"))?;

    let reply = state
        .llm
        .complete(prompt.as_str(), ANALYSIS_SYSTEM, options)
        .await?;

    let analysis = decode(&reply)?;

    let issues = check_analysis(&analysis);
    if !issues.is_empty() {
        warn!(
            "Model reply deviates from analysis contract: {}",
            issues.join("; ")
        );
    }

    Ok(analysis)
}
