pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analysis", post(handlers::handle_analysis))
        .route("/analysis/dev", post(handlers::handle_analysis_dev))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::auth::SupabaseAuth;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::survey::mock::mock_analysis;
    use crate::survey::votes::PgVoteSource;

    fn app(mock_analysis: bool) -> Router {
        let config = Config {
            database_url: "postgres://postgres@localhost:5432/test".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_role_key: "service".to_string(),
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            mock_analysis,
            port: 4000,
            rust_log: "info".to_string(),
        };
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        build_router(AppState {
            llm: Arc::new(LlmClient::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
            )),
            auth: Arc::new(SupabaseAuth::new(
                &config.supabase_url,
                config.supabase_service_role_key.clone(),
            )),
            votes: Arc::new(PgVoteSource::new(pool)),
            config,
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(
            app(false),
            Request::get("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_dev_mock_over_http() {
        let (status, body) = send(
            app(true),
            post_json("/analysis/dev", json!({"votes": [{"question_id": 1, "decision": "A"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"], mock_analysis());
    }

    #[tokio::test]
    async fn test_dev_unknown_question_is_400() {
        let (status, body) = send(
            app(false),
            post_json("/analysis/dev", json!({"votes": [{"questionId": 999, "decision": "A"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "unknown question_id: 999");
    }

    #[tokio::test]
    async fn test_analysis_without_auth_is_401() {
        let (status, body) = send(app(false), post_json("/analysis", json!({"roomId": "r1"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_analysis_empty_body_without_auth_is_401() {
        let (status, body) = send(
            app(false),
            Request::post("/analysis").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Authorization header missing");
    }

    #[tokio::test]
    async fn test_dev_numeric_decision_is_400_naming_the_question() {
        let (status, body) = send(
            app(false),
            post_json("/analysis/dev", json!({"votes": [{"question_id": 1, "decision": 1}]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "invalid decision for question_id: 1 (only A/B accepted)"
        );
    }

    #[tokio::test]
    async fn test_dev_non_array_votes_is_400() {
        for request in [
            post_json("/analysis/dev", json!({"votes": "x"})),
            Request::post("/analysis/dev").body(Body::empty()).unwrap(),
            Request::post("/analysis/dev")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        ] {
            let (status, body) = send(app(false), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["message"], "votes array required");
        }
    }
}
