//! Bearer-token authentication against the Supabase auth service.
//!
//! `AppState` holds an `Arc<dyn Authenticator>`; production uses `SupabaseAuth`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolves an access token to its user.
    async fn user_for_token(&self, token: &str) -> Result<AuthUser, AppError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
/// The scheme is matched case-insensitively.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| unauthorized("Authorization header missing"))?;

    let not_bearer = || unauthorized("Authorization header must be a Bearer token");
    let (scheme, rest) = header
        .split_once(|c: char| c.is_whitespace())
        .ok_or_else(not_bearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") || rest.is_empty() {
        return Err(not_bearer());
    }

    let token = rest.trim();
    if token.is_empty() {
        return Err(unauthorized("Authorization token missing"));
    }
    Ok(token)
}

fn unauthorized(message: &str) -> AppError {
    AppError::Unauthorized(message.to_string())
}

/// Validates tokens with `GET {SUPABASE_URL}/auth/v1/user`.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, service_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }
}

#[async_trait]
impl Authenticator for SupabaseAuth {
    async fn user_for_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let response = self
            .client
            .get(self.user_url())
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!("Auth lookup failed: {e}");
                unauthorized("Invalid or expired token")
            })?;

        if !response.status().is_success() {
            return Err(unauthorized("Invalid or expired token"));
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|_| unauthorized("Invalid or expired token"))
    }
}
