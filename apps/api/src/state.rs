use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::llm_client::Completer;
use crate::survey::votes::VoteSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: LlmClient.
    pub llm: Arc<dyn Completer>,
    /// Resolves bearer tokens. Default: SupabaseAuth.
    pub auth: Arc<dyn Authenticator>,
    /// Stored votes. Default: PgVoteSource.
    pub votes: Arc<dyn VoteSource>,
    pub config: Config,
}
