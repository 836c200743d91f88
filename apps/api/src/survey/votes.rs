//! Vote source — loads a user's stored votes for a room.
//!
//! `AppState` holds an `Arc<dyn VoteSource>`; production uses `PgVoteSource`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::vote::Vote;

#[async_trait]
pub trait VoteSource: Send + Sync {
    /// Returns every vote `user_id` cast in `room_id`. May be empty.
    async fn load_votes(&self, room_id: &str, user_id: Uuid) -> Result<Vec<Vote>, AppError>;
}

/// Reads the `votes` table through sqlx.
pub struct PgVoteSource {
    pool: PgPool,
}

impl PgVoteSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteSource for PgVoteSource {
    async fn load_votes(&self, room_id: &str, user_id: Uuid) -> Result<Vec<Vote>, AppError> {
        // room_id is compared as text so both uuid and text columns work.
        // NULL question_id stays None and NULL decision becomes '', so both
        // surface as compile errors rather than row decode failures.
        let votes = sqlx::query_as::<_, Vote>(
            r#"
            SELECT question_id::bigint AS question_id,
                   COALESCE(decision::text, '') AS decision
            FROM votes
            WHERE room_id::text = $1 AND user_id = $2
            "#,
        )
        .bind(room_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Loaded {} votes for user {} in room {}",
            votes.len(),
            user_id,
            room_id
        );
        Ok(votes)
    }
}
