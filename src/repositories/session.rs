//! SessionRepository - Repository per le sessioni attive

use super::{RepositoryError, SessionReader};
use crate::entities::Session;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

pub struct SessionRepository {
    connection_pool: MySqlPool,
}

impl SessionRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl SessionReader for SessionRepository {
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, user_id, token, created_at, updated_at FROM sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(session)
    }
}
