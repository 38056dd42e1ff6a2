//! EnrollmentRepository - Repository per le iscrizioni

use super::{EnrollmentReader, RepositoryError};
use crate::entities::Enrollment;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

pub struct EnrollmentRepository {
    connection_pool: MySqlPool,
}

impl EnrollmentRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl EnrollmentReader for EnrollmentRepository {
    /// Ogni utente ha al massimo un'iscrizione (vincolo unique su user_id)
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Enrollment>, RepositoryError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, name, created_at, updated_at FROM enrollments WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(enrollment)
    }
}
