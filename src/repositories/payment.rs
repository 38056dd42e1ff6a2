//! PaymentRepository - Repository per i pagamenti

use super::{PaymentReader, RepositoryError};
use crate::entities::Payment;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

pub struct PaymentRepository {
    connection_pool: MySqlPool,
}

impl PaymentRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl PaymentReader for PaymentRepository {
    #[instrument(skip(self))]
    async fn find_by_ticket(&self, ticket_id: i32) -> Result<Option<Payment>, RepositoryError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            FROM payments
            WHERE ticket_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(payment)
    }
}
