//! TicketRepository - Repository per i ticket (con tipologia)

use super::{RepositoryError, TicketReader};
use crate::entities::{Ticket, TicketStatus, TicketType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use tracing::{debug, instrument};

/// Riga piatta della join tickets ⨝ ticket_types
#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_id: i32,
    type_name: String,
    type_price: i32,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Self {
            id: row.id,
            enrollment_id: row.enrollment_id,
            status: row.status,
            ticket_type: TicketType {
                id: row.type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.type_is_remote,
                includes_hotel: row.type_includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct TicketRepository {
    connection_pool: MySqlPool,
}

impl TicketRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl TicketReader for TicketRepository {
    #[instrument(skip(self))]
    async fn find_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, RepositoryError> {
        debug!("Fetching ticket with its type");
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                t.id,
                t.enrollment_id,
                t.status,
                t.created_at,
                t.updated_at,
                tt.id AS type_id,
                tt.name AS type_name,
                tt.price AS type_price,
                tt.is_remote AS type_is_remote,
                tt.includes_hotel AS type_includes_hotel,
                tt.created_at AS type_created_at,
                tt.updated_at AS type_updated_at
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = ?
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row.map(Ticket::from))
    }
}
