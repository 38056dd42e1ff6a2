//! Payment entity - Pagamento associato a un ticket

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Payment {
    pub id: i32,
    pub ticket_id: i32,
    /// Importo pagato, in centesimi
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
