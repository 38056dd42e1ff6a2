//! Ticket entities - Ticket e tipologia di ticket

use super::enums::TicketStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TicketType {
    /// Un ticket dà diritto all'hotel solo se è in presenza e include l'alloggio
    pub fn grants_hotel(&self) -> bool {
        self.includes_hotel && !self.is_remote
    }
}

/// Ticket con la sua tipologia già caricata
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}
