//! Hotel entities - Hotel, camere e identificativo validato

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hotel con tutte le sue camere (la lista può essere vuota)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

/// Identificativo di un hotel: intero strettamente positivo
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HotelId(i32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid hotel id")]
pub struct InvalidHotelId(pub String);

impl HotelId {
    pub fn new(id: i32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Accetta solo cifre ASCII (niente segno, spazi o decimali) che stiano in un i32 positivo
    pub fn parse(raw: &str) -> Result<Self, InvalidHotelId> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidHotelId(raw.to_string()));
        }
        raw.parse::<i32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidHotelId(raw.to_string()))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for HotelId {
    type Err = InvalidHotelId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
