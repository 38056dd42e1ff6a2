//! Hotel DTOs - Data Transfer Objects per hotel e camere

use crate::entities::{Hotel, HotelWithRooms, Room};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelDTO {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDTO {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDTO {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDTO {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Hotel con le camere annidate sotto la chiave `Rooms`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HotelWithRoomsDTO {
    #[serde(flatten)]
    pub hotel: HotelDTO,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDTO>,
}

impl From<HotelWithRooms> for HotelWithRoomsDTO {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: HotelDTO::from(value.hotel),
            rooms: value.rooms.into_iter().map(RoomDTO::from).collect(),
        }
    }
}
