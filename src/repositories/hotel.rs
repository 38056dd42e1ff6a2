//! HotelRepository - Repository per hotel e camere

use super::{HotelReader, RepositoryError};
use crate::entities::{Hotel, HotelId, HotelWithRooms, Room};
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, info, instrument};

// HOTEL REPOSITORY
pub struct HotelRepository {
    connection_pool: MySqlPool,
}

impl HotelRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl HotelReader for HotelRepository {
    #[instrument(skip(self))]
    async fn find_hotels(&self) -> Result<Vec<Hotel>, RepositoryError> {
        debug!("Fetching all hotels");
        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        info!("Found {} hotels", hotels.len());
        Ok(hotels)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError> {
        debug!("Fetching hotel with rooms");
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = ?",
        )
        .bind(hotel_id.get())
        .fetch_optional(&self.connection_pool)
        .await?;

        let Some(hotel) = hotel else {
            debug!("Hotel not found");
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = ?
            ORDER BY id
            "#,
        )
        .bind(hotel.id)
        .fetch_all(&self.connection_pool)
        .await?;

        info!("Hotel found with {} rooms", rooms.len());
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
