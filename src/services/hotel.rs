//! Hotel services - Elenco hotel e camere per utenti con diritto all'alloggio

use super::{EntitlementChecker, HotelError};
use crate::entities::{Hotel, HotelId, HotelWithRooms, InvalidHotelId};
use crate::repositories::{HotelReader, Repositories};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct HotelService {
    entitlement: EntitlementChecker,
    hotels: Arc<dyn HotelReader>,
}

impl HotelService {
    pub fn new(entitlement: EntitlementChecker, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            entitlement,
            hotels,
        }
    }

    pub fn from_repositories(repos: &Repositories) -> Self {
        Self::new(
            EntitlementChecker::new(
                repos.enrollments.clone(),
                repos.tickets.clone(),
                repos.payments.clone(),
            ),
            repos.hotels.clone(),
        )
    }

    /// Tutti gli hotel; una lista vuota è un risultato valido
    #[instrument(skip(self))]
    pub async fn list_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, HotelError> {
        self.entitlement.check(user_id).await?;

        let hotels = self.hotels.find_hotels().await?;
        info!("Listing {} hotels", hotels.len());
        Ok(hotels)
    }

    /// Hotel con le sue camere.
    /// Un `hotel_id` non valido viene segnalato solo dopo il controllo del diritto all'alloggio.
    #[instrument(skip(self))]
    pub async fn list_rooms(
        &self,
        hotel_id: Result<HotelId, InvalidHotelId>,
        user_id: i32,
    ) -> Result<HotelWithRooms, HotelError> {
        self.entitlement.check(user_id).await?;

        let hotel_id = hotel_id.inspect_err(|e| {
            warn!("Rejecting request: {}", e);
        })?;
        debug!(hotel_id = %hotel_id, "Looking up hotel");

        let hotel = self
            .hotels
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| {
                warn!(hotel_id = %hotel_id, "Hotel not found");
                HotelError::NotFound(hotel_id)
            })?;

        info!(hotel_id = %hotel_id, "Hotel found with {} rooms", hotel.rooms.len());
        Ok(hotel)
    }
}
