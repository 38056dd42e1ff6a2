//! Common repository traits
//!
//! This module defines the read-only interfaces the hotel listing core depends on.
//! Every trait is object safe so services receive `Arc<dyn Trait>` handles and
//! tests can swap the MySQL repositories with an in-memory store.

use crate::entities::{Enrollment, Hotel, HotelId, HotelWithRooms, Payment, Session, Ticket};
use async_trait::async_trait;

/// Error enumeration for repository failures
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Lookups on hotels and their rooms
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// Returns every hotel, ordered by id (can be empty)
    async fn find_hotels(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Reads a hotel together with its rooms
    ///
    /// # Returns
    /// * `Ok(Some(HotelWithRooms))` - Hotel found, rooms ordered by id (can be empty)
    /// * `Ok(None)` - No hotel with that ID
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError>;
}

#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Enrollment>, RepositoryError>;
}

#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Reads the ticket of an enrollment with its ticket type already loaded
    async fn find_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, RepositoryError>;
}

#[async_trait]
pub trait PaymentReader: Send + Sync {
    async fn find_by_ticket(&self, ticket_id: i32) -> Result<Option<Payment>, RepositoryError>;
}

#[async_trait]
pub trait SessionReader: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError>;
}
