//! InMemoryStore - Implementazione in memoria di tutti i repository
//!
//! Usata come test double al posto di MySQL: stesse interfacce, stessi ordinamenti
//! (hotel e camere per id). I metodi `add_*` servono a popolare i dati come farebbero
//! le factory dei test di integrazione.

use super::{
    EnrollmentReader, HotelReader, PaymentReader, RepositoryError, SessionReader, TicketReader,
};
use crate::entities::{
    Enrollment, Hotel, HotelId, HotelWithRooms, Payment, Room, Session, Ticket, TicketStatus,
    TicketType,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};

#[derive(Default)]
pub struct InMemoryStore {
    next_id: AtomicI32,
    enrollments: DashMap<i32, Enrollment>,
    ticket_types: DashMap<i32, TicketType>,
    tickets: DashMap<i32, Ticket>,
    payments: DashMap<i32, Payment>,
    hotels: DashMap<i32, Hotel>,
    rooms: DashMap<i32, Room>,
    // Key: token
    sessions: DashMap<String, Session>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    pub fn add_enrollment(&self, user_id: i32) -> Enrollment {
        let now = Self::now();
        let enrollment = Enrollment {
            id: self.next_id(),
            user_id,
            name: format!("Enrollment of user {user_id}"),
            created_at: now,
            updated_at: now,
        };
        self.enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    pub fn add_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketType {
        let now = Self::now();
        let ticket_type = TicketType {
            id: self.next_id(),
            name: format!("remote={is_remote} hotel={includes_hotel}"),
            price: if includes_hotel { 60000 } else { 25000 },
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        };
        self.ticket_types.insert(ticket_type.id, ticket_type.clone());
        ticket_type
    }

    /// Panics if the ticket type was never added: it is a seeding mistake, not a runtime case
    pub fn add_ticket(&self, enrollment_id: i32, ticket_type_id: i32, status: TicketStatus) -> Ticket {
        let ticket_type = self
            .ticket_types
            .get(&ticket_type_id)
            .map(|t| t.value().clone())
            .unwrap_or_else(|| panic!("ticket type {ticket_type_id} was not seeded"));
        let now = Self::now();
        let ticket = Ticket {
            id: self.next_id(),
            enrollment_id,
            status,
            ticket_type,
            created_at: now,
            updated_at: now,
        };
        self.tickets.insert(ticket.id, ticket.clone());
        ticket
    }

    pub fn add_payment(&self, ticket_id: i32, value: i32) -> Payment {
        let now = Self::now();
        let payment = Payment {
            id: self.next_id(),
            ticket_id,
            value,
            card_issuer: "VISA".to_string(),
            card_last_digits: "4242".to_string(),
            created_at: now,
            updated_at: now,
        };
        self.payments.insert(payment.id, payment.clone());
        payment
    }

    pub fn add_hotel(&self, name: &str, image: &str) -> Hotel {
        let now = Self::now();
        let hotel = Hotel {
            id: self.next_id(),
            name: name.to_string(),
            image: image.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    pub fn add_room(&self, hotel_id: i32, name: &str, capacity: i32) -> Room {
        let now = Self::now();
        let room = Room {
            id: self.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        self.rooms.insert(room.id, room.clone());
        room
    }

    pub fn add_session(&self, user_id: i32, token: &str) -> Session {
        let now = Self::now();
        let session = Session {
            id: self.next_id(),
            user_id,
            token: token.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }
}

#[async_trait]
impl HotelReader for InMemoryStore {
    async fn find_hotels(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|h| h.value().clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError> {
        let Some(hotel) = self.hotels.get(&hotel_id.get()).map(|h| h.value().clone()) else {
            return Ok(None);
        };
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| r.hotel_id == hotel.id)
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryStore {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Enrollment>, RepositoryError> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.value().clone()))
    }
}

#[async_trait]
impl TicketReader for InMemoryStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, RepositoryError> {
        Ok(self
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .map(|t| t.value().clone()))
    }
}

#[async_trait]
impl PaymentReader for InMemoryStore {
    async fn find_by_ticket(&self, ticket_id: i32) -> Result<Option<Payment>, RepositoryError> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| p.ticket_id == ticket_id)
            .map(|p| p.value().clone())
            .collect();
        payments.sort_by_key(|p| p.id);
        Ok(payments.into_iter().next())
    }
}

#[async_trait]
impl SessionReader for InMemoryStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        Ok(self.sessions.get(token).map(|s| s.value().clone()))
    }
}
