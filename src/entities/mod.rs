//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database; nessuna viene modificata da questo servizio.

pub mod enrollment;
pub mod enums;
pub mod hotel;
pub mod payment;
pub mod session;
pub mod ticket;

// Re-exports per facilitare l'import
pub use enrollment::Enrollment;
pub use enums::TicketStatus;
pub use hotel::{Hotel, HotelId, HotelWithRooms, InvalidHotelId, Room};
pub use payment::Payment;
pub use session::Session;
pub use ticket::{Ticket, TicketType};
