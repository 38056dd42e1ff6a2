//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API, camelCase) dalla rappresentazione interna (entities).

pub mod hotel;

pub use hotel::{HotelDTO, HotelWithRoomsDTO, RoomDTO};
