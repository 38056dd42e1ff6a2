//! Services module - Logica applicativa del servizio hotel
//!
//! Il controllo del diritto all'alloggio e l'elenco di hotel/camere vivono qui,
//! indipendenti da axum: gli handler HTTP si limitano a tradurre gli esiti.

pub mod entitlement;
pub mod error;
pub mod hotel;

// Re-exports per facilitare l'import
pub use entitlement::{Entitlement, EntitlementChecker};
pub use error::HotelError;
pub use hotel::HotelService;
