//! Handlers module - Adattatori HTTP sopra i servizi
//!
//! Ogni handler estrae i parametri della richiesta, chiama il servizio e
//! converte l'esito in risposta (gli errori passano da `AppError`).

pub mod hotel;

pub use hotel::{get_hotel_rooms, list_hotels};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
