//! Errori del servizio hotel - esito tipizzato di ogni operazione

use crate::entities::{HotelId, InvalidHotelId};
use crate::repositories::RepositoryError;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    #[error("user has no enrollment")]
    NoEnrollment,

    #[error("enrollment has no ticket")]
    NoTicket,

    #[error("ticket has not been paid")]
    PaymentRequired,

    #[error("ticket does not include hotel accommodation")]
    HotelNotIncluded,

    #[error(transparent)]
    BadRequest(#[from] InvalidHotelId),

    #[error("hotel {0} not found")]
    NotFound(HotelId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HotelError {
    /// Codice HTTP da restituire al client per questo esito
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoEnrollment | Self::NoTicket | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            Self::HotelNotIncluded => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            // nessuna categoria: il client riceve "niente da mostrare"
            Self::Repository(_) => StatusCode::NO_CONTENT,
        }
    }
}
