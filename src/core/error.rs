use crate::services::HotelError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, "")
    }
}

impl From<HotelError> for AppError {
    fn from(err: HotelError) -> Self {
        let status = err.status();
        match err {
            HotelError::NoEnrollment => Self::new(status, "Enrollment not found"),
            HotelError::NoTicket => Self::new(status, "Ticket not found"),
            HotelError::PaymentRequired => {
                Self::new(status, "You need to pay the ticket to access hotels")
            }
            HotelError::HotelNotIncluded => {
                Self::new(status, "Your ticket does not include hotel accommodation")
            }
            HotelError::BadRequest(e) => {
                Self::new(status, "Invalid hotel id").with_details(e.to_string())
            }
            HotelError::NotFound(_) => Self::new(status, "Hotel not found"),
            HotelError::Repository(e) => {
                error!("Unexpected repository error: {}", e);
                Self::new(status, "")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 204 non può avere un body
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
