//! Entitlement check - l'utente ha diritto a vedere gli hotel?
//!
//! Catena di controlli, in ordine, che si ferma al primo fallimento:
//! 1. iscrizione dell'utente          -> `NoEnrollment`
//! 2. ticket dell'iscrizione          -> `NoTicket`
//! 3. ticket PAID con pagamento       -> `PaymentRequired`
//! 4. tipologia con hotel, non remota -> `HotelNotIncluded`

use super::HotelError;
use crate::repositories::{EnrollmentReader, PaymentReader, TicketReader};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Esito positivo del controllo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub enrollment_id: i32,
    pub ticket_id: i32,
}

#[derive(Clone)]
pub struct EntitlementChecker {
    enrollments: Arc<dyn EnrollmentReader>,
    tickets: Arc<dyn TicketReader>,
    payments: Arc<dyn PaymentReader>,
}

impl EntitlementChecker {
    pub fn new(
        enrollments: Arc<dyn EnrollmentReader>,
        tickets: Arc<dyn TicketReader>,
        payments: Arc<dyn PaymentReader>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            payments,
        }
    }

    #[instrument(skip(self))]
    pub async fn check(&self, user_id: i32) -> Result<Entitlement, HotelError> {
        debug!("Checking hotel entitlement");

        let enrollment = self.enrollments.find_by_user(user_id).await?.ok_or_else(|| {
            warn!("User has no enrollment");
            HotelError::NoEnrollment
        })?;

        let ticket = self
            .tickets
            .find_by_enrollment(enrollment.id)
            .await?
            .ok_or_else(|| {
                warn!(enrollment_id = enrollment.id, "Enrollment has no ticket");
                HotelError::NoTicket
            })?;

        // un ticket non pagato non può avere un pagamento valido: niente lookup
        if !ticket.is_paid() {
            warn!(ticket_id = ticket.id, status = ?ticket.status, "Ticket is not paid");
            return Err(HotelError::PaymentRequired);
        }
        if self.payments.find_by_ticket(ticket.id).await?.is_none() {
            warn!(ticket_id = ticket.id, "Paid ticket has no payment record");
            return Err(HotelError::PaymentRequired);
        }

        if !ticket.ticket_type.grants_hotel() {
            warn!(
                ticket_id = ticket.id,
                is_remote = ticket.ticket_type.is_remote,
                includes_hotel = ticket.ticket_type.includes_hotel,
                "Ticket type does not grant hotel accommodation"
            );
            return Err(HotelError::HotelNotIncluded);
        }

        info!(ticket_id = ticket.id, "Hotel entitlement granted");
        Ok(Entitlement {
            enrollment_id: enrollment.id,
            ticket_id: ticket.id,
        })
    }
}
