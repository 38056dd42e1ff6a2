#![allow(dead_code)]

use axum_test::TestServer;
use hotels_server::core::{AppState, encode_jwt};
use hotels_server::entities::{Hotel, Room, TicketStatus};
use hotels_server::repositories::{InMemoryStore, Repositories};
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Utente di test con la sua sessione già registrata
pub struct TestUser {
    pub id: i32,
    pub token: String,
}

/// Crea un AppState per i test sopra uno store in memoria
pub fn create_test_state(store: Arc<InMemoryStore>) -> Arc<AppState> {
    Arc::new(AppState::new(
        Repositories::shared(store),
        JWT_SECRET.to_string(),
    ))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = hotels_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Store vuoto + server pronto all'uso
pub fn setup() -> (Arc<InMemoryStore>, TestServer) {
    let store = Arc::new(InMemoryStore::new());
    let server = create_test_server(create_test_state(store.clone()));
    (store, server)
}

/// Genera un JWT token valido SENZA registrare la sessione
pub fn create_test_jwt(user_id: i32) -> String {
    encode_jwt(user_id, JWT_SECRET).expect("Failed to create JWT token")
}

/// Genera un token e la relativa sessione
pub fn create_user_with_session(store: &InMemoryStore, user_id: i32) -> TestUser {
    let token = create_test_jwt(user_id);
    store.add_session(user_id, &token);
    TestUser { id: user_id, token }
}

/// Utente con iscrizione e ticket della tipologia indicata; il pagamento viene
/// registrato solo se il ticket è PAID
pub fn create_user_with_ticket(
    store: &InMemoryStore,
    user_id: i32,
    is_remote: bool,
    includes_hotel: bool,
    status: TicketStatus,
) -> TestUser {
    let user = create_user_with_session(store, user_id);
    let enrollment = store.add_enrollment(user_id);
    let ticket_type = store.add_ticket_type(is_remote, includes_hotel);
    let ticket = store.add_ticket(enrollment.id, ticket_type.id, status);
    if status == TicketStatus::Paid {
        store.add_payment(ticket.id, ticket_type.price);
    }
    user
}

/// Utente con ticket pagato, in presenza, con hotel incluso
pub fn create_entitled_user(store: &InMemoryStore, user_id: i32) -> TestUser {
    create_user_with_ticket(store, user_id, false, true, TicketStatus::Paid)
}

pub fn create_hotel(store: &InMemoryStore) -> Hotel {
    store.add_hotel("Driven Resort", "https://images.example.com/resort.png")
}

pub fn create_room(store: &InMemoryStore, hotel_id: i32) -> Room {
    store.add_room(hotel_id, "Suite 101", 3)
}
