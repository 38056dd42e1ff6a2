//! Hotels server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/hotels", configure_hotel_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes degli hotel (richiedono autenticazione)
fn configure_hotel_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use handlers::*;

    Router::new()
        .route("/", get(list_hotels))
        .route("/{hotel_id}", get(get_hotel_rooms))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
