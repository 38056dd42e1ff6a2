//! Hotel handlers - Endpoint HTTP per hotel e camere

use crate::core::{AppError, AppState, AuthUser};
use crate::dtos::{HotelDTO, HotelWithRoomsDTO};
use crate::entities::{HotelId, InvalidHotelId};
use axum::{
    Extension,
    extract::{Json, Path, State, rejection::PathRejection},
};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_hotels(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthUser>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<Vec<HotelDTO>>, AppError> {
    let hotels = state.hotels.list_hotels(current_user.user_id).await?;
    Ok(Json(hotels.into_iter().map(HotelDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn get_hotel_rooms(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>, // l'errore arriva al client solo dopo il controllo del ticket
    Extension(current_user): Extension<AuthUser>,
) -> Result<Json<HotelWithRoomsDTO>, AppError> {
    let hotel_id = match path {
        Ok(Path(raw)) => HotelId::parse(&raw),
        Err(rejection) => Err(InvalidHotelId(rejection.body_text())),
    };
    let hotel = state
        .hotels
        .list_rooms(hotel_id, current_user.user_id)
        .await?;
    Ok(Json(HotelWithRoomsDTO::from(hotel)))
}
