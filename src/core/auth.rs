use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// Utente autenticato, inserito nelle Extension dal middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

#[instrument(skip(secret))]
pub fn encode_jwt(user_id: i32, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let claim = Claims {
        iat: now.timestamp() as usize,
        exp: (now + expire).timestamp() as usize,
        user_id,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .inspect_err(|e| error!("Failed to encode JWT token: {:?}", e))
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    debug!("Decoding JWT token");
    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .inspect(|data| debug!("JWT token decoded for user {}", data.claims.user_id))
}

/// Estrae il token da un header `Authorization: Bearer <token>`
fn bearer_token(req: &Request) -> Result<&str, AppError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Missing authorization header");
            AppError::unauthorized("Please add the JWT token to the header")
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Invalid authorization header")
        })?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => {
            warn!("Authorization header is not a bearer token");
            Err(AppError::unauthorized("Invalid authorization header"))
        }
    }
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = bearer_token(&req)?.to_owned();

    let token_data = decode_jwt(&token, &state.jwt_secret).map_err(|e| {
        warn!("Failed to decode JWT token: {}", e);
        AppError::unauthorized("Unable to decode token")
    })?;

    // il token deve corrispondere a una sessione ancora presente nel database
    let session = state
        .repositories
        .sessions
        .find_by_token(&token)
        .await
        .map_err(|e| {
            error!("Failed to look up session: {}", e);
            AppError::unauthorized("Unable to verify session")
        })?;

    let user_id = match session {
        Some(session) if session.user_id == token_data.claims.user_id => session.user_id,
        Some(_) => {
            warn!("Session belongs to a different user than the token claims");
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
        None => {
            warn!("No session for user {}", token_data.claims.user_id);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };

    info!("User authenticated: {}", user_id);
    req.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(req).await)
}
