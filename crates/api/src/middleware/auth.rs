//! # Authentication Middleware
//!
//! This module validates the bearer tokens that the main ebe application
//! issues at login. Every waiting-room and meeting route is layered with
//! [`require_auth`], which decodes the token and stores the caller's claims
//! in request extensions for handlers to read.
//!
//! Token issuance is not this service's job; the [`issue_token`] helper
//! exists so tests and local tooling can mint tokens against the same
//! secret and claim layout.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use ebe_core::errors::EbeError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Claims carried by an ebe bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id
    pub sub: Uuid,
    /// Display username, carried for logging and convenience
    pub username: String,
    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Extracts and validates the JWT from the Authorization header
///
/// On success the decoded [`Claims`] are inserted into request extensions,
/// where handlers pick them up via `Extension<Claims>`. Any missing,
/// malformed, or wrongly-signed token short-circuits with a 401 response.
pub async fn require_auth(
    State(state): State<Arc<ApiState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| EbeError::Authentication("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| EbeError::Authentication("Malformed authorization header".to_string()))?;

    let claims = decode_token(&state.jwt_secret, token)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Decodes and validates a bearer token against the configured secret
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, EbeError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| EbeError::Authentication(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Signs a token for the given user, valid for `ttl_seconds`
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    username: &str,
    ttl_seconds: i64,
) -> Result<String, EbeError> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (Utc::now().timestamp() + ttl_seconds) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| EbeError::Authentication(format!("Failed to sign token: {}", e)))
}
