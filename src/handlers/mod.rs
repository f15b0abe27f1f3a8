// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and shared auth extraction

use crate::config::Config;
use crate::errors::ApiError;
use crate::services::auth;
use actix_web::HttpRequest;
use uuid::Uuid;

pub mod health;
pub mod places;
pub mod users;

pub use health::config as health_config;
pub use places::config as places_config;
pub use users::config as users_config;

/// Resolve the authenticated requester from the Authorization header
/// DOCUMENTATION: Expects "Authorization: Bearer <token>"; any missing,
/// malformed or invalid token is Unauthorized. Handlers call this before
/// touching the place service, which only ever sees the resolved id.
pub fn require_auth(req: &HttpRequest, config: &Config) -> Result<Uuid, ApiError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Request to protected route without Authorization header");
            ApiError::Unauthorized
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        log::warn!("Authorization header without Bearer scheme");
        ApiError::Unauthorized
    })?;

    let claims = auth::validate_token(token, config)?;
    Ok(claims.sub)
}
