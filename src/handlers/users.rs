// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user accounts
// PURPOSE: Signup, login and user listing endpoints

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{LoginRequest, SignupRequest};
use crate::services::UserService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/users
/// List all users (public fields and place ids only)
pub async fn list_users(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let users = UserService::list_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/users/signup
/// Create an account and return an access token
pub async fn signup(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<SignupRequest>,
) -> Result<impl Responder, ApiError> {
    if let Err(e) = body.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let auth = UserService::signup(pool.get_ref(), &config, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(auth))
}

/// POST /api/users/login
/// Verify credentials and return an access token
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, ApiError> {
    if let Err(e) = body.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let auth = UserService::login(pool.get_ref(), &config, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(auth))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(list_users))
            .route("/signup", web::post().to(signup))
            .route("/login", web::post().to(login)),
    );
}
