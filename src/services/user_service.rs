// src/services/user_service.rs
// DOCUMENTATION: Business logic for user accounts
// PURPOSE: Signup, login and public user listings

use crate::config::Config;
use crate::db::UserRepository;
use crate::errors::ApiError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
use crate::services::auth;
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// Create a new account and issue an access token
    /// DOCUMENTATION: The password is hashed before anything touches the
    /// database; a duplicate email surfaces as AlreadyExists (422)
    pub async fn signup(
        pool: &PgPool,
        config: &Config,
        req: SignupRequest,
    ) -> Result<AuthResponse, ApiError> {
        let password_hash = auth::hash_password(&req.password)?;

        let user = UserRepository::create(
            pool,
            &req.name,
            &req.email,
            &password_hash,
            req.image.as_deref(),
        )
        .await?;

        let token = auth::generate_token(user.id, &user.email, config)?;

        log::info!("Signed up user {}", user.id);
        Ok(AuthResponse {
            user_id: user.id,
            email: user.email,
            token,
        })
    }

    /// Verify credentials and issue an access token
    /// DOCUMENTATION: Unknown email and wrong password produce the same
    /// Unauthorized error so responses do not reveal which part failed
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        req: LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, &req.email)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        if !auth::verify_password(&req.password, &user.password_hash)? {
            log::warn!("Failed login attempt for {}", req.email);
            return Err(ApiError::Unauthorized);
        }

        let token = auth::generate_token(user.id, &user.email, config)?;

        log::info!("Logged in user {}", user.id);
        Ok(AuthResponse {
            user_id: user.id,
            email: user.email,
            token,
        })
    }

    /// List all users with their ordered place ids
    /// DOCUMENTATION: Public view only - password hashes never leave the
    /// model layer
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserResponse>, ApiError> {
        let users = UserRepository::list(pool).await?;

        let mut responses = Vec::with_capacity(users.len());
        for user in users {
            let places = UserRepository::place_ids(pool, user.id).await?;
            responses.push(user.to_response(places));
        }

        Ok(responses)
    }
}
