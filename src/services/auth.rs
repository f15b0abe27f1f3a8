// src/services/auth.rs
// DOCUMENTATION: Access tokens and password hashing
// PURPOSE: HS256 JWT issue/validation and Argon2id credential handling

use crate::config::Config;
use crate::errors::ApiError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject - the user's id
    pub sub: Uuid,
    /// The user's email at issue time
    pub email: String,
    /// Expiration time (UTC Unix timestamp)
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp)
    pub iat: i64,
}

/// Generate an HS256 access token for the given user
/// DOCUMENTATION: Expiry comes from Config::jwt_expiry_hours (1 hour by
/// default, matching the session length the frontend expects)
pub fn generate_token(user_id: Uuid, email: &str, config: &Config) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.jwt_expiry_hours * 3600;

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        log::error!("Failed to sign access token: {}", e);
        ApiError::InternalError
    })
}

/// Validate and decode an access token, returning the embedded Claims
/// DOCUMENTATION: Validates signature and expiration; any failure maps
/// to Unauthorized without detail
pub fn validate_token(token: &str, config: &Config) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized)
}

/// Hash a plaintext password using Argon2id with a random salt
/// DOCUMENTATION: Returns the PHC-formatted hash string (algorithm,
/// params and salt are embedded in the hash itself)
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            log::error!("Failed to hash password: {}", e);
            ApiError::InternalError
        })
}

/// Verify a plaintext password against a stored PHC-formatted hash
/// DOCUMENTATION: Returns Ok(true) on match, Ok(false) on mismatch
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        log::error!("Stored password hash is malformed: {}", e);
        ApiError::InternalError
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => {
            log::error!("Password verification failed: {}", e);
            Err(ApiError::InternalError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::from_env();
        config.jwt_secret = "test-secret-that-is-long-enough-for-hmac".to_string();
        config.jwt_expiry_hours = 1;
        config
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = generate_token(user_id, "max@example.com", &config)
            .expect("token generation should succeed");
        let claims = validate_token(&token, &config).expect("token validation should succeed");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "max@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create a token expired well beyond the default leeway
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "max@example.com".to_string(),
            exp: now - 300,
            iat: now - 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = test_config();
        let mut config_b = test_config();
        config_b.jwt_secret = "another-secret-entirely".to_string();

        let token = generate_token(Uuid::new_v4(), "max@example.com", &config_a)
            .expect("token generation should succeed");

        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("secret123").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password("secret123", &hash).expect("verify should succeed"));
        assert!(!verify_password("wrong-password", &hash).expect("verify should succeed"));
    }
}
