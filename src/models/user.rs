// src/models/user.rs
// DOCUMENTATION: Core data structures for users
// PURPOSE: Account models, signup/login DTOs and API responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete user record from the database
/// DOCUMENTATION: Maps directly to the users table in PostgreSQL
/// The password hash never leaves this struct; API responses are built
/// through to_response()
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across users)
    pub email: String,

    /// Argon2id PHC-formatted password hash
    pub password_hash: String,

    /// Optional avatar image path
    pub image: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for POST /api/users/signup
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name (required)
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,

    /// Email address (required, must be well-formed)
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    /// Plaintext password (required, at least 6 characters)
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    /// Optional avatar image path from the upload middleware
    #[serde(default)]
    pub image: Option<String>,
}

/// Request DTO for POST /api/users/login
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Response DTO for user listings
/// DOCUMENTATION: Public view of a user - no credential material,
/// place ids in the user's list order
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,

    /// Ordered ids of the places this user owns
    pub places: Vec<Uuid>,
}

/// Response DTO for successful signup/login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: Uuid,
    pub email: String,

    /// Signed access token for the Authorization header
    pub token: String,
}

impl User {
    /// Convert User to UserResponse for API
    /// DOCUMENTATION: Maps database model to public response DTO,
    /// attaching the caller-supplied ordered place list
    pub fn to_response(&self, places: Vec<Uuid>) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            image: self.image.clone(),
            places,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            name: "Max Schwarz".to_string(),
            email: "max@example.com".to_string(),
            password: "secret123".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(valid_signup().validate().is_ok());

        let mut bad_email = valid_signup();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut short_password = valid_signup();
        short_password.password = "12345".to_string();
        assert!(short_password.validate().is_err());

        let mut empty_name = valid_signup();
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_response_excludes_credentials() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: "Max Schwarz".to_string(),
            email: "max@example.com".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        };
        let place_id = Uuid::new_v4();

        let response = user.to_response(vec![place_id]);
        let json = serde_json::to_value(&response).expect("serialization should succeed");

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["places"][0], serde_json::json!(place_id));
    }
}
