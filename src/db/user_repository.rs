// src/db/user_repository.rs
// DOCUMENTATION: Database access layer for users
// PURPOSE: Account rows and the per-user ordered place list

use crate::errors::ApiError;
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    /// DOCUMENTATION: A duplicate email violates the unique constraint
    /// and maps to AlreadyExists (422) rather than a generic 500
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        image: Option<&str>,
    ) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, image, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(image)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                log::warn!("Signup attempted with existing email: {}", email);
                ApiError::AlreadyExists("User".to_string())
            }
            _ => {
                log::error!("Failed to create user: {}", e);
                ApiError::DatabaseError(e.to_string())
            }
        })?;

        log::info!("Created user {}", user.id);
        Ok(user)
    }

    /// Find a user by email
    /// DOCUMENTATION: Used by login; absence is not an error here so the
    /// caller can produce a non-leaking credential failure
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, image, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching user by email: {}", e);
            ApiError::DatabaseError(e.to_string())
        })
    }

    /// Retrieve user by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, image, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching user {}: {}", id, e);
            ApiError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("User not found: {}", id);
            ApiError::NotFound(format!("a user for id {}", id))
        })
    }

    /// Retrieve all users
    /// DOCUMENTATION: Used for GET /api/users endpoint
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, image, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Database error listing users: {}", e);
            ApiError::DatabaseError(e.to_string())
        })
    }

    /// Ordered ids of the places a user owns
    pub async fn place_ids(pool: &PgPool, user_id: Uuid) -> Result<Vec<Uuid>, ApiError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT place_id
            FROM user_places
            WHERE user_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Database error listing place ids for user {}: {}", user_id, e);
            ApiError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
