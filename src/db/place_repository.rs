// src/db/place_repository.rs
// DOCUMENTATION: Database access layer for places
// PURPOSE: Abstract database operations from business logic

use crate::errors::ApiError;
use crate::models::{Coordinates, CreatePlaceRequest, Place};
use sqlx::PgPool;
use uuid::Uuid;

/// PlaceRepository: All database operations for places
/// DOCUMENTATION: The create and delete paths touch two tables - places
/// and the owner's user_places list - and always do so inside a single
/// transaction so partial state is never observable
pub struct PlaceRepository;

impl PlaceRepository {
    /// Retrieve place by ID
    /// DOCUMENTATION: Used for GET /api/places/{id} endpoint
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Place, ApiError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            SELECT id, title, description, address, latitude, longitude,
                   image, creator, created_at, updated_at
            FROM places
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching place: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Place not found: {}", id);
            ApiError::NotFound(format!("a place for id {}", id))
        })?;

        Ok(place)
    }

    /// Retrieve all places owned by a user, in the owner's list order
    /// DOCUMENTATION: Used for GET /api/places/user/{uid} endpoint
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Place>, ApiError> {
        let places = sqlx::query_as::<_, Place>(
            r#"
            SELECT p.id, p.title, p.description, p.address, p.latitude, p.longitude,
                   p.image, p.creator, p.created_at, p.updated_at
            FROM places p
            JOIN user_places up ON up.place_id = p.id
            WHERE up.user_id = $1
            ORDER BY up.position ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Database error listing places for user {}: {}", user_id, e);
            ApiError::DatabaseError(e.to_string())
        })?;

        Ok(places)
    }

    /// Create a place and append it to the owner's place list
    /// DOCUMENTATION: Both writes run in one transaction - the place row
    /// and the user_places entry commit together or not at all
    pub async fn create_with_owner(
        pool: &PgPool,
        req: &CreatePlaceRequest,
        location: Coordinates,
        creator: Uuid,
    ) -> Result<Place, ApiError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin create transaction: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?;

        let place = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (title, description, address, latitude, longitude, image, creator)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, address, latitude, longitude,
                      image, creator, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.address)
        .bind(location.lat)
        .bind(location.lng)
        .bind(&req.image)
        .bind(creator)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            log::error!("Failed to insert place: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO user_places (user_id, place_id, position)
            VALUES (
                $1, $2,
                (SELECT COALESCE(MAX(position) + 1, 0) FROM user_places WHERE user_id = $1)
            )
            "#,
        )
        .bind(creator)
        .bind(place.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            log::error!("Failed to append place {} to owner list: {}", place.id, e);
            ApiError::DatabaseError(e.to_string())
        })?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit place creation: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?;

        log::info!("Created place {} for user {}", place.id, creator);
        Ok(place)
    }

    /// Update the two mutable fields of a place
    /// DOCUMENTATION: Title and description only - address, location,
    /// image and creator are immutable after creation
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Place, ApiError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            UPDATE places
            SET title = $1,
                description = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, title, description, address, latitude, longitude,
                      image, creator, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for place {}: {}", id, e);
            ApiError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(format!("a place for id {}", id)))?;

        log::info!("Updated place: {}", id);
        Ok(place)
    }

    /// Delete a place and remove it from the owner's place list
    /// DOCUMENTATION: Mirror of create_with_owner - both deletes run in
    /// one transaction so readers never observe a dangling reference
    pub async fn delete_with_owner(
        pool: &PgPool,
        place_id: Uuid,
        owner_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin delete transaction: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?;

        sqlx::query("DELETE FROM user_places WHERE user_id = $1 AND place_id = $2")
            .bind(owner_id)
            .bind(place_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to remove place {} from owner list: {}", place_id, e);
                ApiError::DatabaseError(e.to_string())
            })?;

        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(place_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", place_id, e);
                ApiError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            // Deleted concurrently after the service loaded it
            return Err(ApiError::NotFound(format!("a place for id {}", place_id)));
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit place deletion: {}", e);
            ApiError::DatabaseError(e.to_string())
        })?;

        log::info!("Deleted place: {}", place_id);
        Ok(())
    }
}
