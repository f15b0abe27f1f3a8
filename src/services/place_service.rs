// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Validation, ownership authorization and the coupled
// place/user-list mutations

use crate::db::{PlaceRepository, UserRepository};
use crate::errors::ApiError;
use crate::models::{CreatePlaceRequest, DeleteResponse, PlaceResponse, UpdatePlaceRequest};
use crate::services::GeocodingClient;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PlaceService;

impl PlaceService {
    /// Get a place by id
    pub async fn get_place(pool: &PgPool, place_id: Uuid) -> Result<PlaceResponse, ApiError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        Ok(place.to_response())
    }

    /// List all places created by a user, in the owner's list order
    /// DOCUMENTATION: An empty result is reported as NotFound rather
    /// than an empty list, matching the API contract clients rely on
    pub async fn list_places_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<PlaceResponse>, ApiError> {
        let places = PlaceRepository::list_by_user(pool, user_id).await?;

        if places.is_empty() {
            return Err(ApiError::NotFound(format!("places for user id {}", user_id)));
        }

        Ok(places.iter().map(|p| p.to_response()).collect())
    }

    /// Create a new place for the authenticated requester
    /// DOCUMENTATION: geocode -> owner check -> atomic dual write.
    /// Shape validation happens in the handler before this is called.
    pub async fn create_place(
        pool: &PgPool,
        geocoder: &GeocodingClient,
        requester_id: Uuid,
        req: CreatePlaceRequest,
    ) -> Result<PlaceResponse, ApiError> {
        let location = geocoder.geocode(&req.address).await?;

        // The owner must exist before we write anything
        let owner = UserRepository::get_by_id(pool, requester_id).await?;

        let place = PlaceRepository::create_with_owner(pool, &req, location, owner.id).await?;
        Ok(place.to_response())
    }

    /// Update title and description of a place
    /// DOCUMENTATION: Only the creator may update; authorization is
    /// checked before any write so a rejected request mutates nothing
    pub async fn update_place(
        pool: &PgPool,
        requester_id: Uuid,
        place_id: Uuid,
        req: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, ApiError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;

        if place.creator != requester_id {
            log::warn!(
                "User {} attempted to edit place {} owned by {}",
                requester_id,
                place_id,
                place.creator
            );
            return Err(ApiError::Unauthorized);
        }

        let updated = PlaceRepository::update(pool, place_id, &req.title, &req.description).await?;
        Ok(updated.to_response())
    }

    /// Delete a place, removing it from the owner's place list
    /// DOCUMENTATION: After the transaction commits, the image file is
    /// removed best-effort - a failed unlink is logged and never rolls
    /// back the data mutation
    pub async fn delete_place(
        pool: &PgPool,
        requester_id: Uuid,
        place_id: Uuid,
    ) -> Result<DeleteResponse, ApiError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        let owner = UserRepository::get_by_id(pool, place.creator).await?;

        if owner.id != requester_id {
            log::warn!(
                "User {} attempted to delete place {} owned by {}",
                requester_id,
                place_id,
                owner.id
            );
            return Err(ApiError::Unauthorized);
        }

        PlaceRepository::delete_with_owner(pool, place_id, owner.id).await?;

        remove_image_file(&place.image).await;

        Ok(DeleteResponse {
            message: "Deleted place.".to_string(),
        })
    }
}

/// Best-effort removal of a stored image file
/// DOCUMENTATION: Failure leaves an orphaned file, which is accepted;
/// it is logged so the inconsistency stays observable
pub async fn remove_image_file(path: &str) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        log::warn!("Failed to remove image file {}: {}", path, e);
    }
}
