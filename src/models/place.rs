// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Geocoded coordinate pair
/// DOCUMENTATION: Produced by the geocoding client, embedded in place
/// responses as `location`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Represents a complete place record from the database
/// DOCUMENTATION: This struct maps directly to the places table in PostgreSQL
/// Used for internal operations and database queries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Place {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Place title - required field for all places
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Postal address the coordinates were resolved from
    pub address: String,

    /// Geocoded latitude
    pub latitude: f64,

    /// Geocoded longitude
    pub longitude: f64,

    /// Path of the uploaded image, as stored by the upload middleware
    pub image: String,

    /// Id of the owning user - exactly one per place
    pub creator: Uuid,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Data transfer object for POST /api/places endpoint
/// The image field carries the path produced by the upload middleware;
/// the creator comes from the access token, never from the body
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePlaceRequest {
    /// Place title (required)
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: String,

    /// Description (required, at least 5 characters)
    #[validate(length(min = 5, message = "description must be at least 5 characters"))]
    pub description: String,

    /// Postal address to geocode (required)
    #[validate(length(min = 1, max = 500, message = "address must not be empty"))]
    pub address: String,

    /// Stored image path reference (required)
    #[validate(length(min = 1, message = "image reference must not be empty"))]
    pub image: String,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: Data transfer object for PATCH /api/places/{id} endpoint
/// Title and description are the only mutable fields
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    /// Updated title
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: String,

    /// Updated description
    #[validate(length(min = 5, message = "description must be at least 5 characters"))]
    pub description: String,
}

/// Response DTO for API responses
/// DOCUMENTATION: Data transfer object for place endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub address: String,

    /// Geocoded coordinates
    pub location: Coordinates,

    /// Stored image path
    pub image: String,

    /// Owning user id
    pub creator: Uuid,

    /// Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Confirmation DTO returned by DELETE /api/places/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl Place {
    /// Convert Place to PlaceResponse for API
    /// DOCUMENTATION: Maps database model to API response DTO
    pub fn to_response(&self) -> PlaceResponse {
        PlaceResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            location: Coordinates {
                lat: self.latitude,
                lng: self.longitude,
            },
            image: self.image.clone(),
            creator: self.creator,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Empire State Building".to_string(),
            description: "One of the most famous skyscrapers in the world".to_string(),
            address: "20 W 34th St, New York, NY".to_string(),
            image: "uploads/images/empire.jpg".to_string(),
        }
    }

    #[test]
    fn test_create_request_validation() {
        assert!(valid_create_request().validate().is_ok());

        let mut missing_title = valid_create_request();
        missing_title.title = String::new();
        assert!(missing_title.validate().is_err());

        let mut short_description = valid_create_request();
        short_description.description = "tiny".to_string();
        assert!(short_description.validate().is_err());

        let mut missing_address = valid_create_request();
        missing_address.address = String::new();
        assert!(missing_address.validate().is_err());

        let mut missing_image = valid_create_request();
        missing_image.image = String::new();
        assert!(missing_image.validate().is_err());
    }

    #[test]
    fn test_update_request_validation() {
        let valid = UpdatePlaceRequest {
            title: "New title".to_string(),
            description: "A longer description".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = UpdatePlaceRequest {
            title: String::new(),
            description: "ok-ish".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_to_response_maps_location() {
        let now = Utc::now();
        let place = Place {
            id: Uuid::new_v4(),
            title: "Empire State Building".to_string(),
            description: "Famous skyscraper".to_string(),
            address: "20 W 34th St, New York, NY".to_string(),
            latitude: 40.7484,
            longitude: -73.9857,
            image: "uploads/images/empire.jpg".to_string(),
            creator: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };

        let response = place.to_response();
        assert_eq!(response.id, place.id);
        assert_eq!(response.location.lat, 40.7484);
        assert_eq!(response.location.lng, -73.9857);
        assert_eq!(response.creator, place.creator);
        assert_eq!(response.image, place.image);
    }
}
