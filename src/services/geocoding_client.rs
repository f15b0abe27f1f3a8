// src/services/geocoding_client.rs
// DOCUMENTATION: Google Geocoding API client
// PURPOSE: Resolve postal addresses into latitude/longitude pairs

use crate::errors::ApiError;
use crate::models::Coordinates;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Geocoding API client
/// DOCUMENTATION: Handles authentication and API calls to the Google
/// Geocoding endpoint; treated as an opaque success/failure collaborator
pub struct GeocodingClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for the Geocoding API
    base_url: String,
}

/// Response from the Geocoding API
#[derive(Debug, Deserialize, Serialize)]
pub struct GeocodeResponse {
    /// Results array from API
    pub results: Vec<GeocodeResult>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Individual geocoding result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResult {
    /// Canonical address as resolved by Google
    pub formatted_address: Option<String>,
    /// Geographic location
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeGeometry {
    pub location: GeocodeLocation,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeLocation {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(api_key: String) -> Self {
        GeocodingClient {
            client: Client::new(),
            api_key,
            base_url: "https://maps.googleapis.com/maps/api/geocode".to_string(),
        }
    }

    /// Resolve a free-text address into coordinates
    /// DOCUMENTATION: Single request, no retries - failures surface
    /// immediately to the caller
    ///
    /// # Arguments
    /// * `address` - Postal address string as entered by the user
    ///
    /// # Returns
    /// Coordinates of the first (best) match
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, ApiError> {
        let url = format!("{}/json", self.base_url);
        let params = [("address", address), ("key", &self.api_key)];

        log::debug!("Geocoding address: {}", address);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Geocoding request failed: {}", e);
                ApiError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(ApiError::ExternalApiError(
                "Geocoding request failed".to_string(),
            ));
        }

        let api_response: GeocodeResponse = response.json().await.map_err(|e| {
            log::error!("Geocoding response parse error: {}", e);
            ApiError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        extract_coordinates(api_response, address)
    }
}

/// Map a geocoding API response to coordinates
/// DOCUMENTATION: Separated from the HTTP call so status handling is
/// unit-testable without network access
fn extract_coordinates(response: GeocodeResponse, address: &str) -> Result<Coordinates, ApiError> {
    match response.status.as_str() {
        "OK" => {
            let result = response.results.first().ok_or_else(|| {
                log::warn!("Geocoder returned OK with no results for: {}", address);
                ApiError::GeocodingError(address.to_string())
            })?;

            log::debug!(
                "Geocoded '{}' -> ({}, {})",
                address,
                result.geometry.location.lat,
                result.geometry.location.lng
            );

            Ok(Coordinates {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            })
        }
        "ZERO_RESULTS" => {
            log::warn!("Geocoder found no match for address: {}", address);
            Err(ApiError::GeocodingError(address.to_string()))
        }
        "OVER_QUERY_LIMIT" => {
            log::error!("Geocoding API quota exceeded");
            Err(ApiError::RateLimitExceeded)
        }
        "REQUEST_DENIED" | "INVALID_REQUEST" => {
            let msg = response
                .error_message
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("Geocoding request denied: {}", msg);
            Err(ApiError::ExternalApiError(msg))
        }
        other => {
            let msg = response
                .error_message
                .unwrap_or_else(|| format!("Unknown status: {}", other));
            log::error!("Geocoding API unexpected status: {}", msg);
            Err(ApiError::ExternalApiError(msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(status: &str, results: Vec<GeocodeResult>) -> GeocodeResponse {
        GeocodeResponse {
            results,
            status: status.to_string(),
            error_message: None,
        }
    }

    fn result_at(lat: f64, lng: f64) -> GeocodeResult {
        GeocodeResult {
            formatted_address: Some("20 W 34th St, New York, NY 10001, USA".to_string()),
            geometry: GeocodeGeometry {
                location: GeocodeLocation { lat, lng },
            },
        }
    }

    #[test]
    fn test_extract_coordinates_ok() {
        let response = response_with("OK", vec![result_at(40.7484, -73.9857)]);
        let coords = extract_coordinates(response, "20 W 34th St, New York, NY")
            .expect("OK status should yield coordinates");

        assert_eq!(coords.lat, 40.7484);
        assert_eq!(coords.lng, -73.9857);
    }

    #[test]
    fn test_extract_coordinates_takes_first_result() {
        let response = response_with(
            "OK",
            vec![result_at(41.6488, -0.8891), result_at(0.0, 0.0)],
        );
        let coords = extract_coordinates(response, "Zaragoza").expect("should succeed");
        assert_eq!(coords.lat, 41.6488);
    }

    #[test]
    fn test_extract_coordinates_zero_results() {
        let response = response_with("ZERO_RESULTS", vec![]);
        let err = extract_coordinates(response, "nowhere at all").unwrap_err();
        assert!(matches!(err, ApiError::GeocodingError(_)));
    }

    #[test]
    fn test_extract_coordinates_quota() {
        let response = response_with("OVER_QUERY_LIMIT", vec![]);
        let err = extract_coordinates(response, "anywhere").unwrap_err();
        assert!(matches!(err, ApiError::RateLimitExceeded));
    }

    #[test]
    fn test_extract_coordinates_denied() {
        let mut response = response_with("REQUEST_DENIED", vec![]);
        response.error_message = Some("API key invalid".to_string());
        let err = extract_coordinates(response, "anywhere").unwrap_err();
        assert!(matches!(err, ApiError::ExternalApiError(_)));
    }
}
