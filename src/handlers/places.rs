// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers::require_auth;
use crate::models::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::services::{remove_image_file, GeocodingClient, PlaceService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/places/{id}
/// Retrieve a place by id
pub async fn get_place(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// GET /api/places/user/{uid}
/// Retrieve all places created by a user
pub async fn get_places_by_user(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let places = PlaceService::list_places_by_user(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// POST /api/places
/// Create a new place for the authenticated user
pub async fn create_place(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreatePlaceRequest>,
) -> Result<impl Responder, ApiError> {
    let requester_id = require_auth(&req, &config)?;

    let body = body.into_inner();
    if let Err(e) = body.validate() {
        // The upload middleware already stored the file; drop it so a
        // rejected request leaves nothing behind
        remove_image_file(&body.image).await;
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let geocoder = GeocodingClient::new(config.geocoding_api_key.clone());
    let image = body.image.clone();

    match PlaceService::create_place(pool.get_ref(), &geocoder, requester_id, body).await {
        Ok(place) => Ok(HttpResponse::Created().json(place)),
        Err(e) => {
            remove_image_file(&image).await;
            Err(e)
        }
    }
}

/// PATCH /api/places/{id}
/// Update title and description of a place owned by the requester
pub async fn update_place(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePlaceRequest>,
) -> Result<impl Responder, ApiError> {
    let requester_id = require_auth(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(ApiError::ValidationError(e.to_string()));
    }

    let place = PlaceService::update_place(
        pool.get_ref(),
        requester_id,
        path.into_inner(),
        body.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /api/places/{id}
/// Delete a place owned by the requester
pub async fn delete_place(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let requester_id = require_auth(&req, &config)?;

    let confirmation =
        PlaceService::delete_place(pool.get_ref(), requester_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(confirmation))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/places")
            .route("", web::post().to(create_place))
            .route("/user/{uid}", web::get().to(get_places_by_user))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::patch().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}
