/// HTTP request handlers
use crate::domain::{Health, PhotoQuery, RoverStats, ROVER_NAMES};
use crate::errors::ApiError;
use crate::services::{PhotoPayload, PhotoService};
use crate::utils::int_or;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub photo_service: Arc<PhotoService>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Gallery stats
pub async fn get_stats() -> Json<RoverStats> {
    Json(RoverStats::current())
}

/// List photos for a rover
pub async fn get_photos(
    Path(rover): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<PhotoPayload>, ApiError> {
    if !ROVER_NAMES.contains(&rover.as_str()) {
        debug!(%rover, "Rover not in catalog, forwarding as-is");
    }

    let query = PhotoQuery::new(rover)
        .with_sol(int_or(params.get("sol"), PhotoQuery::DEFAULT_SOL))
        .with_page(int_or(params.get("page"), PhotoQuery::DEFAULT_PAGE))
        .with_camera(params.get("camera").map(String::as_str));

    let payload = state
        .photo_service
        .list_photos(&query)
        .await
        .map_err(|e| {
            error!("Failed to fetch photos: {}", e);
            e
        })?;

    Ok(Json(payload))
}

/// Pass through the rover mission manifest
pub async fn get_manifest(
    Path(rover): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    let manifest = state
        .photo_service
        .get_manifest(&rover)
        .await
        .map_err(|e| {
            error!("Failed to fetch rover manifest: {}", e);
            e
        })?;

    Ok(Json(manifest))
}

/// Anything the router does not recognise
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}
