//! Scanner endpoints: code validation, location list, assignment history

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domains::scanner::actions::{assign_location, resolve_code};
use crate::domains::scanner::models::Location;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "locationCode", skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// POST /scanner/validate
pub async fn validate_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ValidateRequest>,
) -> (StatusCode, Json<ValidateResponse>) {
    match resolve_code(&request.code, &state.server_deps).await {
        Ok(resolution) if resolution.exists => (
            StatusCode::OK,
            Json(ValidateResponse {
                success: true,
                exists: Some(true),
                description: Some(resolution.description),
                location_code: Some(resolution.location_code),
                location: Some(resolution.location),
                ..Default::default()
            }),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ValidateResponse {
                success: true,
                exists: Some(false),
                message: Some("Code not found in database.".to_string()),
                ..Default::default()
            }),
        ),
        Err(e @ ApiError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidateResponse {
                success: false,
                cause: Some("EMPTY_CODE".to_string()),
                message: Some(e.to_string()),
                ..Default::default()
            }),
        ),
        Err(ApiError::Store(e)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidateResponse {
                success: false,
                cause: Some("DB_ERROR".to_string()),
                message: Some("Database query failed.".to_string()),
                detail: Some(e.to_string()),
                ..Default::default()
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ValidateResponse {
                success: false,
                cause: Some("DB_ERROR".to_string()),
                message: Some(e.to_string()),
                ..Default::default()
            }),
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /scanner/locations
///
/// Distinct location descriptions for the manual-selection dropdown.
pub async fn locations_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<LocationsResponse>) {
    match Location::distinct_descriptions(&state.db_pool).await {
        Ok(locations) => (
            StatusCode::OK,
            Json(LocationsResponse {
                success: true,
                locations: Some(locations),
                message: None,
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(LocationsResponse {
                success: false,
                locations: None,
                message: Some(e.to_string()),
            }),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct InsertDetailRequest {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "locationDesc", default)]
    pub location_desc: String,
    #[serde(default)]
    pub remark1: String,
    #[serde(default)]
    pub remark2: String,
    #[serde(default)]
    pub remark3: String,
}

#[derive(Debug, Serialize)]
pub struct InsertDetailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// POST /scanner/insert-detail
///
/// Requires an authenticated caller; the acting user's display name is
/// recorded on the history row.
pub async fn insert_detail_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    Json(request): Json<InsertDetailRequest>,
) -> (StatusCode, Json<InsertDetailResponse>) {
    let Some(Extension(user)) = auth_user else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(InsertDetailResponse {
                success: false,
                message: Some(ApiError::Unauthenticated.to_string()),
                detail: None,
            }),
        );
    };

    let remarks = [request.remark1, request.remark2, request.remark3];
    match assign_location(
        &request.code,
        &request.location_desc,
        remarks,
        &user.name,
        &state.server_deps,
    )
    .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(InsertDetailResponse {
                success: true,
                message: None,
                detail: None,
            }),
        ),
        Err(e @ ApiError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(InsertDetailResponse {
                success: false,
                message: Some(e.to_string()),
                detail: None,
            }),
        ),
        Err(ApiError::Store(e)) => (
            StatusCode::BAD_REQUEST,
            Json(InsertDetailResponse {
                success: false,
                message: Some("Database insert failed.".to_string()),
                detail: Some(e.to_string()),
            }),
        ),
        // Business declines keep a 200 with success:false
        Err(e) => (
            StatusCode::OK,
            Json(InsertDetailResponse {
                success: false,
                message: Some(e.to_string()),
                detail: None,
            }),
        ),
    }
}
