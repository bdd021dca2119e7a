//! Storage REST API handlers
//!
//! Save and load the per-user document. Validation runs before any
//! storage round trip; handlers hold no state between requests.

use crate::{ApiError, ApiResult, AppState, LoadResponse, SaveRequest, SaveResponse};

use stash_db::UserStorageRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/save
///
/// Upsert the caller's document: created on first save, replaced in
/// place afterwards.
pub async fn save_data(
    State(state): State<AppState>,
    Json(body): Json<SaveRequest>,
) -> ApiResult<Json<SaveResponse>> {
    let username = match body.username {
        Some(ref username) if !username.is_empty() => username.as_str(),
        _ => {
            return Err(ApiError::Validation {
                message: "username is required and must be a non-empty string".to_string(),
                field: Some("username".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let data = body.data.as_ref().ok_or_else(|| ApiError::Validation {
        message: "data is required".to_string(),
        field: Some("data".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = UserStorageRepository::new(state.pool.clone());
    repo.upsert(username, data).await.map_err(|e| {
        // The save path surfaces the storage error to the client
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    info!("Saved data for user: {}", username);

    Ok(Json(SaveResponse { success: true }))
}

/// GET /api/load/{username}
///
/// Return the stored document unmodified.
pub async fn load_data(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<LoadResponse>> {
    let repo = UserStorageRepository::new(state.pool.clone());
    let record = repo
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", username),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(record.into()))
}
