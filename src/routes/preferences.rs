//! Site preference route handlers
//!
//! One flag today: dark mode. Persisted alongside the collections so the
//! storefront renders consistently across devices.

use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub success: bool,
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPreferencesRequest {
    pub dark_mode: bool,
}

/// GET /api/preferences
pub async fn get_preferences(
    State(state): State<SharedState>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let dark_mode = state.store.dark_mode().await?;
    Ok(Json(PreferencesResponse {
        success: true,
        dark_mode,
    }))
}

/// PUT /api/preferences
pub async fn set_preferences(
    State(state): State<SharedState>,
    Json(payload): Json<SetPreferencesRequest>,
) -> Result<Json<PreferencesResponse>, AppError> {
    state.store.set_dark_mode(payload.dark_mode).await?;
    Ok(Json(PreferencesResponse {
        success: true,
        dark_mode: payload.dark_mode,
    }))
}
