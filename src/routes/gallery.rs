//! Gallery route handlers
//!
//! Public listing with an optional featured-only filter; add/edit/delete
//! live under the admin gate.

use crate::error::AppError;
use crate::models::{GalleryImage, NewGalleryImage, UpdateGalleryImage};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct GalleryListResponse {
    pub success: bool,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Serialize)]
pub struct GalleryImageResponse {
    pub success: bool,
    pub image: GalleryImage,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/gallery?featured=true
pub async fn list_public(
    State(state): State<SharedState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryListResponse>, AppError> {
    let images = state.store.list_gallery(query.featured).await?;
    Ok(Json(GalleryListResponse {
        success: true,
        images,
    }))
}

/// GET /api/admin/gallery — always unfiltered
pub async fn list_all(
    State(state): State<SharedState>,
) -> Result<Json<GalleryListResponse>, AppError> {
    let images = state.store.list_gallery(false).await?;
    Ok(Json(GalleryListResponse {
        success: true,
        images,
    }))
}

/// POST /api/admin/gallery
pub async fn create(
    State(state): State<SharedState>,
    Json(payload): Json<NewGalleryImage>,
) -> Result<(StatusCode, Json<GalleryImageResponse>), AppError> {
    payload.validate()?;
    let image = state.store.add_gallery_image(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(GalleryImageResponse {
            success: true,
            image,
        }),
    ))
}

/// PATCH /api/admin/gallery/{id}
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGalleryImage>,
) -> Result<Json<GalleryImageResponse>, AppError> {
    payload.validate()?;
    let image = state
        .store
        .update_gallery_image(&id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Gallery image {} not found", id)))?;
    Ok(Json(GalleryImageResponse {
        success: true,
        image,
    }))
}

/// DELETE /api/admin/gallery/{id}
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.store.delete_gallery_image(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Gallery image {} not found", id)));
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
