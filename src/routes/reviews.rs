//! Review route handlers
//!
//! Public visitors see published reviews and can submit new ones; moderation
//! (full listing, publish toggle, delete) lives under the admin gate.

use crate::error::AppError;
use crate::models::{NewReview, Review, UpdateReview};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub success: bool,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}

/// GET /api/reviews — published reviews only
pub async fn list_published(
    State(state): State<SharedState>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews = state.store.list_reviews(true).await?;
    Ok(Json(ReviewListResponse {
        success: true,
        reviews,
    }))
}

/// POST /api/reviews — public submission, enters the moderation queue
pub async fn create(
    State(state): State<SharedState>,
    Json(payload): Json<NewReview>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    payload.validate()?;
    let review = state.store.add_review(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            success: true,
            review,
        }),
    ))
}

/// GET /api/admin/reviews — everything, including the moderation queue
pub async fn list_all(
    State(state): State<SharedState>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews = state.store.list_reviews(false).await?;
    Ok(Json(ReviewListResponse {
        success: true,
        reviews,
    }))
}

/// PATCH /api/admin/reviews/{id}
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReview>,
) -> Result<Json<ReviewResponse>, AppError> {
    payload.validate()?;
    let review = state
        .store
        .update_review(&id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))?;
    Ok(Json(ReviewResponse {
        success: true,
        review,
    }))
}

/// DELETE /api/admin/reviews/{id}
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.store.delete_review(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Review {} not found", id)));
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
