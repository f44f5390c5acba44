//! Admin dashboard route handler
//!
//! The counts behind the back-office overview tiles.

use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub counts: DashboardCounts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub reviews: usize,
    pub pending_reviews: usize,
    pub pricing_options: usize,
    pub gallery_images: usize,
    pub featured_images: usize,
    pub contact_requests: usize,
    pub unanswered_requests: usize,
}

/// GET /api/admin/dashboard
pub async fn overview(
    State(state): State<SharedState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let reviews = state.store.list_reviews(false).await?;
    let pricing = state.store.list_pricing().await?;
    let gallery = state.store.list_gallery(false).await?;
    let contacts = state.store.list_contacts().await?;

    let counts = DashboardCounts {
        pending_reviews: reviews.iter().filter(|r| !r.published).count(),
        reviews: reviews.len(),
        pricing_options: pricing.len(),
        featured_images: gallery.iter().filter(|img| img.featured).count(),
        gallery_images: gallery.len(),
        unanswered_requests: contacts.iter().filter(|c| !c.responded).count(),
        contact_requests: contacts.len(),
    };

    Ok(Json(DashboardResponse {
        success: true,
        counts,
    }))
}
