//! Pricing route handlers
//!
//! The public catalog, the surcharge table, and the quote estimator; the
//! admin gate only exposes the tier edit form.

use crate::config::RateCard;
use crate::error::AppError;
use crate::estimator::{self, QuoteEstimate, StayDetails};
use crate::models::{PricingOption, UpdatePricingOption};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct PricingListResponse {
    pub success: bool,
    pub options: Vec<PricingOption>,
}

#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub success: bool,
    pub option: PricingOption,
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub success: bool,
    pub rates: RateCard,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub pricing_option_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub stay: StayDetails,
}

/// Quote response. `estimate` is absent when the stay cannot be priced
/// (bad dates or a non-positive night count) — that is "estimate
/// unavailable", not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub success: bool,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<QuoteEstimate>,
}

/// GET /api/pricing — catalog ordered by nightly rate
pub async fn list(State(state): State<SharedState>) -> Result<Json<PricingListResponse>, AppError> {
    let options = state.store.list_pricing().await?;
    Ok(Json(PricingListResponse {
        success: true,
        options,
    }))
}

/// GET /api/rates — per-person/per-pet surcharge table
pub async fn rates(State(state): State<SharedState>) -> Json<RatesResponse> {
    Json(RatesResponse {
        success: true,
        rates: state.rates,
    })
}

/// POST /api/quote — estimate the cost of a stay
pub async fn quote(
    State(state): State<SharedState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    payload.validate()?;

    let option = state
        .store
        .get_pricing(&payload.pricing_option_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Pricing option {} not found",
                payload.pricing_option_id
            ))
        })?;

    let estimate = estimator::estimate(&state.rates, option.price_per_night, &payload.stay);
    Ok(Json(QuoteResponse {
        success: true,
        available: estimate.is_some(),
        estimate,
    }))
}

/// PATCH /api/admin/pricing/{id}
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePricingOption>,
) -> Result<Json<PricingResponse>, AppError> {
    payload.validate()?;
    let option = state
        .store
        .update_pricing(&id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pricing option {} not found", id)))?;
    Ok(Json(PricingResponse {
        success: true,
        option,
    }))
}
