//! Contact request route handlers
//!
//! The public form submission, plus the admin inbox (list, responded toggle,
//! delete). Quote submissions get a pricing snapshot appended to the message
//! at submission time; the snapshot is plain text with no link back to the
//! catalog and is never revised after submission.

use crate::error::AppError;
use crate::estimator::{self, QuoteEstimate, StayDetails};
use crate::models::{
    ContactDraft, ContactRequest, NewContactRequest, PricingOption, UpdateContactRequest,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub requests: Vec<ContactRequest>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub request: ContactRequest,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}

/// POST /api/contact — public form submission
///
/// When booking details accompany the message and the stay can be priced,
/// the snapshot block is appended before the record is stored. An unknown
/// pricing id or an unpriceable stay is not an error: the message is simply
/// stored as written, matching how the form has always degraded.
pub async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<NewContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    payload.validate()?;

    let mut message = payload.message;
    if let Some(booking) = &payload.booking {
        let option = state.store.get_pricing(&booking.pricing_option_id).await?;
        if let Some(option) = option {
            if let Some(estimate) =
                estimator::estimate(&state.rates, option.price_per_night, &booking.stay)
            {
                message.push_str(&booking_snapshot(&option, &booking.stay, &estimate));
            }
        }
    }

    let request = state
        .store
        .add_contact(ContactDraft {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            message,
            request_type: payload.request_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            request,
        }),
    ))
}

/// GET /api/admin/contacts
pub async fn list_all(
    State(state): State<SharedState>,
) -> Result<Json<ContactListResponse>, AppError> {
    let requests = state.store.list_contacts().await?;
    Ok(Json(ContactListResponse {
        success: true,
        requests,
    }))
}

/// PATCH /api/admin/contacts/{id} — responded toggle
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let request = state
        .store
        .update_contact(&id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))?;
    Ok(Json(ContactResponse {
        success: true,
        request,
    }))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.store.delete_contact(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Contact request {} not found",
            id
        )));
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// Render the immutable pricing snapshot appended to quote messages.
fn booking_snapshot(option: &PricingOption, stay: &StayDetails, estimate: &QuoteEstimate) -> String {
    format!(
        "\n\nBooking Details:\n\
         - Accommodation: {}\n\
         - Arrival: {}\n\
         - Departure: {}\n\
         - Adults: {}\n\
         - Children (under 3): {}\n\
         - Children (3-12): {}\n\
         - Pets: {}\n\
         - Estimated Price: ${:.2} ({} nights at ${:.2}/night)",
        option.name,
        stay.arrival_date,
        stay.departure_date,
        stay.adults,
        stay.children_under_3,
        stay.children_3_to_12,
        stay.pets,
        estimate.total,
        estimate.nights,
        estimate.per_night,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateCard;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_booking_snapshot_embeds_estimate() {
        let option = PricingOption {
            id: "1".to_string(),
            name: "Standard Campsite".to_string(),
            description: String::new(),
            price_per_night: 35.0,
            features: Vec::new(),
        };
        let stay = StayDetails {
            arrival_date: "2025-07-01".to_string(),
            departure_date: "2025-07-03".to_string(),
            adults: 1,
            children_under_3: 0,
            children_3_to_12: 0,
            pets: 0,
        };
        let estimate = estimator::estimate(&RateCard::default(), option.price_per_night, &stay)
            .expect("stay should be priceable");

        let snapshot = booking_snapshot(&option, &stay, &estimate);
        assert!(snapshot.contains("Accommodation: Standard Campsite"));
        assert!(snapshot.contains("Estimated Price: $120.00 (2 nights at $60.00/night)"));
        assert_eq!(snapshot.matches("Booking Details:").count(), 1);
    }
}
