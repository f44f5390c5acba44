//! Domain models for the persisted collections.
//!
//! Four record kinds survive the storefront: guest reviews, the pricing
//! catalog, the gallery, and contact requests. All wire serialization is
//! camelCase.

mod contact;
mod gallery;
mod pricing;
mod review;

pub use contact::{
    BookingDetails, ContactDraft, ContactRequest, NewContactRequest, RequestType,
    UpdateContactRequest,
};
pub use gallery::{GalleryImage, NewGalleryImage, UpdateGalleryImage};
pub use pricing::{PricingOption, UpdatePricingOption};
pub use review::{NewReview, Review, UpdateReview};

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a fresh time-based record id.
///
/// Ids are millisecond timestamps rendered as decimal strings, the scheme the
/// storefront has always used. A process-wide high-water mark breaks ties when
/// two records are created within the same millisecond.
pub fn next_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1).to_string()
}

/// Current date as a YYYY-MM-DD string, used for review date stamps.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_are_unique_under_rapid_allocation() {
        let mut ids: Vec<String> = (0..64).map(|_| next_id()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let a = next_id();
        let b = next_id();
        assert!(b.parse::<i64>().unwrap() > a.parse::<i64>().unwrap());
    }
}
