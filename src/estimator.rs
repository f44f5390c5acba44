//! Price estimator for quote requests.
//!
//! Sums the nightly base rate and per-person/per-pet surcharges over the
//! requested date range. The estimator never fails: anything it cannot price
//! (bad dates, non-positive night count) comes back as `None`, which the API
//! surfaces as "estimate unavailable".

use crate::config::RateCard;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_adults() -> u32 {
    1
}

/// Stay selection: dates plus party composition.
///
/// Children under 3 stay free; they are tracked for the booking snapshot but
/// never priced.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StayDetails {
    /// Arrival date, YYYY-MM-DD
    pub arrival_date: String,
    /// Departure date, YYYY-MM-DD
    pub departure_date: String,
    #[serde(default = "default_adults")]
    #[validate(range(min = 1, max = 50))]
    pub adults: u32,
    #[serde(default)]
    #[validate(range(max = 50))]
    pub children_under_3: u32,
    #[serde(default)]
    #[validate(range(max = 50))]
    pub children_3_to_12: u32,
    #[serde(default)]
    #[validate(range(max = 20))]
    pub pets: u32,
}

/// A priced stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEstimate {
    pub per_night: f64,
    pub total: f64,
    pub nights: i64,
}

/// Estimate the total cost of a stay at the given nightly base rate.
///
/// Returns `None` when either date fails to parse or the range covers no
/// nights (departure on or before arrival).
pub fn estimate(rates: &RateCard, price_per_night: f64, stay: &StayDetails) -> Option<QuoteEstimate> {
    let nights = nights_between(&stay.arrival_date, &stay.departure_date)?;
    if nights <= 0 {
        return None;
    }

    let per_night = price_per_night
        + stay.adults as f64 * rates.adult_per_night
        + stay.children_3_to_12 as f64 * rates.child_per_night
        + stay.pets as f64 * rates.pet_per_night;

    Some(QuoteEstimate {
        per_night,
        total: per_night * nights as f64,
        nights,
    })
}

fn nights_between(arrival: &str, departure: &str) -> Option<i64> {
    let arrival = NaiveDate::parse_from_str(arrival, "%Y-%m-%d").ok()?;
    let departure = NaiveDate::parse_from_str(departure, "%Y-%m-%d").ok()?;
    Some(departure.signed_duration_since(arrival).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stay(arrival: &str, departure: &str) -> StayDetails {
        StayDetails {
            arrival_date: arrival.to_string(),
            departure_date: departure.to_string(),
            adults: 1,
            children_under_3: 0,
            children_3_to_12: 0,
            pets: 0,
        }
    }

    #[test]
    fn test_single_adult_two_nights() {
        let rates = RateCard::default();
        let estimate = estimate(&rates, 35.0, &stay("2025-07-01", "2025-07-03")).unwrap();
        assert_eq!(estimate.per_night, 60.0);
        assert_eq!(estimate.nights, 2);
        assert_eq!(estimate.total, 120.0);
    }

    #[test]
    fn test_full_party_surcharges() {
        let rates = RateCard::default();
        let mut details = stay("2025-07-01", "2025-07-04");
        details.adults = 2;
        details.children_3_to_12 = 1;
        details.pets = 1;
        let estimate = estimate(&rates, 55.0, &details).unwrap();
        // 55 + 2*25 + 15 + 10 = 130 per night, 3 nights
        assert_eq!(estimate.per_night, 130.0);
        assert_eq!(estimate.total, 390.0);
    }

    #[test]
    fn test_children_under_three_are_free() {
        let rates = RateCard::default();
        let mut with_infant = stay("2025-07-01", "2025-07-03");
        with_infant.children_under_3 = 3;
        let without = estimate(&rates, 35.0, &stay("2025-07-01", "2025-07-03")).unwrap();
        let with_infant = estimate(&rates, 35.0, &with_infant).unwrap();
        assert_eq!(with_infant, without);
    }

    #[test]
    fn test_reversed_dates_yield_no_estimate() {
        let rates = RateCard::default();
        assert_eq!(estimate(&rates, 35.0, &stay("2025-07-03", "2025-07-01")), None);
    }

    #[test]
    fn test_same_day_yields_no_estimate() {
        let rates = RateCard::default();
        assert_eq!(estimate(&rates, 35.0, &stay("2025-07-01", "2025-07-01")), None);
    }

    #[test]
    fn test_unparseable_dates_yield_no_estimate() {
        let rates = RateCard::default();
        assert_eq!(estimate(&rates, 35.0, &stay("tomorrow", "2025-07-03")), None);
        assert_eq!(estimate(&rates, 35.0, &stay("2025-07-01", "")), None);
    }

    #[test]
    fn test_custom_rate_card() {
        let rates = RateCard {
            adult_per_night: 30.0,
            child_per_night: 20.0,
            pet_per_night: 5.0,
        };
        let estimate = estimate(&rates, 100.0, &stay("2025-07-01", "2025-07-02")).unwrap();
        assert_eq!(estimate.per_night, 130.0);
        assert_eq!(estimate.total, 130.0);
    }
}
