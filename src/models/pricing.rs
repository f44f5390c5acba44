//! Pricing catalog records.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named accommodation category with a nightly base rate.
///
/// The catalog is fixed and seeded; the admin edit form is the only mutation
/// surface, so there is no creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_per_night: f64,
    pub features: Vec<String>,
}

impl PricingOption {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: UpdatePricingOption) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price_per_night {
            self.price_per_night = price;
        }
        if let Some(features) = update.features {
            self.features = features;
        }
    }
}

/// Admin edit payload for a pricing tier
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingOption {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "nightly rate cannot be negative"))]
    pub price_per_night: Option<f64>,
    pub features: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tier() -> PricingOption {
        PricingOption {
            id: "1".to_string(),
            name: "Standard Campsite".to_string(),
            description: "Perfect for tent camping with basic amenities.".to_string(),
            price_per_night: 35.0,
            features: vec!["Fire pit".to_string(), "Picnic table".to_string()],
        }
    }

    #[test]
    fn test_apply_updates_rate_and_keeps_rest() {
        let mut option = tier();
        option.apply(UpdatePricingOption {
            price_per_night: Some(40.0),
            ..Default::default()
        });
        assert_eq!(option.price_per_night, 40.0);
        assert_eq!(option.name, "Standard Campsite");
        assert_eq!(option.features.len(), 2);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        use validator::Validate;
        let payload = UpdatePricingOption {
            price_per_night: Some(-5.0),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
