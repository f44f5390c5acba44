//! Guest review records and their request payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A guest review. Created unpublished; a moderator flips `published`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    /// Submission date, YYYY-MM-DD
    pub date: String,
    pub published: bool,
}

impl Review {
    /// Build a fresh record from a public submission.
    ///
    /// The submitter never controls the id, the date stamp, or the published
    /// flag: reviews always enter the moderation queue unpublished, dated
    /// with the current day.
    pub fn create(new: NewReview) -> Self {
        Self {
            id: super::next_id(),
            name: new.name,
            rating: new.rating,
            comment: new.comment,
            date: super::today(),
            published: false,
        }
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: UpdateReview) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
    }
}

/// Public review submission payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(min = 1, max = 2000, message = "comment is required"))]
    pub comment: String,
}

/// Moderation payload: any subset of fields may be supplied
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[validate(length(min = 1, max = 2000))]
    pub comment: Option<String>,
    pub published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_forces_moderation_defaults() {
        let review = Review::create(NewReview {
            name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "Wonderful stay".to_string(),
        });
        assert!(!review.published);
        assert_eq!(review.date, crate::models::today());
        assert!(!review.id.is_empty());
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut review = Review::create(NewReview {
            name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "Wonderful stay".to_string(),
        });
        review.apply(UpdateReview {
            published: Some(true),
            ..Default::default()
        });
        assert!(review.published);
        assert_eq!(review.name, "Sarah Johnson");
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        use validator::Validate;
        let payload = NewReview {
            name: "x".to_string(),
            rating: 6,
            comment: "y".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
