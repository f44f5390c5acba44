//! Contact request records and their request payloads.

use crate::estimator::StayDetails;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// What the submitter is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Quote,
    Information,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Quote => "quote",
            RequestType::Information => "information",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quote" => Some(RequestType::Quote),
            "information" => Some(RequestType::Information),
            _ => None,
        }
    }
}

/// A submitted contact request, as stored.
///
/// When the submission carried booking details, the message already contains
/// the pricing snapshot appended at submission time. The snapshot is plain
/// text and is never revised if the catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub request_type: RequestType,
    /// Submission instant, RFC 3339
    pub date_submitted: String,
    pub responded: bool,
}

impl ContactRequest {
    /// Build a stored record from a finalized draft. The id, timestamp, and
    /// responded flag are always server-assigned.
    pub fn create(draft: ContactDraft) -> Self {
        Self {
            id: super::next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            request_type: draft.request_type,
            date_submitted: chrono::Utc::now().to_rfc3339(),
            responded: false,
        }
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: UpdateContactRequest) {
        if let Some(responded) = update.responded {
            self.responded = responded;
        }
    }
}

/// A contact request ready for storage: the message has already had any
/// pricing snapshot appended.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub request_type: RequestType,
}

/// Public contact form payload.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactRequest {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "message is required"))]
    pub message: String,
    pub request_type: RequestType,
    /// Present when the submitter picked an accommodation and dates on the
    /// quote form.
    #[validate(nested)]
    pub booking: Option<BookingDetails>,
}

/// Stay selection accompanying a quote request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub pricing_option_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub stay: StayDetails,
}

/// Admin inbox payload: only the responded flag is editable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub responded: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Emma Wilson".to_string(),
            email: "emma@example.com".to_string(),
            phone: None,
            message: "Do you allow pets?".to_string(),
            request_type: RequestType::Information,
        }
    }

    #[test]
    fn test_create_assigns_server_fields() {
        let request = ContactRequest::create(draft());
        assert!(!request.id.is_empty());
        assert!(!request.responded);
        assert!(!request.date_submitted.is_empty());
    }

    #[test]
    fn test_request_type_round_trips_as_str() {
        assert_eq!(RequestType::parse("quote"), Some(RequestType::Quote));
        assert_eq!(
            RequestType::parse(RequestType::Information.as_str()),
            Some(RequestType::Information)
        );
        assert_eq!(RequestType::parse("booking"), None);
    }
}
