//! API error taxonomy and server-error interpretation.

use serde_json::Value;
use thiserror::Error;

use crate::validate::FieldKey;

/// Shown when a non-2xx body carries no usable message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Shown when no response was obtained at all.
pub const NETWORK_ERROR: &str = "Network error: Could not connect to the server.";

/// Shown on 401/403 before redirecting to the login page.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// What went wrong with an API call. Every variant is terminal for the
/// triggering action; the user retries by repeating it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401/403. Local auth state has already been cleared by the time
    /// callers see this.
    #[error("{SESSION_EXPIRED}")]
    SessionExpired,

    /// Any other non-2xx status, carrying the server's message and the
    /// form field it was routed to, if any.
    #[error("{detail}")]
    Api {
        status: u16,
        detail: String,
        field: Option<FieldKey>,
    },

    /// No response obtained (DNS failure, refused connection, ...).
    #[error("{NETWORK_ERROR}")]
    Network(String),

    /// A response arrived but its body was not the JSON we expected.
    #[error("Unexpected response from the server.")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response: extract the message and decide
    /// which form field it belongs to, while the body is still at hand.
    pub fn from_response(status: u16, body: &Value) -> ApiError {
        let detail = detail_message(body).unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        let field = error_field(body, &detail);
        ApiError::Api {
            status,
            detail,
            field,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

/// Extract the most specific message from an error body:
/// `details`, then `error`, then `message`.
pub fn detail_message(body: &Value) -> Option<String> {
    for key in ["details", "error", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

// Ordered: first marker contained in the detail string wins.
const FIELD_MARKERS: [(&str, FieldKey); 5] = [
    ("Name", FieldKey::Name),
    ("Description", FieldKey::Description),
    ("Start Date", FieldKey::StartDate),
    ("End Date", FieldKey::EndDate),
    ("Status", FieldKey::Status),
];

/// Decide which form field a server-side validation error belongs to.
///
/// A structured `field` key in the body is authoritative when present;
/// otherwise the detail string is routed by the first matching marker.
/// `None` means the message has no field of its own and belongs in the
/// generic banner.
pub fn error_field(body: &Value, detail: &str) -> Option<FieldKey> {
    if let Some(field) = body
        .get("field")
        .and_then(Value::as_str)
        .and_then(FieldKey::from_wire)
    {
        return Some(field);
    }

    FIELD_MARKERS
        .iter()
        .find(|(marker, _)| detail.contains(marker))
        .map(|&(_, field)| field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_prefers_details_over_error_over_message() {
        let body = json!({"message": "Validation Error", "details": "Name cannot be empty."});
        assert_eq!(detail_message(&body).as_deref(), Some("Name cannot be empty."));

        let body = json!({"message": "Validation Error", "error": "boom"});
        assert_eq!(detail_message(&body).as_deref(), Some("boom"));

        let body = json!({"message": "Not Found"});
        assert_eq!(detail_message(&body).as_deref(), Some("Not Found"));

        assert_eq!(detail_message(&json!({})), None);
    }

    #[test]
    fn missing_detail_falls_back_to_unknown_error() {
        let err = ApiError::from_response(500, &json!({}));
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn from_response_routes_validation_errors_to_a_field() {
        let body = json!({"message": "Validation Error", "details": "End Date cannot be before Start Date."});
        let ApiError::Api { status, field, .. } = ApiError::from_response(400, &body) else {
            panic!("expected Api variant");
        };
        assert_eq!(status, 400);
        assert_eq!(field, Some(FieldKey::EndDate));
    }

    #[test]
    fn structured_field_key_wins_over_markers() {
        let body = json!({"field": "status", "details": "Name looks wrong"});
        assert_eq!(
            error_field(&body, "Name looks wrong"),
            Some(FieldKey::Status)
        );
    }

    #[test]
    fn markers_route_in_declaration_order() {
        let body = json!({});
        assert_eq!(
            error_field(&body, "Name cannot exceed 30 characters."),
            Some(FieldKey::Name)
        );
        assert_eq!(
            error_field(&body, "Start Date cannot be in the past."),
            Some(FieldKey::StartDate)
        );
        assert_eq!(
            error_field(&body, "End Date cannot be before Start Date."),
            Some(FieldKey::EndDate)
        );
        assert_eq!(
            error_field(&body, "Status must be a string."),
            Some(FieldKey::Status)
        );
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        // The server's "Invalid status: ..." message spells the field
        // lowercase, so it lands in the banner, not the field slot.
        assert_eq!(
            error_field(&json!({}), "Invalid status: 'x'. Allowed values are active, inactive."),
            None
        );
    }

    #[test]
    fn unrouted_detail_goes_to_the_banner() {
        assert_eq!(error_field(&json!({}), "Database Error"), None);
    }

    #[test]
    fn display_strings_are_user_facing() {
        assert_eq!(ApiError::SessionExpired.to_string(), SESSION_EXPIRED);
        assert_eq!(ApiError::Network("dns".into()).to_string(), NETWORK_ERROR);
        let err = ApiError::Api {
            status: 400,
            detail: "Name cannot be empty.".into(),
            field: Some(FieldKey::Name),
        };
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }
}
