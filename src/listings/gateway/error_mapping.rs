//! Error mapping helpers shared by the REST gateway implementations.

use http::StatusCode;

use crate::listings::error::ListingError;

/// Checks if a service error status indicates an authentication failure.
pub(crate) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Extracts the human-readable message from a service error body.
///
/// The data API reports `{"message": ...}`; the auth API uses `msg` or
/// `error_description` depending on the failure.
pub(crate) fn extract_service_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "msg", "error_description"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

/// Maps a non-success HTTP response to a typed error.
pub(crate) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> ListingError {
    let message = extract_service_message(body).unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        ListingError::Authentication {
            message: format!("{operation} failed: service returned {status} {message}"),
        }
    } else {
        ListingError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Maps a reqwest transport or decode failure to a typed error.
pub(crate) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ListingError {
    if error.is_connect() || error.is_timeout() || error.is_request() {
        ListingError::Network {
            message: format!("{operation} failed: {error}"),
        }
    } else {
        ListingError::Api {
            message: format!("{operation} failed: {error}"),
        }
    }
}
