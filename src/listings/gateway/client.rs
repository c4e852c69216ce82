//! HTTP client construction helpers for gateway implementations.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::listings::endpoint::ServiceKey;
use crate::listings::error::ListingError;

/// Builds a reqwest client carrying the service credentials on every call.
///
/// The service expects the key in an `apikey` header and a bearer token in
/// `Authorization`. Signed-out reads and writes fall back to the service
/// key as the bearer; a session access token replaces it once available.
///
/// # Errors
///
/// Returns `ListingError::MissingServiceKey` when the key contains bytes
/// that cannot form a header value, or `ListingError::Api` when the client
/// cannot be constructed.
pub(super) fn build_service_client(
    key: &ServiceKey,
    access_token: Option<&str>,
) -> Result<reqwest::Client, ListingError> {
    let mut headers = HeaderMap::new();

    let apikey = HeaderValue::from_str(key.value())
        .map_err(|_| ListingError::MissingServiceKey)?;
    headers.insert("apikey", apikey);

    let bearer = format!("Bearer {}", access_token.unwrap_or_else(|| key.value()));
    let mut authorization =
        HeaderValue::from_str(&bearer).map_err(|_| ListingError::MissingServiceKey)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|error| ListingError::Api {
            message: format!("build client failed: {error}"),
        })
}
