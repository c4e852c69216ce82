//! Error types exposed by the listings client.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with the
/// listings service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    /// No service base URL was configured.
    #[error("listings service URL is required")]
    MissingServiceUrl,

    /// No service key was configured.
    #[error("listings service key is required")]
    MissingServiceKey,

    /// The provided service URL could not be parsed.
    #[error("listings service URL is invalid: {0}")]
    InvalidServiceUrl(String),

    /// The requested result cap is not a positive integer.
    #[error("limit must be a positive integer")]
    InvalidLimit,

    /// A review rating outside the accepted range was supplied.
    #[error("rating must be between 1 and 5, got {value}")]
    InvalidRating {
        /// The rejected rating value.
        value: u8,
    },

    /// A write operation was attempted without a signed-in session.
    #[error("please log in to {action}")]
    SignedOut {
        /// The action that requires authentication.
        action: String,
    },

    /// The requested property does not exist.
    #[error("property {id} was not found")]
    PropertyNotFound {
        /// Identifier of the missing property.
        id: String,
    },

    /// The service rejected the supplied credentials or key.
    #[error("listings service rejected the credentials: {message}")]
    Authentication {
        /// Error message returned with the 401/403 response.
        message: String,
    },

    /// The service returned a non-authentication API error.
    #[error("listings service error: {message}")]
    Api {
        /// Response body from the service describing the failure.
        message: String,
    },

    /// Networking failed while calling the service.
    #[error("network error talking to the listings service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
