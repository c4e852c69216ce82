//! Service URL parsing and credential wrappers.

use url::Url;

use super::error::ListingError;

/// Validated base URL of the hosted listings service.
///
/// The data API lives under `rest/v1/` and the auth API under `auth/v1/`,
/// both relative to this base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: Url,
}

impl ServiceEndpoint {
    /// Parses and validates a service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidServiceUrl`] when the URL cannot be
    /// parsed, lacks a host, or carries a query or fragment.
    pub fn parse(input: &str) -> Result<Self, ListingError> {
        let mut parsed =
            Url::parse(input).map_err(|error| ListingError::InvalidServiceUrl(error.to_string()))?;

        if parsed.host_str().is_none() {
            return Err(ListingError::InvalidServiceUrl(
                "URL must include a host".to_owned(),
            ));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ListingError::InvalidServiceUrl(
                "URL must not carry a query or fragment".to_owned(),
            ));
        }

        // Joining relative API paths requires a trailing slash.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(Self { base: parsed })
    }

    /// The validated base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// URL of a table under the data API.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidServiceUrl`] when the table name does
    /// not form a valid path segment.
    pub fn table_url(&self, table: &str) -> Result<Url, ListingError> {
        self.base
            .join(&format!("rest/v1/{table}"))
            .map_err(|error| ListingError::InvalidServiceUrl(error.to_string()))
    }

    /// URL of an action under the auth API.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidServiceUrl`] when the action does not
    /// form a valid path segment.
    pub fn auth_url(&self, action: &str) -> Result<Url, ListingError> {
        self.base
            .join(&format!("auth/v1/{action}"))
            .map_err(|error| ListingError::InvalidServiceUrl(error.to_string()))
    }
}

/// Service key wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceKey(String);

impl ServiceKey {
    /// Validates that the key is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingServiceKey`] when the supplied string
    /// is blank.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ListingError> {
        let trimmed = key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ListingError::MissingServiceKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ServiceKey {
    fn as_ref(&self) -> &str {
        self.value()
    }
}
