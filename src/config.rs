//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.hokie-nest.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `HOKIE_NEST_SERVICE_URL`,
//!    `HOKIE_NEST_SERVICE_KEY`, or legacy `SUPABASE_ANON_KEY`
//! 4. **Command-line arguments** – `--service-url`/`-s`, `--service-key`/`-k`
//!
//! # Configuration File
//!
//! Place `.hokie-nest.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! service_url = "https://nest.example.com"
//! service_key = "anon-key"
//! limit = 6
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::listings::error::ListingError;
use crate::listings::filter::FilterCriteria;
use crate::listings::query::PropertyQuery;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Search and list properties.
    ListProperties,
    /// Show one property with its reviews.
    ShowProperty,
    /// Show the signed-in user's inquiries and reviews.
    ShowProfile,
    /// Submit a contact inquiry for a property.
    SubmitInquiry,
    /// Submit a review for a property.
    SubmitReview,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `HOKIE_NEST_SERVICE_URL` or `--service-url`: Listings service base URL
/// - `HOKIE_NEST_SERVICE_KEY`, `SUPABASE_ANON_KEY` (legacy), or
///   `--service-key`: Service key sent with every request
/// - `HOKIE_NEST_EMAIL` / `HOKIE_NEST_PASSWORD`: Sign-in credentials
/// - `HOKIE_NEST_PROPERTY_ID` or `--property-id`: Target property
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "HOKIE_NEST",
    discovery(
        dotfile_name = ".hokie-nest.toml",
        config_file_name = "hokie-nest.toml",
        app_name = "hokie-nest"
    )
)]
pub struct NestConfig {
    /// Base URL of the hosted listings service.
    #[ortho_config(cli_short = 's')]
    pub service_url: Option<String>,

    /// Service key sent as `apikey` with every request.
    #[ortho_config(cli_short = 'k')]
    pub service_key: Option<String>,

    /// Email address used to sign in before write operations.
    pub email: Option<String>,

    /// Password paired with `email`.
    #[ortho_config(cli_short = 'P')]
    pub password: Option<String>,

    /// Property targeted by show/inquire/review modes.
    #[ortho_config(cli_short = 'p')]
    pub property_id: Option<String>,

    /// Shows the signed-in user's own inquiries and reviews.
    pub profile: Option<bool>,

    /// Caps the number of listed properties; must be positive.
    #[ortho_config(cli_short = 'l')]
    pub limit: Option<u32>,

    /// Inclusive lower rent bound.
    #[ortho_config(cli_short = 'M')]
    pub min_price: Option<f64>,

    /// Inclusive upper rent bound.
    #[ortho_config(cli_short = 'a')]
    pub max_price: Option<f64>,

    /// Exact bedroom count filter.
    pub bedrooms: Option<u32>,

    /// Exact bathroom count filter; half-steps such as 1.5 are valid.
    pub bathrooms: Option<f64>,

    /// Case-insensitive locality substring filter.
    pub location: Option<String>,

    /// Free-text search over title and locality.
    #[ortho_config(cli_short = 'q')]
    pub search: Option<String>,

    /// Furnished filter; omit to match both.
    pub furnished: Option<bool>,

    /// Contact name for an inquiry.
    pub name: Option<String>,

    /// Contact phone for an inquiry.
    pub phone: Option<String>,

    /// Inquiry message body; selects inquiry mode together with
    /// `property_id`.
    #[ortho_config(cli_short = 'm')]
    pub message: Option<String>,

    /// Review star rating, 1–5; selects review mode together with
    /// `property_id`.
    pub rating: Option<u8>,

    /// Review text.
    pub comment: Option<String>,
}

impl NestConfig {
    /// Returns the service base URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingServiceUrl`] when no URL is
    /// configured.
    pub fn require_service_url(&self) -> Result<&str, ListingError> {
        self.service_url
            .as_deref()
            .ok_or(ListingError::MissingServiceUrl)
    }

    /// Resolves the service key from configuration or the legacy
    /// `SUPABASE_ANON_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingServiceKey`] when no key source
    /// provides a value.
    pub fn resolve_service_key(&self) -> Result<String, ListingError> {
        self.service_key
            .clone()
            .or_else(|| env::var("SUPABASE_ANON_KEY").ok())
            .ok_or(ListingError::MissingServiceKey)
    }

    /// Returns sign-in credentials when both email and password are set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }

    /// Returns the target property id or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when no property is set.
    pub fn require_property_id(&self) -> Result<&str, ListingError> {
        self.property_id
            .as_deref()
            .ok_or_else(|| ListingError::Configuration {
                message: "property id is required (use --property-id or -p)".to_owned(),
            })
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `ShowProfile` when the profile flag is set, `SubmitReview`
    /// when a property and rating are given, `SubmitInquiry` when a
    /// property and message are given, `ShowProperty` for a property
    /// alone, and `ListProperties` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if matches!(self.profile, Some(true)) {
            OperationMode::ShowProfile
        } else if self.property_id.is_some() && self.rating.is_some() {
            OperationMode::SubmitReview
        } else if self.property_id.is_some() && self.message.is_some() {
            OperationMode::SubmitInquiry
        } else if self.property_id.is_some() {
            OperationMode::ShowProperty
        } else {
            OperationMode::ListProperties
        }
    }

    /// Builds the filter criteria from the configured filter fields.
    ///
    /// Returns `None` when no filter field is set.
    #[must_use]
    pub fn filter_criteria(&self) -> Option<FilterCriteria> {
        let criteria = FilterCriteria {
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            location: self.location.clone(),
            search_term: self.search.clone(),
            is_furnished: self.furnished,
        };
        if criteria.is_unconstrained() {
            None
        } else {
            Some(criteria)
        }
    }

    /// Builds the property query from the configured limit and filters.
    #[must_use]
    pub fn property_query(&self) -> PropertyQuery {
        PropertyQuery {
            limit: self.limit,
            filters: self.filter_criteria(),
        }
    }
}
