//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`listing`]: Search and list properties
//! - [`detail`]: Show one property with its reviews
//! - [`profile`]: Show the signed-in user's inquiries and reviews
//! - [`inquire`]: Submit a contact inquiry
//! - [`review`]: Submit a property review
//!
//! Output formatting utilities are in [`output`].

pub mod detail;
pub mod inquire;
pub mod listing;
pub mod output;
pub mod profile;
pub mod review;

use crate::auth::{RestAuthGateway, SessionHolder};
use crate::config::{NestConfig, OperationMode};
use crate::listings::endpoint::{ServiceEndpoint, ServiceKey};
use crate::listings::error::ListingError;

/// Shared connection state for one CLI invocation.
pub struct ServiceContext {
    /// Validated service endpoint.
    pub endpoint: ServiceEndpoint,
    /// Validated service key.
    pub key: ServiceKey,
    /// Session holder; signed in when credentials were configured.
    pub holder: SessionHolder,
}

/// Resolves the endpoint and key, and signs in when credentials are set.
///
/// # Errors
///
/// Returns configuration errors for a missing or invalid endpoint or key,
/// and propagates auth service errors from sign-in.
pub async fn connect(config: &NestConfig) -> Result<ServiceContext, ListingError> {
    let endpoint = ServiceEndpoint::parse(config.require_service_url()?)?;
    let key = ServiceKey::new(config.resolve_service_key()?)?;

    let mut holder = SessionHolder::new();
    if let Some((email, password)) = config.credentials() {
        let auth = RestAuthGateway::new(endpoint.clone(), key.clone())?;
        holder.sign_in(&auth, email, password).await?;
    } else {
        holder.resolve_initial(None);
    }

    Ok(ServiceContext {
        endpoint,
        key,
        holder,
    })
}

/// Runs the operation selected by the configuration.
///
/// # Errors
///
/// Propagates any failure from the selected operation.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    match config.operation_mode() {
        OperationMode::ListProperties => listing::run(config).await,
        OperationMode::ShowProperty => detail::run(config).await,
        OperationMode::ShowProfile => profile::run(config).await,
        OperationMode::SubmitInquiry => inquire::run(config).await,
        OperationMode::SubmitReview => review::run(config).await,
    }
}
