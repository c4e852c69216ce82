//! Gateways for reading and writing listings data over HTTP.
//!
//! The trait-based design enables mocking in tests while the REST
//! implementations handle real requests against the hosted service's
//! tabular API.

mod client;
pub(crate) mod error_mapping;
mod inquiries;
mod properties;
mod reviews;

pub use inquiries::RestInquiryGateway;
pub use properties::RestPropertyGateway;
pub use reviews::RestReviewGateway;

use async_trait::async_trait;

use crate::listings::error::ListingError;
use crate::listings::models::{
    ContactInquiry, NewContactInquiry, NewPropertyReview, Property, PropertyReview,
};
use crate::listings::query::PropertyQuery;

/// Gateway that can read property rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyGateway: Send + Sync {
    /// Fetch the properties matching a composed query.
    async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, ListingError>;

    /// Fetch a single property by id.
    async fn property(&self, id: &str) -> Result<Property, ListingError>;
}

/// Gateway that can record contact inquiries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryGateway: Send + Sync {
    /// Insert a new contact inquiry.
    async fn submit_inquiry(&self, inquiry: &NewContactInquiry) -> Result<(), ListingError>;

    /// Fetch all inquiries submitted by a user, newest first.
    async fn list_inquiries(&self, user_id: &str) -> Result<Vec<ContactInquiry>, ListingError>;
}

/// Gateway for reading and writing property reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch all reviews for a property, newest first.
    async fn list_reviews(&self, property_id: &str) -> Result<Vec<PropertyReview>, ListingError>;

    /// Fetch all reviews written by a user, newest first.
    async fn list_user_reviews(&self, user_id: &str)
    -> Result<Vec<PropertyReview>, ListingError>;

    /// Insert a new review.
    async fn submit_review(&self, review: &NewPropertyReview) -> Result<(), ListingError>;
}
