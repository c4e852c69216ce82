//! Hokie Nest library crate providing a typed client for a hosted
//! property-listings service.
//!
//! The library translates filter criteria into service query constraints,
//! orchestrates fetches with stale-response protection, holds the auth
//! session behind an explicit subscription lifecycle, and surfaces
//! friendly errors that can be displayed in the CLI.

pub mod auth;
pub mod cli;
pub mod config;
pub mod listings;
pub mod telemetry;

pub use auth::{AuthGateway, RestAuthGateway, Session, SessionHolder, SessionState};
pub use config::{NestConfig, OperationMode};
pub use listings::{
    FilterCriteria, ListingError, Property, PropertyFeed, PropertyGateway, PropertyQuery,
    PropertyReview, Rating, RestPropertyGateway, ServiceEndpoint, ServiceKey,
};
