//! Property listings: models, query composition, fetch orchestration, and
//! gateways against the hosted data service.
//!
//! This module wraps the service's tabular REST API. Filter criteria are
//! translated into deterministic query constraints, fetch state is tracked
//! per view with stale-response protection, and writes are gated on a
//! signed-in session. Errors are mapped into user-friendly variants so
//! callers never see raw HTTP detail.

pub mod endpoint;
pub mod error;
pub mod feed;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod query;
pub mod submissions;

pub use endpoint::{ServiceEndpoint, ServiceKey};
pub use error::ListingError;
pub use feed::{FetchTicket, PropertyFeed};
pub use filter::FilterCriteria;
pub use gateway::{
    InquiryGateway, PropertyGateway, RestInquiryGateway, RestPropertyGateway, RestReviewGateway,
    ReviewGateway,
};
pub use models::{
    ContactInquiry, InquiryStatus, NewContactInquiry, NewPropertyReview, Property, PropertyReview,
    Rating, average_rating,
};
pub use query::PropertyQuery;
pub use submissions::{
    InquiryDesk, InquiryForm, ProfileDesk, ProfileSummary, ReviewBoard, ReviewDesk,
};
