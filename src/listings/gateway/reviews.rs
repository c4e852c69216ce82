//! REST gateway for reading and writing property reviews.

use async_trait::async_trait;
use tracing::debug;

use crate::listings::endpoint::{ServiceEndpoint, ServiceKey};
use crate::listings::error::ListingError;
use crate::listings::models::{NewPropertyReview, PropertyReview};

use super::ReviewGateway;
use super::client::build_service_client;
use super::error_mapping::{map_status_error, map_transport_error};

/// REST-backed review gateway.
pub struct RestReviewGateway {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl RestReviewGateway {
    /// Creates a gateway for the given endpoint and credentials.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::MissingServiceKey` or `ListingError::Api`
    /// when the underlying client cannot be constructed.
    pub fn new(
        endpoint: ServiceEndpoint,
        key: &ServiceKey,
        access_token: Option<&str>,
    ) -> Result<Self, ListingError> {
        let client = build_service_client(key, access_token)?;
        Ok(Self { client, endpoint })
    }

    async fn fetch_rows(
        &self,
        operation: &str,
        column: &str,
        id: &str,
    ) -> Result<Vec<PropertyReview>, ListingError> {
        let url = self.endpoint.table_url("property_reviews")?;
        let pairs = vec![
            ("select".to_owned(), "*".to_owned()),
            (column.to_owned(), format!("eq.{id}")),
            ("order".to_owned(), "created_at.desc".to_owned()),
        ];
        debug!(operation, column, id, "listing reviews");

        let response = self
            .client
            .get(url)
            .query(&pairs)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(operation, status, &body));
        }

        response
            .json::<Vec<PropertyReview>>()
            .await
            .map_err(|error| ListingError::Api {
                message: format!("{operation} returned an unreadable body: {error}"),
            })
    }
}

#[async_trait]
impl ReviewGateway for RestReviewGateway {
    async fn list_reviews(&self, property_id: &str) -> Result<Vec<PropertyReview>, ListingError> {
        self.fetch_rows("list reviews", "property_id", property_id)
            .await
    }

    async fn list_user_reviews(
        &self,
        user_id: &str,
    ) -> Result<Vec<PropertyReview>, ListingError> {
        self.fetch_rows("list user reviews", "user_id", user_id)
            .await
    }

    async fn submit_review(&self, review: &NewPropertyReview) -> Result<(), ListingError> {
        let operation = "submit review";
        let url = self.endpoint.table_url("property_reviews")?;
        debug!(property_id = %review.property_id, "submitting review");

        let response = self
            .client
            .post(url)
            .header("Prefer", "return=minimal")
            .json(review)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(operation, status, &body));
        }
        Ok(())
    }
}
