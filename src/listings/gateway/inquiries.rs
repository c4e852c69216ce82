//! REST gateway for recording contact inquiries.

use async_trait::async_trait;
use tracing::debug;

use crate::listings::endpoint::{ServiceEndpoint, ServiceKey};
use crate::listings::error::ListingError;
use crate::listings::models::{ContactInquiry, NewContactInquiry};

use super::InquiryGateway;
use super::client::build_service_client;
use super::error_mapping::{map_status_error, map_transport_error};

/// REST-backed inquiry gateway.
pub struct RestInquiryGateway {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl RestInquiryGateway {
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
}

#[async_trait]
impl InquiryGateway for RestInquiryGateway {
    async fn submit_inquiry(&self, inquiry: &NewContactInquiry) -> Result<(), ListingError> {
        let operation = "submit inquiry";
        let url = self.endpoint.table_url("contact_inquiries")?;
        debug!(property_id = %inquiry.property_id, "submitting contact inquiry");

        let response = self
            .client
            .post(url)
            .header("Prefer", "return=minimal")
            .json(inquiry)
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

    async fn list_inquiries(&self, user_id: &str) -> Result<Vec<ContactInquiry>, ListingError> {
        let operation = "list inquiries";
        let url = self.endpoint.table_url("contact_inquiries")?;
        let pairs = vec![
            ("select".to_owned(), "*".to_owned()),
            ("user_id".to_owned(), format!("eq.{user_id}")),
            ("order".to_owned(), "created_at.desc".to_owned()),
        ];
        debug!(user_id, "listing inquiries");

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
            .json::<Vec<ContactInquiry>>()
            .await
            .map_err(|error| ListingError::Api {
                message: format!("{operation} returned an unreadable body: {error}"),
            })
    }
}
