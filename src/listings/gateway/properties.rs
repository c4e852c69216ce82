//! REST gateway for reading property rows.

use async_trait::async_trait;
use tracing::debug;

use crate::listings::endpoint::{ServiceEndpoint, ServiceKey};
use crate::listings::error::ListingError;
use crate::listings::models::Property;
use crate::listings::query::PropertyQuery;

use super::PropertyGateway;
use super::client::build_service_client;
use super::error_mapping::{map_status_error, map_transport_error};

/// REST-backed property gateway.
pub struct RestPropertyGateway {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl RestPropertyGateway {
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
        pairs: &[(String, String)],
    ) -> Result<Vec<Property>, ListingError> {
        let url = self.endpoint.table_url("properties")?;
        debug!(operation, constraints = pairs.len(), "querying properties");

        let response = self
            .client
            .get(url)
            .query(pairs)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(operation, status, &body));
        }

        response
            .json::<Vec<Property>>()
            .await
            .map_err(|error| ListingError::Api {
                message: format!("{operation} returned an unreadable body: {error}"),
            })
    }
}

#[async_trait]
impl PropertyGateway for RestPropertyGateway {
    async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, ListingError> {
        let pairs = query.to_query_pairs()?;
        self.fetch_rows("list properties", &pairs).await
    }

    async fn property(&self, id: &str) -> Result<Property, ListingError> {
        let pairs = vec![
            ("select".to_owned(), "*".to_owned()),
            ("id".to_owned(), format!("eq.{id}")),
            ("limit".to_owned(), "1".to_owned()),
        ];
        let mut rows = self.fetch_rows("fetch property", &pairs).await?;
        rows.pop().ok_or_else(|| ListingError::PropertyNotFound {
            id: id.to_owned(),
        })
    }
}
