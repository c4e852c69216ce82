//! Gateway to the hosted auth API.
//!
//! Sign-in, sign-up, and sign-out delegate directly to the remote service
//! and surface its errors unmodified. There is no local validation, token
//! refresh, or retry here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::listings::endpoint::{ServiceEndpoint, ServiceKey};
use crate::listings::error::ListingError;
use crate::listings::gateway::error_mapping::{map_status_error, map_transport_error};

use super::{AuthenticatedUser, Session};

/// Gateway that can authenticate against the remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges email/password credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ListingError>;

    /// Registers a new account; returns a session when the service issues
    /// one immediately (it may instead require email confirmation).
    async fn sign_up(&self, email: &str, password: &str)
    -> Result<Option<Session>, ListingError>;

    /// Revokes the given access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), ListingError>;
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSession {
    access_token: Option<String>,
    user: Option<ApiUser>,
}

impl ApiSession {
    fn into_session(self) -> Option<Session> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Some(Session {
                access_token,
                user: AuthenticatedUser {
                    id: user.id,
                    email: user.email,
                },
            }),
            _ => None,
        }
    }
}

/// REST-backed auth gateway.
pub struct RestAuthGateway {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
    key: ServiceKey,
}

impl RestAuthGateway {
    /// Creates a gateway for the given endpoint and service key.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::Api` when the underlying client cannot be
    /// constructed.
    pub fn new(endpoint: ServiceEndpoint, key: ServiceKey) -> Result<Self, ListingError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| ListingError::Api {
                message: format!("build client failed: {error}"),
            })?;
        Ok(Self {
            client,
            endpoint,
            key,
        })
    }

    async fn post_credentials(
        &self,
        operation: &str,
        action: &str,
        grant_type: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<ApiSession, ListingError> {
        let url = self.endpoint.auth_url(action)?;
        debug!(operation, "calling auth API");

        let mut request = self
            .client
            .post(url)
            .header("apikey", self.key.value())
            .json(&Credentials { email, password });
        if let Some(grant) = grant_type {
            request = request.query(&[("grant_type", grant)]);
        }

        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(operation, status, &body));
        }

        response
            .json::<ApiSession>()
            .await
            .map_err(|error| ListingError::Api {
                message: format!("{operation} returned an unreadable body: {error}"),
            })
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ListingError> {
        let operation = "sign in";
        let api_session = self
            .post_credentials(operation, "token", Some("password"), email, password)
            .await?;
        api_session
            .into_session()
            .ok_or_else(|| ListingError::Api {
                message: format!("{operation} response carried no session"),
            })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, ListingError> {
        let api_session = self
            .post_credentials("sign up", "signup", None, email, password)
            .await?;
        Ok(api_session.into_session())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ListingError> {
        let operation = "sign out";
        let url = self.endpoint.auth_url("logout")?;
        debug!(operation, "calling auth API");

        let response = self
            .client
            .post(url)
            .header("apikey", self.key.value())
            .bearer_auth(access_token)
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
