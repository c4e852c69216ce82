//! Fetch orchestration for property listings.
//!
//! `PropertyFeed` owns the loading/success/error state for one listings
//! view. Requests are generation-stamped: every `begin` invalidates the
//! tickets of requests still in flight, so a slow earlier response can
//! never overwrite data from a newer one.

use std::sync::Arc;

use tracing::warn;

use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::error::ListingError;
use super::gateway::PropertyGateway;
use super::models::Property;
use super::query::PropertyQuery;

/// Proof that a fetch was started, bound to its generation.
///
/// Consumed by [`PropertyFeed::resolve`]; a ticket from a superseded fetch
/// is rejected there.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// State holder for one property listing view.
pub struct PropertyFeed {
    generation: u64,
    properties: Vec<Property>,
    error: Option<ListingError>,
    loading: bool,
    telemetry: Arc<dyn TelemetrySink>,
}

impl Default for PropertyFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyFeed {
    /// Creates an empty feed in the initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            properties: Vec::new(),
            error: None,
            loading: true,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Marks the start of a new fetch and invalidates in-flight tickets.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies a fetch outcome if its ticket is still current.
    ///
    /// Returns whether the outcome was applied. A stale ticket leaves the
    /// state untouched and is reported to telemetry.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Property>, ListingError>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale fetch response"
            );
            self.telemetry.record(TelemetryEvent::StaleFetchDiscarded {
                generation: ticket.generation,
            });
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(properties) => {
                self.properties = properties;
                self.error = None;
            }
            Err(error) => {
                self.properties.clear();
                self.error = Some(error);
            }
        }
        true
    }

    /// Runs one full fetch cycle against the gateway.
    ///
    /// Returns whether the outcome was applied; it is not when another
    /// `begin` happened while the request was in flight.
    pub async fn refresh<Gateway>(&mut self, gateway: &Gateway, query: &PropertyQuery) -> bool
    where
        Gateway: PropertyGateway + ?Sized,
    {
        let ticket = self.begin();
        let outcome = gateway.list_properties(query).await;
        self.resolve(ticket, outcome)
    }

    /// The most recently applied result set.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error from the most recently applied failed fetch, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ListingError> {
        self.error.as_ref()
    }
}
