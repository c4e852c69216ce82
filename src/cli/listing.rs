//! Property search and listing operation.

use crate::config::NestConfig;
use crate::listings::error::ListingError;
use crate::listings::feed::PropertyFeed;
use crate::listings::gateway::RestPropertyGateway;

use super::output::write_listing;

/// Searches properties with the configured filters and lists them.
///
/// # Errors
///
/// Propagates configuration, auth, and gateway failures; a feed-level
/// fetch error is surfaced as the typed error it resolved with.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    let context = super::connect(config).await?;
    let gateway = RestPropertyGateway::new(
        context.endpoint,
        &context.key,
        context.holder.access_token(),
    )?;

    let mut feed = PropertyFeed::new();
    feed.refresh(&gateway, &config.property_query()).await;

    if let Some(error) = feed.error() {
        return Err(error.clone());
    }
    write_listing(feed.properties())
}
