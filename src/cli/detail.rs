//! Single property detail operation.

use crate::config::NestConfig;
use crate::listings::error::ListingError;
use crate::listings::gateway::{PropertyGateway, RestPropertyGateway, RestReviewGateway};
use crate::listings::submissions::ReviewDesk;

use super::output::write_detail;

/// Shows one property together with its reviews and average rating.
///
/// # Errors
///
/// Propagates configuration, auth, and gateway failures, including
/// [`ListingError::PropertyNotFound`] for an unknown id.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    let property_id = config.require_property_id()?;
    let context = super::connect(config).await?;

    let properties = RestPropertyGateway::new(
        context.endpoint.clone(),
        &context.key,
        context.holder.access_token(),
    )?;
    let reviews = RestReviewGateway::new(
        context.endpoint,
        &context.key,
        context.holder.access_token(),
    )?;

    let property = properties.property(property_id).await?;
    let board = ReviewDesk::new(&reviews).load(property_id).await?;
    write_detail(&property, &board)
}
