//! Property review submission operation.

use crate::config::NestConfig;
use crate::listings::error::ListingError;
use crate::listings::gateway::RestReviewGateway;
use crate::listings::models::Rating;
use crate::listings::submissions::ReviewDesk;

use super::output::write_confirmation;

/// Submits a review for the configured property.
///
/// # Errors
///
/// Returns [`ListingError::InvalidRating`] for an out-of-range rating,
/// [`ListingError::SignedOut`] when no session is established, and
/// propagates gateway failures.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    let property_id = config.require_property_id()?;
    let rating_value = config.rating.ok_or_else(|| ListingError::Configuration {
        message: "a rating is required (use --rating)".to_owned(),
    })?;
    let rating = Rating::new(rating_value)?;
    let comment = config.comment.clone().unwrap_or_default();

    let context = super::connect(config).await?;
    let gateway = RestReviewGateway::new(
        context.endpoint,
        &context.key,
        context.holder.access_token(),
    )?;
    let desk = ReviewDesk::new(&gateway);
    desk.submit(&context.holder.state(), property_id, rating, &comment)
        .await?;

    write_confirmation("Review submitted successfully!")
}
