//! Signed-in user's profile operation.

use crate::config::NestConfig;
use crate::listings::error::ListingError;
use crate::listings::gateway::{RestInquiryGateway, RestReviewGateway};
use crate::listings::submissions::ProfileDesk;

use super::output::write_profile;

/// Shows the signed-in user's inquiries and reviews, newest first.
///
/// # Errors
///
/// Returns [`ListingError::SignedOut`] when no session is established,
/// and propagates configuration, auth, and gateway failures.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    let context = super::connect(config).await?;

    let inquiries = RestInquiryGateway::new(
        context.endpoint.clone(),
        &context.key,
        context.holder.access_token(),
    )?;
    let reviews = RestReviewGateway::new(
        context.endpoint,
        &context.key,
        context.holder.access_token(),
    )?;

    let desk = ProfileDesk::new(&inquiries, &reviews);
    let summary = desk.load(&context.holder.state()).await?;
    write_profile(&summary)
}
