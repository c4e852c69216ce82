//! Contact inquiry submission operation.

use crate::config::NestConfig;
use crate::listings::error::ListingError;
use crate::listings::gateway::RestInquiryGateway;
use crate::listings::submissions::{InquiryDesk, InquiryForm};

use super::output::write_confirmation;

/// Submits a contact inquiry for the configured property.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] when form fields are missing,
/// [`ListingError::SignedOut`] when no session is established, and
/// propagates gateway failures.
pub async fn run(config: &NestConfig) -> Result<(), ListingError> {
    let property_id = config.require_property_id()?;
    let form = build_form(config)?;
    let context = super::connect(config).await?;

    let gateway = RestInquiryGateway::new(
        context.endpoint,
        &context.key,
        context.holder.access_token(),
    )?;
    let desk = InquiryDesk::new(&gateway);
    desk.submit(&context.holder.state(), property_id, form)
        .await?;

    write_confirmation("Message sent successfully!")
}

fn build_form(config: &NestConfig) -> Result<InquiryForm, ListingError> {
    let name = config
        .name
        .clone()
        .ok_or_else(|| ListingError::Configuration {
            message: "contact name is required (use --name)".to_owned(),
        })?;
    let email = config
        .email
        .clone()
        .ok_or_else(|| ListingError::Configuration {
            message: "contact email is required (use --email)".to_owned(),
        })?;
    let message = config
        .message
        .clone()
        .ok_or_else(|| ListingError::Configuration {
            message: "a message is required (use --message or -m)".to_owned(),
        })?;

    Ok(InquiryForm {
        name,
        email,
        phone: config.phone.clone().unwrap_or_default(),
        message,
    })
}
