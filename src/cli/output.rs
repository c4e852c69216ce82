//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use crate::listings::error::ListingError;
use crate::listings::models::Property;
use crate::listings::submissions::{ProfileSummary, ReviewBoard};

fn io_error(error: &io::Error) -> ListingError {
    ListingError::Io {
        message: error.to_string(),
    }
}

/// Writes a property listing to stdout.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_listing(properties: &[Property]) -> Result<(), ListingError> {
    let mut stdout = io::stdout().lock();
    write_listing_to(&mut stdout, properties)
}

/// Writes a property listing to the given writer.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_listing_to<W: Write>(
    writer: &mut W,
    properties: &[Property],
) -> Result<(), ListingError> {
    if properties.is_empty() {
        writeln!(writer, "No properties found. Try adjusting your filters.")
            .map_err(|e| io_error(&e))?;
        return Ok(());
    }

    writeln!(writer, "Available properties:").map_err(|e| io_error(&e))?;
    for property in properties {
        writeln!(
            writer,
            "  {title} ({location}) | ${price}/mo | {bedrooms} bd / {bathrooms} ba (id {id})",
            title = property.title,
            location = property.location,
            price = property.price,
            bedrooms = property.bedrooms,
            bathrooms = property.bathrooms,
            id = property.id,
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "{} properties shown", properties.len()).map_err(|e| io_error(&e))
}

/// Writes a property detail view with its reviews to stdout.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_detail(property: &Property, board: &ReviewBoard) -> Result<(), ListingError> {
    let mut stdout = io::stdout().lock();
    write_detail_to(&mut stdout, property, board)
}

/// Writes a property detail view with its reviews to the given writer.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_detail_to<W: Write>(
    writer: &mut W,
    property: &Property,
    board: &ReviewBoard,
) -> Result<(), ListingError> {
    writeln!(writer, "{}", property.title).map_err(|e| io_error(&e))?;
    writeln!(writer, "{}, {}", property.address, property.location).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "${price}/mo | {bedrooms} bd / {bathrooms} ba | {square_feet} sq ft | {furnished}",
        price = property.price,
        bedrooms = property.bedrooms,
        bathrooms = property.bathrooms,
        square_feet = property.square_feet,
        furnished = if property.is_furnished {
            "furnished"
        } else {
            "unfurnished"
        },
    )
    .map_err(|e| io_error(&e))?;

    if !property.amenities.is_empty() {
        writeln!(writer, "Amenities: {}", property.amenities.join(", "))
            .map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Contact: {} <{}> {}",
        property.landlord_name, property.landlord_email, property.landlord_phone
    )
    .map_err(|e| io_error(&e))?;

    writeln!(
        writer,
        "Rating: {} ({} reviews)",
        board.average,
        board.reviews.len()
    )
    .map_err(|e| io_error(&e))?;
    for review in &board.reviews {
        writeln!(
            writer,
            "  [{rating}/5] {comment}",
            rating = review.rating,
            comment = review.comment,
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the signed-in user's profile summary to stdout.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_profile(summary: &ProfileSummary) -> Result<(), ListingError> {
    let mut stdout = io::stdout().lock();
    write_profile_to(&mut stdout, summary)
}

/// Writes the signed-in user's profile summary to the given writer.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_profile_to<W: Write>(
    writer: &mut W,
    summary: &ProfileSummary,
) -> Result<(), ListingError> {
    writeln!(writer, "My inquiries:").map_err(|e| io_error(&e))?;
    if summary.inquiries.is_empty() {
        writeln!(writer, "  You haven't made any inquiries yet.").map_err(|e| io_error(&e))?;
    }
    for inquiry in &summary.inquiries {
        writeln!(
            writer,
            "  [{status}] property {property_id}: {message} (sent {sent})",
            status = inquiry.status.label(),
            property_id = inquiry.property_id,
            message = inquiry.message,
            sent = inquiry.created_at.format("%Y-%m-%d"),
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer, "My reviews:").map_err(|e| io_error(&e))?;
    if summary.reviews.is_empty() {
        writeln!(writer, "  You haven't written any reviews yet.").map_err(|e| io_error(&e))?;
    }
    for review in &summary.reviews {
        writeln!(
            writer,
            "  [{rating}/5] property {property_id}: {comment} (posted {posted})",
            rating = review.rating,
            property_id = review.property_id,
            comment = review.comment,
            posted = review.created_at.format("%Y-%m-%d"),
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes a confirmation line to stdout.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_confirmation(message: &str) -> Result<(), ListingError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|e| io_error(&e))
}
