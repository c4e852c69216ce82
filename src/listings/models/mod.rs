//! Data models for properties, contact inquiries, and reviews.
//!
//! Read-side types deserialise rows returned by the listings service;
//! `New*` types serialise insert payloads. Rows are immutable from the
//! client's perspective, so nothing here exposes mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ListingError;

#[cfg(feature = "test-support")]
pub mod test_support;

/// A rental property listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    /// Row identifier.
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Monthly rent.
    pub price: f64,
    /// Street address.
    pub address: String,
    /// Free-text locality used for substring search.
    pub location: String,
    /// Bedroom count.
    pub bedrooms: u32,
    /// Bathroom count; half-steps such as 1.5 are valid.
    pub bathrooms: f64,
    /// Floor area in square feet.
    pub square_feet: u32,
    /// Ordered image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Amenity labels.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Landlord display name.
    pub landlord_name: String,
    /// Landlord contact email.
    pub landlord_email: String,
    /// Landlord contact phone.
    pub landlord_phone: String,
    /// Whether the unit is let furnished.
    pub is_furnished: bool,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last row update time.
    pub updated_at: DateTime<Utc>,
}

/// Processing state of a contact inquiry.
///
/// Only ever read by this client; transitions happen through an
/// administrative process outside this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Submitted and awaiting contact.
    Pending,
    /// Landlord has been contacted.
    Contacted,
    /// Inquiry closed successfully.
    Resolved,
    /// Inquiry withdrawn or rejected.
    Cancelled,
}

impl InquiryStatus {
    /// Capitalised display form of the wire value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Contacted => "Contacted",
            Self::Resolved => "Resolved",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A contact inquiry row as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactInquiry {
    /// Row identifier.
    pub id: String,
    /// Property the inquiry concerns.
    pub property_id: String,
    /// Authenticated user who submitted the inquiry.
    pub user_id: String,
    /// Contact name supplied on the form.
    pub name: String,
    /// Contact email supplied on the form.
    pub email: String,
    /// Contact phone supplied on the form.
    pub phone: String,
    /// Message body.
    pub message: String,
    /// Processing state.
    pub status: InquiryStatus,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last row update time.
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new contact inquiry.
///
/// The service assigns id, timestamps, and the initial pending status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContactInquiry {
    /// Property the inquiry concerns.
    pub property_id: String,
    /// Authenticated user submitting the inquiry.
    pub user_id: String,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Message body.
    pub message: String,
}

/// Star rating constrained to the 1–5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Validates that the rating falls within 1–5.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidRating`] for values outside the range.
    pub const fn new(value: u8) -> Result<Self, ListingError> {
        if matches!(value, 1..=5) {
            Ok(Self(value))
        } else {
            Err(ListingError::InvalidRating { value })
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A property review row as stored by the service.
///
/// Reviews are never edited or deleted in-app, so this is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyReview {
    /// Row identifier.
    pub id: String,
    /// Property the review concerns.
    pub property_id: String,
    /// Authenticated user who wrote the review.
    pub user_id: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last row update time.
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new property review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPropertyReview {
    /// Property the review concerns.
    pub property_id: String,
    /// Authenticated user writing the review.
    pub user_id: String,
    /// Validated star rating.
    pub rating: Rating,
    /// Review text.
    pub comment: String,
}

/// Formats the mean rating as a one-decimal string, or `"N/A"` when there
/// are no reviews.
#[must_use]
pub fn average_rating(reviews: &[PropertyReview]) -> String {
    if reviews.is_empty() {
        return "N/A".to_owned();
    }
    let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "review counts stay far below f64 integer precision"
    )]
    let average = f64::from(total) / reviews.len() as f64;
    format!("{average:.1}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        InquiryStatus, NewPropertyReview, Property, PropertyReview, Rating, average_rating,
    };
    use crate::listings::error::ListingError;

    fn review(id: &str, rating: u8) -> PropertyReview {
        serde_json::from_value(json!({
            "id": id,
            "property_id": "prop-1",
            "user_id": "user-1",
            "rating": rating,
            "comment": "fine",
            "created_at": "2024-03-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z"
        }))
        .expect("review fixture should deserialise")
    }

    #[test]
    fn property_deserialises_from_service_row() {
        let row = json!({
            "id": "1",
            "title": "Test Property",
            "description": "A test property",
            "price": 1000,
            "address": "123 Test St",
            "location": "Test Location",
            "bedrooms": 2,
            "bathrooms": 1.5,
            "square_feet": 1000,
            "images": ["https://example.invalid/a.jpg"],
            "amenities": ["parking"],
            "landlord_name": "Test Landlord",
            "landlord_email": "test@example.com",
            "landlord_phone": "123-456-7890",
            "is_furnished": false,
            "created_at": "2024-03-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z"
        });

        let property: Property =
            serde_json::from_value(row).expect("property row should deserialise");
        assert_eq!(property.title, "Test Property");
        assert_eq!(property.bedrooms, 2);
        assert!((property.bathrooms - 1.5).abs() < f64::EPSILON);
        assert!(!property.is_furnished);
    }

    #[test]
    fn property_tolerates_missing_image_and_amenity_arrays() {
        let row = json!({
            "id": "1",
            "title": "Bare",
            "description": "",
            "price": 500,
            "address": "1 Bare St",
            "location": "Nowhere",
            "bedrooms": 1,
            "bathrooms": 1,
            "square_feet": 400,
            "landlord_name": "L",
            "landlord_email": "l@example.com",
            "landlord_phone": "555",
            "is_furnished": true,
            "created_at": "2024-03-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z"
        });

        let property: Property =
            serde_json::from_value(row).expect("row without arrays should deserialise");
        assert!(property.images.is_empty());
        assert!(property.amenities.is_empty());
    }

    #[rstest]
    #[case::pending(json!("pending"), InquiryStatus::Pending)]
    #[case::contacted(json!("contacted"), InquiryStatus::Contacted)]
    #[case::resolved(json!("resolved"), InquiryStatus::Resolved)]
    #[case::cancelled(json!("cancelled"), InquiryStatus::Cancelled)]
    fn inquiry_status_uses_lowercase_wire_form(
        #[case] wire: serde_json::Value,
        #[case] expected: InquiryStatus,
    ) {
        let status: InquiryStatus =
            serde_json::from_value(wire).expect("status should deserialise");
        assert_eq!(status, expected);
    }

    #[rstest]
    #[case::pending(InquiryStatus::Pending, "Pending")]
    #[case::cancelled(InquiryStatus::Cancelled, "Cancelled")]
    fn inquiry_status_labels_capitalise_the_wire_form(
        #[case] status: InquiryStatus,
        #[case] expected: &str,
    ) {
        assert_eq!(status.label(), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn rating_accepts_in_range_values(#[case] value: u8) {
        assert_eq!(Rating::new(value).map(Rating::get).ok(), Some(value));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rating_rejects_out_of_range_values(#[case] value: u8) {
        assert_eq!(
            Rating::new(value),
            Err(ListingError::InvalidRating { value })
        );
    }

    #[test]
    fn new_review_serialises_rating_as_plain_integer() {
        let rating = Rating::new(4).expect("4 is a valid rating");
        let payload = NewPropertyReview {
            property_id: "prop-1".to_owned(),
            user_id: "user-1".to_owned(),
            rating,
            comment: "Great spot".to_owned(),
        };

        let value = serde_json::to_value(&payload).expect("payload should serialise");
        assert_eq!(value.get("rating"), Some(&json!(4)));
    }

    #[test]
    fn average_rating_formats_to_one_decimal() {
        let reviews = vec![review("1", 5), review("2", 3)];
        assert_eq!(average_rating(&reviews), "4.0");
    }

    #[test]
    fn average_rating_of_no_reviews_is_not_applicable() {
        assert_eq!(average_rating(&[]), "N/A");
    }
}
