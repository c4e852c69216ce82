//! Test helpers for constructing listing fixtures.
//!
//! These builders keep property, review, and inquiry rows consistent across
//! unit and behavioural tests. The JSON forms mirror what the listings service
//! returns so the same fixtures can seed mock HTTP responses.

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use super::{ContactInquiry, InquiryStatus, Property, PropertyReview};

/// Constructs a property with routine defaults and the given id and title.
///
/// # Examples
///
/// ```
/// use hokie_nest::listings::models::test_support::sample_property;
///
/// let property = sample_property("prop-1", "Sunny Loft");
/// assert_eq!(property.id, "prop-1");
/// assert_eq!(property.bedrooms, 2);
/// ```
#[must_use]
pub fn sample_property(id: &str, title: &str) -> Property {
    Property {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "A well-kept unit close to campus".to_owned(),
        price: 1000.0,
        address: "123 Test St".to_owned(),
        location: "Blacksburg".to_owned(),
        bedrooms: 2,
        bathrooms: 1.0,
        square_feet: 900,
        images: Vec::new(),
        amenities: vec!["parking".to_owned()],
        landlord_name: "Test Landlord".to_owned(),
        landlord_email: "landlord@example.com".to_owned(),
        landlord_phone: "123-456-7890".to_owned(),
        is_furnished: false,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
    }
}

/// JSON row for [`sample_property`], as served by the listings service.
#[must_use]
pub fn sample_property_row(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "A well-kept unit close to campus",
        "price": 1000.0,
        "address": "123 Test St",
        "location": "Blacksburg",
        "bedrooms": 2,
        "bathrooms": 1.0,
        "square_feet": 900,
        "images": [],
        "amenities": ["parking"],
        "landlord_name": "Test Landlord",
        "landlord_email": "landlord@example.com",
        "landlord_phone": "123-456-7890",
        "is_furnished": false,
        "created_at": "2024-03-01T00:00:00Z",
        "updated_at": "2024-03-01T00:00:00Z"
    })
}

/// Constructs a review row for the given property with the given rating.
#[must_use]
pub fn sample_review(id: &str, property_id: &str, rating: u8) -> PropertyReview {
    PropertyReview {
        id: id.to_owned(),
        property_id: property_id.to_owned(),
        user_id: "user-1".to_owned(),
        rating,
        comment: "Comfortable and quiet".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
    }
}

/// JSON row for [`sample_review`], as served by the listings service.
#[must_use]
pub fn sample_review_row(id: &str, property_id: &str, rating: u8) -> Value {
    json!({
        "id": id,
        "property_id": property_id,
        "user_id": "user-1",
        "rating": rating,
        "comment": "Comfortable and quiet",
        "created_at": "2024-03-01T00:00:00Z",
        "updated_at": "2024-03-01T00:00:00Z"
    })
}

/// Constructs a pending contact inquiry for the given property.
#[must_use]
pub fn sample_inquiry(id: &str, property_id: &str) -> ContactInquiry {
    ContactInquiry {
        id: id.to_owned(),
        property_id: property_id.to_owned(),
        user_id: "user-1".to_owned(),
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        phone: "123-456-7890".to_owned(),
        message: "Is this still available?".to_owned(),
        status: InquiryStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default(),
    }
}

/// JSON row for a contact inquiry with the given wire-form status.
#[must_use]
pub fn sample_inquiry_row(id: &str, property_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "property_id": property_id,
        "user_id": "user-1",
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "123-456-7890",
        "message": "Is this still available?",
        "status": status,
        "created_at": "2024-03-01T00:00:00Z",
        "updated_at": "2024-03-01T00:00:00Z"
    })
}
