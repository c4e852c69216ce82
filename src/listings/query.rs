//! Translation of filter criteria into listings-service query constraints.
//!
//! The service speaks a PostgREST-style dialect: each query-string pair is a
//! conjunctive constraint, except the `or=(...)` pair which is a disjunction
//! of its inner matches. Composition is deterministic so the same criteria
//! always produce the same request.

use super::error::ListingError;
use super::filter::FilterCriteria;

/// A single property search: an optional result cap plus optional criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    /// Caps the number of returned rows; must be positive when set.
    pub limit: Option<u32>,
    /// Optional filter criteria.
    pub filters: Option<FilterCriteria>,
}

impl PropertyQuery {
    /// A query with no cap and no criteria.
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self {
            limit: None,
            filters: None,
        }
    }

    /// A query returning at most `limit` newest listings.
    #[must_use]
    pub const fn newest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            filters: None,
        }
    }

    /// A query applying the given criteria without a cap.
    #[must_use]
    pub const fn filtered(criteria: FilterCriteria) -> Self {
        Self {
            limit: None,
            filters: Some(criteria),
        }
    }

    /// Composes the ordered query pairs for the `properties` table.
    ///
    /// Results always select every column and order by creation time,
    /// newest first. Bedroom and bathroom constraints are exact matches,
    /// not lower bounds; the original product's "N+" labelling mismatch is
    /// preserved deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidLimit`] when a limit of zero is set.
    pub fn to_query_pairs(&self) -> Result<Vec<(String, String)>, ListingError> {
        if self.limit == Some(0) {
            return Err(ListingError::InvalidLimit);
        }

        let mut pairs = vec![
            ("select".to_owned(), "*".to_owned()),
            ("order".to_owned(), "created_at.desc".to_owned()),
        ];

        if let Some(filters) = &self.filters {
            push_filter_pairs(&mut pairs, filters);
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }

        Ok(pairs)
    }
}

fn push_filter_pairs(pairs: &mut Vec<(String, String)>, filters: &FilterCriteria) {
    if let Some(term) = trimmed(filters.search_term.as_deref()) {
        pairs.push((
            "or".to_owned(),
            format!("(title.ilike.*{term}*,location.ilike.*{term}*)"),
        ));
    }

    if let Some(min_price) = filters.min_price {
        pairs.push(("price".to_owned(), format!("gte.{min_price}")));
    }

    if let Some(max_price) = filters.max_price {
        pairs.push(("price".to_owned(), format!("lte.{max_price}")));
    }

    if let Some(bedrooms) = filters.bedrooms {
        pairs.push(("bedrooms".to_owned(), format!("eq.{bedrooms}")));
    }

    if let Some(bathrooms) = filters.bathrooms {
        pairs.push(("bathrooms".to_owned(), format!("eq.{bathrooms}")));
    }

    if let Some(location) = trimmed(filters.location.as_deref()) {
        pairs.push(("location".to_owned(), format!("ilike.*{location}*")));
    }

    if let Some(is_furnished) = filters.is_furnished {
        pairs.push(("is_furnished".to_owned(), format!("eq.{is_furnished}")));
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
