//! Ephemeral search criteria for property listings.

/// Optional criteria narrowing a property search.
///
/// Every field is independent and optional; unset fields add no
/// constraint. `is_furnished` is deliberately tri-state: `None` means "any",
/// not "false". Blank strings are treated as unset when the criteria are
/// translated into a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Lower bound on monthly rent, inclusive.
    pub min_price: Option<f64>,
    /// Upper bound on monthly rent, inclusive.
    pub max_price: Option<f64>,
    /// Exact bedroom count.
    pub bedrooms: Option<u32>,
    /// Exact bathroom count; half-steps such as 1.5 are valid.
    pub bathrooms: Option<f64>,
    /// Case-insensitive substring match on the locality.
    pub location: Option<String>,
    /// Case-insensitive substring match on title or locality.
    pub search_term: Option<String>,
    /// Furnished state; `None` matches both.
    pub is_furnished: Option<bool>,
}

impl FilterCriteria {
    /// Creates criteria with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_price: None,
            max_price: None,
            bedrooms: None,
            bathrooms: None,
            location: None,
            search_term: None,
            is_furnished: None,
        }
    }

    /// Sets the inclusive lower rent bound.
    #[must_use]
    pub const fn with_min_price(mut self, value: f64) -> Self {
        self.min_price = Some(value);
        self
    }

    /// Sets the inclusive upper rent bound.
    #[must_use]
    pub const fn with_max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }

    /// Sets the exact bedroom count.
    #[must_use]
    pub const fn with_bedrooms(mut self, value: u32) -> Self {
        self.bedrooms = Some(value);
        self
    }

    /// Sets the exact bathroom count.
    #[must_use]
    pub const fn with_bathrooms(mut self, value: f64) -> Self {
        self.bathrooms = Some(value);
        self
    }

    /// Sets the locality substring.
    #[must_use]
    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = Some(value.into());
        self
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search_term(mut self, value: impl Into<String>) -> Self {
        self.search_term = Some(value.into());
        self
    }

    /// Sets the furnished state.
    #[must_use]
    pub const fn with_furnished(mut self, value: bool) -> Self {
        self.is_furnished = Some(value);
        self
    }

    /// True when no field constrains the search.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.is_furnished.is_none()
            && Self::text_unset(self.location.as_deref())
            && Self::text_unset(self.search_term.as_deref())
    }

    pub(super) fn text_unset(value: Option<&str>) -> bool {
        value.is_none_or(|text| text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::FilterCriteria;

    #[test]
    fn default_criteria_are_unconstrained() {
        assert!(FilterCriteria::new().is_unconstrained());
    }

    #[rstest]
    #[case::min_price(FilterCriteria::new().with_min_price(500.0))]
    #[case::bedrooms(FilterCriteria::new().with_bedrooms(2))]
    #[case::furnished(FilterCriteria::new().with_furnished(false))]
    #[case::search(FilterCriteria::new().with_search_term("loft"))]
    fn any_set_field_constrains(#[case] criteria: FilterCriteria) {
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn blank_text_fields_do_not_constrain() {
        let criteria = FilterCriteria::new()
            .with_search_term("   ")
            .with_location("");
        assert!(criteria.is_unconstrained());
    }
}
