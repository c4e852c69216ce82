//! Auth-gated facades for inquiries, reviews, and the profile view.
//!
//! Every write, and the profile read of a user's own rows, must carry the
//! user id of a signed-in session. The gate lives here, client-side: a
//! signed-out call fails before any request is issued. True enforcement
//! belongs to the hosted service.

use crate::auth::SessionState;

use super::error::ListingError;
use super::gateway::{InquiryGateway, ReviewGateway};
use super::models::{
    ContactInquiry, NewContactInquiry, NewPropertyReview, PropertyReview, Rating, average_rating,
};

/// Reviews for one property together with the rendered average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewBoard {
    /// Reviews, newest first.
    pub reviews: Vec<PropertyReview>,
    /// Mean rating as a one-decimal string, or `"N/A"`.
    pub average: String,
}

/// Facade for reading and submitting reviews through a gateway.
pub struct ReviewDesk<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ReviewDesk<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Creates a desk over the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Loads all reviews for a property and their average rating.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn load(&self, property_id: &str) -> Result<ReviewBoard, ListingError> {
        let reviews = self.client.list_reviews(property_id).await?;
        let average = average_rating(&reviews);
        Ok(ReviewBoard { reviews, average })
    }

    /// Submits a review on behalf of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::SignedOut`] without issuing a request when
    /// the session has no user; otherwise propagates gateway failures.
    pub async fn submit(
        &self,
        session: &SessionState,
        property_id: &str,
        rating: Rating,
        comment: &str,
    ) -> Result<(), ListingError> {
        let user = session.user.as_ref().ok_or_else(|| ListingError::SignedOut {
            action: "leave a review".to_owned(),
        })?;

        let review = NewPropertyReview {
            property_id: property_id.to_owned(),
            user_id: user.id.clone(),
            rating,
            comment: comment.to_owned(),
        };
        self.client.submit_review(&review).await
    }
}

/// Contact details collected by the inquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryForm {
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Message body.
    pub message: String,
}

/// Facade for submitting contact inquiries through a gateway.
pub struct InquiryDesk<'client, Gateway>
where
    Gateway: InquiryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> InquiryDesk<'client, Gateway>
where
    Gateway: InquiryGateway,
{
    /// Creates a desk over the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Submits an inquiry on behalf of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::SignedOut`] without issuing a request when
    /// the session has no user; otherwise propagates gateway failures.
    pub async fn submit(
        &self,
        session: &SessionState,
        property_id: &str,
        form: InquiryForm,
    ) -> Result<(), ListingError> {
        let user = session.user.as_ref().ok_or_else(|| ListingError::SignedOut {
            action: "send a message".to_owned(),
        })?;

        let inquiry = NewContactInquiry {
            property_id: property_id.to_owned(),
            user_id: user.id.clone(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
        };
        self.client.submit_inquiry(&inquiry).await
    }
}

/// The signed-in user's own inquiries and reviews, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Inquiries submitted by the user.
    pub inquiries: Vec<ContactInquiry>,
    /// Reviews written by the user.
    pub reviews: Vec<PropertyReview>,
}

/// Facade for loading the signed-in user's submission history.
pub struct ProfileDesk<'client, Inquiries, Reviews>
where
    Inquiries: InquiryGateway,
    Reviews: ReviewGateway,
{
    inquiries: &'client Inquiries,
    reviews: &'client Reviews,
}

impl<'client, Inquiries, Reviews> ProfileDesk<'client, Inquiries, Reviews>
where
    Inquiries: InquiryGateway,
    Reviews: ReviewGateway,
{
    /// Creates a desk over the provided gateways.
    #[must_use]
    pub const fn new(inquiries: &'client Inquiries, reviews: &'client Reviews) -> Self {
        Self { inquiries, reviews }
    }

    /// Loads the profile data for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::SignedOut`] without issuing a request when
    /// the session has no user; otherwise propagates gateway failures.
    pub async fn load(&self, session: &SessionState) -> Result<ProfileSummary, ListingError> {
        let user = session.user.as_ref().ok_or_else(|| ListingError::SignedOut {
            action: "view your profile".to_owned(),
        })?;

        let inquiries = self.inquiries.list_inquiries(&user.id).await?;
        let reviews = self.reviews.list_user_reviews(&user.id).await?;
        Ok(ProfileSummary { inquiries, reviews })
    }
}
