//! Integration tests for the signed-in user's profile view.

use hokie_nest::auth::AuthenticatedUser;
use hokie_nest::listings::models::InquiryStatus;
use hokie_nest::listings::models::test_support::{sample_inquiry_row, sample_review_row};
use hokie_nest::listings::{ProfileDesk, RestInquiryGateway, RestReviewGateway};
use hokie_nest::{ListingError, ServiceEndpoint, ServiceKey, SessionState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_gateways(
    server: &MockServer,
) -> Result<(RestInquiryGateway, RestReviewGateway), ListingError> {
    let endpoint = ServiceEndpoint::parse(&server.uri())?;
    let key = ServiceKey::new("test-anon-key")?;
    let inquiries = RestInquiryGateway::new(endpoint.clone(), &key, Some("token-1"))?;
    let reviews = RestReviewGateway::new(endpoint, &key, Some("token-1"))?;
    Ok((inquiries, reviews))
}

fn signed_in(user_id: &str) -> SessionState {
    SessionState {
        user: Some(AuthenticatedUser {
            id: user_id.to_owned(),
            email: Some("resident@vt.edu".to_owned()),
        }),
        loading: false,
    }
}

#[tokio::test]
async fn profile_loads_the_users_inquiries_and_reviews() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    let inquiry_rows = vec![
        sample_inquiry_row("inq-2", "prop-2", "contacted"),
        sample_inquiry_row("inq-1", "prop-1", "pending"),
    ];
    Mock::given(method("GET"))
        .and(path("/rest/v1/contact_inquiries"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", "eq.user-1"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&inquiry_rows))
        .expect(1)
        .mount(&server)
        .await;

    let review_rows = vec![sample_review_row("review-1", "prop-3", 4)];
    Mock::given(method("GET"))
        .and(path("/rest/v1/property_reviews"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", "eq.user-1"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&review_rows))
        .expect(1)
        .mount(&server)
        .await;

    let (inquiries, reviews) = build_gateways(&server)?;
    let desk = ProfileDesk::new(&inquiries, &reviews);

    let summary = desk.load(&signed_in("user-1")).await?;

    assert_eq!(summary.inquiries.len(), 2);
    assert_eq!(
        summary
            .inquiries
            .first()
            .map(|inquiry| inquiry.status),
        Some(InquiryStatus::Contacted)
    );
    assert_eq!(
        summary.reviews.first().map(|review| review.rating),
        Some(4)
    );
    Ok(())
}

#[tokio::test]
async fn signed_out_profile_issues_no_requests() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contact_inquiries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/property_reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (inquiries, reviews) = build_gateways(&server)?;
    let desk = ProfileDesk::new(&inquiries, &reviews);

    let session = SessionState {
        user: None,
        loading: false,
    };
    let result = desk.load(&session).await;

    assert!(matches!(result, Err(ListingError::SignedOut { .. })));
    Ok(())
}

#[tokio::test]
async fn profile_surfaces_a_service_failure() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contact_inquiries"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "message": "backend down" })),
        )
        .mount(&server)
        .await;

    let (inquiries, reviews) = build_gateways(&server)?;
    let desk = ProfileDesk::new(&inquiries, &reviews);

    let result = desk.load(&signed_in("user-1")).await;

    assert!(matches!(
        result,
        Err(ListingError::Api { ref message }) if message.contains("backend down")
    ));
    Ok(())
}
