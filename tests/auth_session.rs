//! Integration tests for the auth gateway and session holder.

use hokie_nest::auth::{AuthenticatedUser, Session};
use hokie_nest::{ListingError, RestAuthGateway, ServiceEndpoint, ServiceKey, SessionHolder};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_gateway(server: &MockServer) -> Result<RestAuthGateway, ListingError> {
    let endpoint = ServiceEndpoint::parse(&server.uri())?;
    let key = ServiceKey::new("test-anon-key")?;
    RestAuthGateway::new(endpoint, key)
}

#[tokio::test]
async fn sign_in_publishes_the_authenticated_user() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    let session_body = json!({
        "access_token": "token-1",
        "user": { "id": "user-1", "email": "resident@vt.edu" }
    });
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&session_body))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = build_gateway(&server)?;
    let mut holder = SessionHolder::new();
    let mut watcher = holder.subscribe();

    holder
        .sign_in(&gateway, "resident@vt.edu", "hunter2")
        .await?;

    let state = holder.state();
    assert!(!state.loading);
    assert_eq!(
        state.user.as_ref().map(|user| user.id.as_str()),
        Some("user-1")
    );
    assert_eq!(holder.access_token(), Some("token-1"));
    assert!(watcher.changed().await);
    assert_eq!(watcher.current(), state);
    Ok(())
}

#[tokio::test]
async fn rejected_credentials_become_an_authentication_error() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error_description": "Invalid login credentials" })),
        )
        .mount(&server)
        .await;

    let gateway = build_gateway(&server)?;
    let mut holder = SessionHolder::new();

    let result = holder.sign_in(&gateway, "resident@vt.edu", "wrong").await;

    assert!(matches!(
        result,
        Err(ListingError::Authentication { ref message }) if message.contains("Invalid login credentials")
    ));
    assert!(holder.state().user.is_none());
    Ok(())
}

#[tokio::test]
async fn sign_out_revokes_the_token_and_clears_the_session() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("Authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = build_gateway(&server)?;
    let mut holder = SessionHolder::new();
    holder.resolve_initial(Some(Session {
        access_token: "token-1".to_owned(),
        user: AuthenticatedUser {
            id: "user-1".to_owned(),
            email: None,
        },
    }));

    holder.sign_out(&gateway).await?;

    assert!(holder.state().user.is_none());
    assert_eq!(holder.access_token(), None);
    Ok(())
}

#[tokio::test]
async fn sign_up_without_an_immediate_session_resolves_signed_out() -> Result<(), ListingError> {
    let server = MockServer::start().await;
    // Email-confirmation flows answer signup with a user but no token.
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": "user-2", "email": "newcomer@vt.edu" }
        })))
        .mount(&server)
        .await;

    let gateway = build_gateway(&server)?;
    let mut holder = SessionHolder::new();

    holder.sign_up(&gateway, "newcomer@vt.edu", "hunter2").await?;

    let state = holder.state();
    assert!(state.user.is_none());
    assert!(!state.loading);
    Ok(())
}
