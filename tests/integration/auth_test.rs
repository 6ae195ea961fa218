//! Integration tests for token issuance and the API pipeline.

mod helpers;

use http::StatusCode;
use serde_json::json;

use cantina_entity::user::Role;

#[tokio::test]
async fn login_issues_token_usable_on_protected_route() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "secret": "right" })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["data"]["token"].as_str().unwrap().to_string();
    assert!(response.body["data"]["expires_at"].is_string());

    let profile = app
        .request("GET", "/api/profile", None, Some(&token), None)
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn wrong_secret_is_rejected_without_a_token() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "secret": "wrong" })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.get("data").is_none());
    assert_eq!(response.body["message"], "invalid credentials");
}

#[tokio::test]
async fn unknown_user_is_indistinguishable_from_wrong_secret() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let wrong_secret = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "secret": "wrong" })),
            None,
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@x.com", "secret": "right" })),
            None,
            None,
        )
        .await;

    assert_eq!(wrong_secret.status, unknown_user.status);
    assert_eq!(wrong_secret.body, unknown_user.body);
}

#[tokio::test]
async fn client_token_on_staff_route_is_forbidden_not_unauthenticated() {
    let app = helpers::TestApp::new();
    app.create_user("client@x.com", "right", Role::Client).await;
    let token = app.login("client@x.com", "right").await;

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn staff_token_reaches_staff_routes() {
    let app = helpers::TestApp::new();
    app.create_user("staff@x.com", "right", Role::Staff).await;
    let token = app.login("staff@x.com", "right").await;

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["registered_users"], 1);
}

#[tokio::test]
async fn protected_route_without_credentials_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/profile", None, None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn malformed_bearer_collapses_to_unauthorized() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let garbage = app
        .request("GET", "/api/profile", None, Some("not-a-token"), None)
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let expired = helpers::expired_token("a@x.com");
    let stale = app
        .request("GET", "/api/profile", None, Some(&expired), None)
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    assert_eq!(stale.body, garbage.body);
}

#[tokio::test]
async fn auth_endpoints_ignore_bad_authorization_headers() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    // A first-time caller may carry a stale or broken header; the auth
    // endpoints must not resolve it.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "secret": "right" })),
            Some("garbage"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_route_is_gated_before_404() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let anonymous = app.request("GET", "/api/nope", None, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app.login("a@x.com", "right").await;
    let authenticated = app
        .request("GET", "/api/nope", None, Some(&token), None)
        .await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}
