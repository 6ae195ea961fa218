//! Integration tests for the session bridge and cookie flows.

mod helpers;

use http::StatusCode;
use serde_json::json;

use cantina_entity::user::Role;

#[tokio::test]
async fn bridge_turns_a_token_into_a_session_cookie() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;
    let token = app.login("a@x.com", "right").await;

    let response = app
        .request(
            "POST",
            "/api/auth/session",
            Some(json!({ "token": token })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["ok"], true);
    let cookie = response.session_cookie().expect("session cookie set");

    // The minted session now works on the web pipeline.
    let profile = app
        .request("GET", "/profile", None, None, Some(&cookie))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
}

#[tokio::test]
async fn bridge_rejects_expired_token_without_setting_a_cookie() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let response = app
        .request(
            "POST",
            "/api/auth/session",
            Some(json!({ "token": helpers::expired_token("a@x.com") })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.session_cookie().is_none());
}

#[tokio::test]
async fn bridge_failure_reasons_are_collapsed() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let garbage = app
        .request(
            "POST",
            "/api/auth/session",
            Some(json!({ "token": "not-a-token" })),
            None,
            None,
        )
        .await;

    // A validly signed token whose subject resolves to nobody.
    let orphan = {
        let now = chrono::Utc::now().timestamp();
        let claims = cantina_auth::jwt::Claims {
            sub: "ghost@x.com".to_string(),
            iat: now,
            exp: now + 3600,
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
        )
        .unwrap()
    };
    let unresolvable = app
        .request(
            "POST",
            "/api/auth/session",
            Some(json!({ "token": orphan })),
            None,
            None,
        )
        .await;

    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unresolvable.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body, unresolvable.body);
}

#[tokio::test]
async fn session_wins_over_a_conflicting_bearer_token() {
    let app = helpers::TestApp::new();
    app.create_user("alice@x.com", "right", Role::Client).await;
    app.create_user("bob@x.com", "right", Role::Staff).await;

    let cookie = app.web_login("alice@x.com", "right").await;
    let bob_token = app.login("bob@x.com", "right").await;

    // Same request carries Alice's session and Bob's token.
    let response = app
        .request("GET", "/api/profile", None, Some(&bob_token), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "alice@x.com");
}

#[tokio::test]
async fn web_login_redirects_by_role_and_migrates_the_session() {
    let app = helpers::TestApp::new();
    app.create_user("client@x.com", "right", Role::Client).await;
    app.create_user("staff@x.com", "right", Role::Staff).await;

    let client_login = app
        .form_request("/login", "email=client@x.com&secret=right", None)
        .await;
    assert_eq!(client_login.status, StatusCode::SEE_OTHER);
    assert_eq!(client_login.headers.get("location").unwrap(), "/menu");
    let first_cookie = client_login.session_cookie().unwrap();

    // Logging in again from the same browser abandons the old session id.
    let second_login = app
        .form_request(
            "/login",
            "email=client@x.com&secret=right",
            Some(&first_cookie),
        )
        .await;
    let second_cookie = second_login.session_cookie().unwrap();
    assert_ne!(first_cookie, second_cookie);

    let stale = app
        .request("GET", "/profile", None, None, Some(&first_cookie))
        .await;
    assert_eq!(stale.status, StatusCode::SEE_OTHER);

    let staff_login = app
        .form_request("/login", "email=staff@x.com&secret=right", None)
        .await;
    assert_eq!(staff_login.headers.get("location").unwrap(), "/admin");
}

#[tokio::test]
async fn failed_web_login_redirects_back_with_error_flag() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;

    let response = app
        .form_request("/login", "email=a@x.com&secret=wrong", None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers.get("location").unwrap(),
        "/login?error=true"
    );
    assert!(response.session_cookie().is_none());
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = helpers::TestApp::new();
    app.create_user("a@x.com", "right", Role::Client).await;
    let cookie = app.web_login("a@x.com", "right").await;

    let before = app.request("GET", "/cart", None, None, Some(&cookie)).await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app.form_request("/logout", "", Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::SEE_OTHER);

    // The old cookie no longer resolves to a principal.
    let after = app.request("GET", "/cart", None, None, Some(&cookie)).await;
    assert_eq!(after.status, StatusCode::SEE_OTHER);
    assert_eq!(after.headers.get("location").unwrap(), "/login");
}
