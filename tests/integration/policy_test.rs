//! Integration tests for the per-pipeline authorization tables.

mod helpers;

use http::StatusCode;

use cantina_entity::user::Role;

#[tokio::test]
async fn public_pages_need_no_identity() {
    let app = helpers::TestApp::new();

    for path in ["/", "/menu", "/about", "/login", "/signup"] {
        let response = app.request("GET", path, None, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn protected_web_routes_redirect_anonymous_callers_to_login() {
    let app = helpers::TestApp::new();

    for path in ["/profile", "/cart", "/admin", "/admin/orders"] {
        let response = app.request("GET", path, None, None, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(response.headers.get("location").unwrap(), "/login");
    }
}

#[tokio::test]
async fn roles_gate_web_routes_exactly() {
    let app = helpers::TestApp::new();
    app.create_user("client@x.com", "right", Role::Client).await;
    app.create_user("staff@x.com", "right", Role::Staff).await;

    let client = app.web_login("client@x.com", "right").await;
    let staff = app.web_login("staff@x.com", "right").await;

    // Client side.
    let cart = app.request("GET", "/cart", None, None, Some(&client)).await;
    assert_eq!(cart.status, StatusCode::OK);
    let admin = app.request("GET", "/admin", None, None, Some(&client)).await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);

    // Staff side: no implicit access to client-only routes.
    let dashboard = app.request("GET", "/admin", None, None, Some(&staff)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    let staff_cart = app.request("GET", "/cart", None, None, Some(&staff)).await;
    assert_eq!(staff_cart.status, StatusCode::FORBIDDEN);
    let staff_profile = app
        .request("GET", "/profile", None, None, Some(&staff))
        .await;
    assert_eq!(staff_profile.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cart_flow_works_for_clients_on_both_surfaces() {
    let app = helpers::TestApp::new();
    let user = app.create_user("client@x.com", "right", Role::Client).await;
    let token = app.login("client@x.com", "right").await;

    let product = uuid_for_test();
    let added = app
        .request(
            "POST",
            "/api/cart/items",
            Some(serde_json::json!({ "product_id": product, "quantity": 2 })),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.body["data"][0]["quantity"], 2);

    // The same cart shows up for the same principal on the web surface.
    let cookie = app.web_login("client@x.com", "right").await;
    let page = app.request("GET", "/cart", None, None, Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);

    assert_eq!(app.state.carts.items(user.id).len(), 1);

    let removed = app
        .request(
            "DELETE",
            &format!("/api/cart/items/{product}"),
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert!(app.state.carts.items(user.id).is_empty());
}

#[tokio::test]
async fn cart_api_is_client_only() {
    let app = helpers::TestApp::new();
    app.create_user("staff@x.com", "right", Role::Staff).await;
    let token = app.login("staff@x.com", "right").await;

    let response = app
        .request("GET", "/api/cart", None, Some(&token), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_web_route_defaults_to_authenticated_only() {
    let app = helpers::TestApp::new();
    app.create_user("client@x.com", "right", Role::Client).await;

    let anonymous = app.request("GET", "/orders/history", None, None, None).await;
    assert_eq!(anonymous.status, StatusCode::SEE_OTHER);

    let cookie = app.web_login("client@x.com", "right").await;
    let authenticated = app
        .request("GET", "/orders/history", None, None, Some(&cookie))
        .await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn decisions_are_stable_across_repeated_requests() {
    let app = helpers::TestApp::new();
    app.create_user("client@x.com", "right", Role::Client).await;
    let token = app.login("client@x.com", "right").await;

    let first = app
        .request("GET", "/api/admin/stats", None, Some(&token), None)
        .await;
    let second = app
        .request("GET", "/api/admin/stats", None, Some(&token), None)
        .await;

    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
}

fn uuid_for_test() -> String {
    // A fixed id keeps the assertions readable.
    "7f9c54e2-0a31-4a6b-9c7d-2f8d11a40b6e".to_string()
}
