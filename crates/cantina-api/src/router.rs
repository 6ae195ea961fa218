//! Route definitions for the two Cantina pipelines.
//!
//! The API and web pipelines are built as separate routers, each carrying
//! its own resolver and authorization gate, then merged. They are never
//! folded into one rule table: their defaults and failure presentation
//! differ, and each keeps its own ordered rules.

use axum::middleware as axum_middleware;
use axum::routing::{any, delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(api_pipeline(state.clone()))
        .merge(web_pipeline(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// The stateless `/api` pipeline: bearer-token resolution, JSON rejections.
///
/// The catch-all keeps unknown `/api` paths inside this pipeline so they
/// are judged by the API rules rather than falling through to the web
/// fallback.
fn api_pipeline(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/session", post(handlers::auth::create_session))
        .route("/api/profile", get(handlers::auth::profile))
        .route("/api/cart", get(handlers::cart::list_items))
        .route("/api/cart/items", post(handlers::cart::add_item))
        .route(
            "/api/cart/items/{product_id}",
            delete(handlers::cart::remove_item),
        )
        .route("/api/admin/stats", get(handlers::admin::stats))
        .route("/api", any(handlers::not_found))
        .route("/api/{*rest}", any(handlers::not_found))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authz::authorize_api,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::authn::resolve_api,
        ))
}

/// The browser pipeline: session-cookie resolution, redirect on rejection.
fn web_pipeline(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/menu", get(handlers::pages::menu))
        .route("/about", get(handlers::pages::about))
        .route(
            "/signup",
            get(handlers::pages::signup_form).post(handlers::account::signup),
        )
        .route(
            "/login",
            get(handlers::pages::login_form).post(handlers::account::login),
        )
        .route("/logout", post(handlers::account::logout))
        .route("/profile", get(handlers::account::profile_page))
        .route("/cart", get(handlers::cart::cart_page))
        .route("/cart/add", post(handlers::cart::cart_add))
        .route("/cart/remove", post(handlers::cart::cart_remove))
        .route("/admin", get(handlers::admin::dashboard))
        .route("/admin/orders", get(handlers::admin::orders_board))
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authz::authorize_web,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::authn::resolve_web,
        ))
}
