//! Staff-only handlers: the admin dashboard and its API counterpart.

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::dto::response::{ApiResponse, StatsResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    let registered_users = state.users.count().await?;
    let active_sessions = state.session_manager.active_sessions() as u64;

    Ok(Json(ApiResponse::ok(StatsResponse {
        registered_users,
        active_sessions,
    })))
}

/// GET /admin
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let registered_users = state.users.count().await?;
    let active_sessions = state.session_manager.active_sessions();

    Ok(Html(format!(
        "<!doctype html><html><body><h1>Staff dashboard</h1>\
         <p>Registered users: {registered_users}</p>\
         <p>Active sessions: {active_sessions}</p>\
         <a href=\"/admin/orders\">Orders board</a></body></html>"
    )))
}

/// GET /admin/orders
pub async fn orders_board() -> Html<&'static str> {
    Html(
        "<!doctype html><html><body><h1>Orders board</h1>\
         <p>No pending orders.</p><a href=\"/admin\">Dashboard</a></body></html>",
    )
}
