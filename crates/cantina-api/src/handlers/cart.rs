//! Cart handlers for both surfaces.
//!
//! The rule tables gate every route here to the Client role before a
//! handler runs; handlers only deal with the already-authorized identity.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use uuid::Uuid;

use cantina_store::cart::CartItem;

use crate::dto::request::{CartItemRequest, CartRemoveForm};
use crate::dto::response::{AckResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

// ── API surface ──────────────────────────────────────────────

/// GET /api/cart
pub async fn list_items(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<Vec<CartItem>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.carts.items(identity.user_id))))
}

/// POST /api/cart/items
pub async fn add_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<CartItemRequest>,
) -> Result<Json<ApiResponse<Vec<CartItem>>>, ApiError> {
    state
        .carts
        .add_item(identity.user_id, req.product_id, req.quantity);
    Ok(Json(ApiResponse::ok(state.carts.items(identity.user_id))))
}

/// DELETE /api/cart/items/{product_id}
pub async fn remove_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AckResponse>>, ApiError> {
    state.carts.remove_item(identity.user_id, product_id);
    Ok(Json(ApiResponse::ok(AckResponse { ok: true })))
}

// ── Web surface ──────────────────────────────────────────────

/// GET /cart
pub async fn cart_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Html<String> {
    let items = state.carts.items(identity.user_id);
    let lines: String = items
        .iter()
        .map(|item| format!("<li>{} x {}</li>", item.product_id, item.quantity))
        .collect();

    Html(format!(
        "<!doctype html><html><body><h1>Your cart</h1><ul>{lines}</ul>\
         <a href=\"/menu\">Back to menu</a></body></html>"
    ))
}

/// POST /cart/add
pub async fn cart_add(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Form(form): Form<CartItemRequest>,
) -> Redirect {
    state
        .carts
        .add_item(identity.user_id, form.product_id, form.quantity);
    Redirect::to("/cart")
}

/// POST /cart/remove
pub async fn cart_remove(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Form(form): Form<CartRemoveForm>,
) -> Redirect {
    state.carts.remove_item(identity.user_id, form.product_id);
    Redirect::to("/cart")
}
