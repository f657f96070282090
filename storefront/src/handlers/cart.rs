//! Cart handlers
//!
//! Adjusting or removing a line that is not in the cart is not an error:
//! the handler returns the unchanged cart.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::Deserialize;

use super::negotiate;
use crate::domain::entities::ItemId;
use crate::error::AppError;
use crate::views::render_cart;
use crate::AppState;

/// Request body for POST /cart/items
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub item_id: String,
}

/// GET /cart
pub async fn get_cart(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let store = state.store.lock().await;
    let view = state.cart_service.view(store.cart());
    negotiate(&headers, view, render_cart)
}

/// POST /cart/items
///
/// Add one unit of a catalog item.
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AddToCartRequest>,
) -> Result<Response, AppError> {
    let mut store = state.store.lock().await;
    let view = state
        .cart_service
        .add_item(&mut store, &ItemId::from(body.item_id))?;
    Ok(negotiate(&headers, view, render_cart))
}

/// DELETE /cart/items/:id
pub async fn remove_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut store = state.store.lock().await;
    let view = state.cart_service.remove(&mut store, &ItemId::from(id));
    negotiate(&headers, view, render_cart)
}

/// POST /cart/items/:id/increment
pub async fn increment_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut store = state.store.lock().await;
    let view = state.cart_service.increment(&mut store, &ItemId::from(id));
    negotiate(&headers, view, render_cart)
}

/// POST /cart/items/:id/decrement
pub async fn decrement_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut store = state.store.lock().await;
    let view = state.cart_service.decrement(&mut store, &ItemId::from(id));
    negotiate(&headers, view, render_cart)
}
