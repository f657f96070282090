//! Storefront-wide handlers: checkout, newsletter and lore

use axum::{extract::State, http::HeaderMap, response::Response, Json};
use serde::Deserialize;

use super::negotiate;
use crate::app::{CheckoutAck, SubscribeAck};
use crate::error::AppError;
use crate::views::render_lore;
use crate::AppState;

/// Request body for POST /subscribe
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// POST /checkout
///
/// Placeholder: acknowledges the cart, takes no payment.
pub async fn checkout(State(state): State<AppState>) -> Json<CheckoutAck> {
    let store = state.store.lock().await;
    Json(state.cart_service.checkout(&store))
}

/// POST /subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<SubscribeAck>, AppError> {
    Ok(Json(state.newsletter_service.subscribe(&body.email)?))
}

/// GET /lore
pub async fn get_lore(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let lore = state.lore.as_ref().clone();
    negotiate(&headers, lore, |entries| render_lore(entries))
}
