//! Adoption Hall handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use super::negotiate;
use crate::app::{AdoptionOutcome, CartView, FamiliarDetails, Keeper};
use crate::domain::entities::FamiliarId;
use crate::error::AppError;
use crate::views::{render_adoption_hall, render_familiar};
use crate::AppState;

/// Date stamped on certificates issued now
pub(super) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// JSON response for POST /familiars/:id/adopt
#[derive(Serialize)]
pub struct AdoptResponse {
    pub outcome: AdoptionOutcome,
    pub cart: CartView,
}

/// GET /familiars
///
/// The Adoption Hall: every familiar, the available count and the Book of Keepers.
pub async fn list_familiars(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let store = state.store.lock().await;
    let hall = state.adoption_service.hall(&store);
    negotiate(&headers, hall, render_adoption_hall)
}

/// GET /familiars/:id
pub async fn get_familiar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let store = state.store.lock().await;
    let details = state
        .adoption_service
        .details(&store, &FamiliarId::from(id))?;
    Ok(negotiate(&headers, details, render_familiar))
}

/// GET /adoption/next
///
/// The first familiar still waiting for a keeper.
pub async fn next_familiar(
    State(state): State<AppState>,
) -> Result<Json<FamiliarDetails>, AppError> {
    let store = state.store.lock().await;
    state
        .adoption_service
        .next_available(&store)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Every familiar has found a keeper".to_string()))
}

/// GET /keepers
///
/// The Book of Keepers.
pub async fn get_keepers(State(state): State<AppState>) -> Json<Vec<Keeper>> {
    let store = state.store.lock().await;
    Json(state.adoption_service.keepers(&store))
}

/// POST /familiars/:id/adopt
///
/// Adopt a familiar. Adopting one that is already adopted returns
/// `already_adopted` and changes nothing.
pub async fn adopt_familiar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdoptResponse>, AppError> {
    let mut store = state.store.lock().await;
    let outcome = state
        .adoption_service
        .adopt(&mut store, &FamiliarId::from(id), today())
        .await?;
    let cart = state.cart_service.view(store.cart());
    Ok(Json(AdoptResponse { outcome, cart }))
}
