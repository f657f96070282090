//! Catalog handlers

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::Deserialize;

use super::negotiate;
use crate::app::CatalogEntry;
use crate::domain::entities::ItemId;
use crate::error::AppError;
use crate::views::render_catalog;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /catalog?q=
///
/// Items whose title or tagline contain `q`.
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
) -> Response {
    let store = state.store.lock().await;
    let view = state.catalog_service.search(&store, &query.q);
    negotiate(&headers, view, render_catalog)
}

/// GET /catalog/:id
///
/// Quick view of a single item.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogEntry>, AppError> {
    let store = state.store.lock().await;
    let entry = state.catalog_service.quick_view(&store, &ItemId::from(id))?;
    Ok(Json(entry))
}
