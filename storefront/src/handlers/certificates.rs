//! Certificate handlers

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use uuid::Uuid;

use super::familiars::today;
use crate::app::CertificateDelivery;
use crate::domain::entities::FamiliarId;
use crate::domain::ports::DisplayHandle;
use crate::error::AppError;
use crate::AppState;

/// GET /familiars/:id/certificate
///
/// Render a familiar's certificate directly, bypassing the outbox.
pub async fn render_certificate_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = state.store.lock().await;
    let html = state
        .adoption_service
        .certificate_html(&store, &FamiliarId::from(id), today())?;
    Ok(Html(html))
}

/// POST /familiars/:id/certificate
///
/// Open a preview certificate through the outbox without adopting.
pub async fn open_certificate_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CertificateDelivery>, AppError> {
    let store = state.store.lock().await;
    let delivery = state
        .adoption_service
        .preview_certificate(&store, &FamiliarId::from(id), today())
        .await?;
    Ok(Json(delivery))
}

/// GET /certificates/:handle
///
/// A certificate previously opened in the outbox.
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(handle): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    state
        .certificates
        .get(&DisplayHandle(handle))
        .map(|doc| Html(doc.html))
        .ok_or_else(|| AppError::NotFound(format!("Certificate {} is no longer open", handle)))
}
