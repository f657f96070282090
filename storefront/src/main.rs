//! Morboddities Storefront
//!
//! A small shop of curiosities and adoptable familiars: catalog search, a cart
//! ledger, the Adoption Hall and printable adoption certificates.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod certificate;
mod config;
mod domain;
mod error;
mod handlers;
mod inventory;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{CertificateOutbox, StandardCurrencyFormatter};
use app::{AdoptionService, CartService, CatalogService, NewsletterService};
use config::Config;
use domain::entities::{LoreEntry, Storefront};
use error::AppError;
use inventory::{default_lore, Inventory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The store itself. Handlers hold the lock for the whole request, so
    /// shopper actions apply one at a time.
    pub store: Arc<Mutex<Storefront>>,
    pub catalog_service: Arc<CatalogService<StandardCurrencyFormatter>>,
    pub cart_service: Arc<CartService<StandardCurrencyFormatter>>,
    pub adoption_service: Arc<AdoptionService<CertificateOutbox, StandardCurrencyFormatter>>,
    pub newsletter_service: Arc<NewsletterService>,
    pub certificates: Arc<CertificateOutbox>,
    pub lore: Arc<Vec<LoreEntry>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    currency: String,
    certificates_enabled: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        currency: state.config.currency_code.clone(),
        certificates_enabled: state.config.certificates_enabled(),
    })
}

/// Wire adapters and services around a freshly stocked store
pub fn build_state(config: Config, inventory: Inventory) -> Result<AppState, AppError> {
    let formatter = Arc::new(StandardCurrencyFormatter::new());
    let certificates = Arc::new(CertificateOutbox::new(config.certificate_outbox_capacity));

    let catalog_service = Arc::new(CatalogService::new(
        formatter.clone(),
        config.currency_code.clone(),
    ));
    let cart_service = Arc::new(CartService::new(
        formatter.clone(),
        config.currency_code.clone(),
    ));
    let adoption_service = Arc::new(AdoptionService::new(
        certificates.clone(),
        formatter.clone(),
        config.currency_code.clone(),
    ));
    let newsletter_service = Arc::new(NewsletterService::new()?);

    let store = Storefront::new(inventory.items, inventory.familiars);

    Ok(AppState {
        store: Arc::new(Mutex::new(store)),
        catalog_service,
        cart_service,
        adoption_service,
        newsletter_service,
        certificates,
        lore: Arc::new(default_lore()),
        config,
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // The Cabinet
        .route("/catalog", get(handlers::search_catalog))
        .route("/catalog/:id", get(handlers::get_item))
        // Cart ledger
        .route("/cart", get(handlers::get_cart))
        .route("/cart/items", post(handlers::add_to_cart))
        .route("/cart/items/:id", delete(handlers::remove_line))
        .route(
            "/cart/items/:id/increment",
            post(handlers::increment_line),
        )
        .route(
            "/cart/items/:id/decrement",
            post(handlers::decrement_line),
        )
        .route("/checkout", post(handlers::checkout))
        // Adoption Hall
        .route("/familiars", get(handlers::list_familiars))
        .route("/familiars/:id", get(handlers::get_familiar))
        .route("/familiars/:id/adopt", post(handlers::adopt_familiar))
        .route(
            "/familiars/:id/certificate",
            get(handlers::render_certificate_preview).post(handlers::open_certificate_preview),
        )
        .route("/adoption/next", get(handlers::next_familiar))
        .route("/keepers", get(handlers::get_keepers))
        .route("/certificates/:handle", get(handlers::get_certificate))
        // Lore and newsletter
        .route("/lore", get(handlers::get_lore))
        .route("/subscribe", post(handlers::subscribe))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,morboddities_storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Morboddities storefront...");

    // Load configuration
    let config = Config::from_env();

    let inventory = match &config.inventory_path {
        Some(path) => Inventory::load(path).await?,
        None => {
            tracing::info!("No INVENTORY_PATH set, using the built-in cabinet");
            Inventory::default()
        }
    };

    if !config.certificates_enabled() {
        tracing::warn!("CERTIFICATE_OUTBOX_CAPACITY is 0, certificates will be blocked");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(build_state(config, inventory)?);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
