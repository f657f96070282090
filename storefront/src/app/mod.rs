//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services borrow the storefront state for one request and coordinate
//! between domain entities, ports and the certificate renderer.

pub mod adoption_service;
pub mod cart_service;
pub mod catalog_service;
pub mod newsletter_service;
pub mod search;

pub use adoption_service::{
    AdoptionHall, AdoptionOutcome, AdoptionService, CertificateDelivery, FamiliarDetails, Keeper,
};
pub use cart_service::{CartService, CartView, CheckoutAck};
pub use catalog_service::{CatalogEntry, CatalogService, CatalogView};
pub use newsletter_service::{NewsletterService, SubscribeAck};
