//! Adapters layer
//!
//! Implementations of port traits for external collaborators.

pub mod currency;
pub mod outbox;

pub use currency::StandardCurrencyFormatter;
pub use outbox::CertificateOutbox;
