//! Domain ports (traits)
//!
//! Port traits define the collaborators the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod currency;
pub mod display;

pub use currency::CurrencyFormatter;
pub use display::{CertificateDocument, DisplayChannel, DisplayHandle};
