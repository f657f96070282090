//! Certificate module
//!
//! Printable adoption certificate rendering.

pub mod renderer;

pub use renderer::{certificate_title, render_certificate};
