//! Views module
//!
//! Plain-text rendering of storefront views.

pub mod renderer;

pub use renderer::{
    render_adoption_hall, render_cart, render_catalog, render_familiar, render_lore,
};
