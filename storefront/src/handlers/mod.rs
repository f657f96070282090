//! HTTP handlers
//!
//! Axum request handlers for the storefront endpoints.
//! Read endpoints support content negotiation: Accept: application/json for
//! JSON, otherwise text/plain.

pub mod cart;
pub mod catalog;
pub mod certificates;
pub mod familiars;
pub mod store;

pub use cart::{add_to_cart, decrement_line, get_cart, increment_line, remove_line};
pub use catalog::{get_item, search_catalog};
pub use certificates::{get_certificate, open_certificate_preview, render_certificate_preview};
pub use familiars::{adopt_familiar, get_familiar, get_keepers, list_familiars, next_familiar};
pub use store::{checkout, get_lore, subscribe};

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// JSON when asked for, otherwise the plain-text rendering
fn negotiate<T, F>(headers: &HeaderMap, view: T, render: F) -> Response
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if wants_json(headers) {
        Json(view).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render(&view),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn wants_json_from_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!wants_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(wants_json(&headers));
    }
}
