//! Cart service
//!
//! Applies shopper actions to the cart ledger and projects the cart drawer
//! (lines, badge count, subtotal) with display prices.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Cart, CartLine, ItemId, Money, Storefront};
use crate::domain::ports::CurrencyFormatter;
use crate::error::DomainError;

/// Acknowledgment shown for the placeholder checkout
pub const CHECKOUT_MESSAGE: &str = "Proceeding to checkout — connect your Storefront API.";

/// A cart line as shown in the drawer
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub item_id: ItemId,
    pub title: String,
    pub tagline: Option<String>,
    pub unit_price: Money,
    pub unit_price_display: String,
    pub quantity: u32,
    pub line_total: Money,
    pub line_total_display: String,
}

/// The cart drawer
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: Money,
    pub subtotal_display: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Placeholder checkout acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutAck {
    pub message: String,
    pub item_count: u32,
    pub subtotal_display: String,
}

pub struct CartService<CF>
where
    CF: CurrencyFormatter,
{
    formatter: Arc<CF>,
    currency_code: String,
}

impl<CF> CartService<CF>
where
    CF: CurrencyFormatter,
{
    pub fn new(formatter: Arc<CF>, currency_code: String) -> Self {
        Self {
            formatter,
            currency_code,
        }
    }

    /// Project the current cart
    pub fn view(&self, cart: &Cart) -> CartView {
        let subtotal = cart.subtotal();
        CartView {
            lines: cart.lines().iter().map(|l| self.line_view(l)).collect(),
            item_count: cart.item_count(),
            subtotal,
            subtotal_display: self.format(subtotal),
        }
    }

    /// Add one unit of a catalog item to the cart
    ///
    /// The item must exist in the catalog; adoption lines are added by the
    /// adoption workflow only.
    pub fn add_item(&self, store: &mut Storefront, id: &ItemId) -> Result<CartView, DomainError> {
        let item = store
            .item(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Item '{}' not in the cabinet", id)))?;

        let quantity = store.cart_mut().add(item).quantity;
        tracing::debug!(item = %id, quantity, "Added to cart");

        Ok(self.view(store.cart()))
    }

    /// Remove a line from the cart; unknown ids are ignored
    pub fn remove(&self, store: &mut Storefront, id: &ItemId) -> CartView {
        if store.cart_mut().remove(id) {
            tracing::debug!(item = %id, "Removed from cart");
        }
        self.view(store.cart())
    }

    /// Increase a line's quantity; unknown ids are ignored
    pub fn increment(&self, store: &mut Storefront, id: &ItemId) -> CartView {
        if let Some(quantity) = store.cart_mut().increment(id) {
            tracing::debug!(item = %id, quantity, "Incremented cart line");
        }
        self.view(store.cart())
    }

    /// Decrease a line's quantity down to 1; unknown ids are ignored
    pub fn decrement(&self, store: &mut Storefront, id: &ItemId) -> CartView {
        if let Some(quantity) = store.cart_mut().decrement(id) {
            tracing::debug!(item = %id, quantity, "Decremented cart line");
        }
        self.view(store.cart())
    }

    /// Acknowledge a checkout request. No payment integration exists.
    pub fn checkout(&self, store: &Storefront) -> CheckoutAck {
        let cart = store.cart();
        tracing::info!(
            lines = cart.lines().len(),
            subtotal = %cart.subtotal(),
            "Checkout requested"
        );
        CheckoutAck {
            message: CHECKOUT_MESSAGE.to_string(),
            item_count: cart.item_count(),
            subtotal_display: self.format(cart.subtotal()),
        }
    }

    fn line_view(&self, line: &CartLine) -> CartLineView {
        CartLineView {
            item_id: line.item.id.clone(),
            title: line.item.title.clone(),
            tagline: line.item.tagline.clone(),
            unit_price: line.item.price,
            unit_price_display: self.format(line.item.price),
            quantity: line.quantity,
            line_total: line.line_total(),
            line_total_display: self.format(line.line_total()),
        }
    }

    fn format(&self, amount: Money) -> String {
        self.formatter.format(amount, &self.currency_code)
    }
}
