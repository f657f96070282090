//! Cart ledger
//!
//! An ordered set of cart lines keyed by item id. Every operation is total:
//! adjusting or removing an id that is not in the cart does nothing.

use serde::Serialize;

use super::item::{Item, ItemId};
use super::money::Money;

/// One line in the cart: an item and how many of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

/// The shopper's pending purchase
///
/// Holds at most one line per item id, in insertion order, and never lets a
/// quantity drop below 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item.id == id)
    }

    fn line_mut(&mut self, id: &ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.item.id == id)
    }

    /// Add one unit of `item`, appending a new line if it is not in the cart yet
    pub fn add(&mut self, item: Item) -> &CartLine {
        match self.lines.iter().position(|l| l.item.id == item.id) {
            Some(i) => {
                self.lines[i].quantity = self.lines[i].quantity.saturating_add(1);
                &self.lines[i]
            }
            None => {
                self.lines.push(CartLine { item, quantity: 1 });
                &self.lines[self.lines.len() - 1]
            }
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.item.id != id);
        self.lines.len() != before
    }

    /// Add one to the quantity of the line for `id`
    pub fn increment(&mut self, id: &ItemId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Take one from the quantity of the line for `id`, stopping at 1
    pub fn decrement(&mut self, id: &ItemId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Some(line.quantity)
    }

    /// Sum of price x quantity across all lines
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units in the cart
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }
}
