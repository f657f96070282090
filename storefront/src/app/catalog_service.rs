//! Catalog service
//!
//! Builds the cabinet listing: search results with display prices.

use std::sync::Arc;

use serde::Serialize;

use crate::app::search::{filter_catalog, results_label};
use crate::domain::entities::{Item, ItemId, Money, Storefront};
use crate::domain::ports::CurrencyFormatter;
use crate::error::DomainError;

/// A catalog item as shown in the cabinet
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub title: String,
    pub tagline: Option<String>,
    pub image: Option<String>,
    pub price: Money,
    pub price_display: String,
}

/// Search results for one query
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub query: String,
    pub count: usize,
    pub label: String,
    pub items: Vec<CatalogEntry>,
}

pub struct CatalogService<CF>
where
    CF: CurrencyFormatter,
{
    formatter: Arc<CF>,
    currency_code: String,
}

impl<CF> CatalogService<CF>
where
    CF: CurrencyFormatter,
{
    pub fn new(formatter: Arc<CF>, currency_code: String) -> Self {
        Self {
            formatter,
            currency_code,
        }
    }

    /// Search the catalog
    pub fn search(&self, store: &Storefront, query: &str) -> CatalogView {
        let items: Vec<CatalogEntry> = filter_catalog(store.catalog(), query)
            .into_iter()
            .map(|item| self.entry(item))
            .collect();

        tracing::debug!(query, matches = items.len(), "Catalog search");

        CatalogView {
            query: query.trim().to_string(),
            count: items.len(),
            label: results_label(items.len()),
            items,
        }
    }

    /// Quick view of a single item
    pub fn quick_view(&self, store: &Storefront, id: &ItemId) -> Result<CatalogEntry, DomainError> {
        store
            .item(id)
            .map(|item| self.entry(item))
            .ok_or_else(|| DomainError::NotFound(format!("Item '{}' not in the cabinet", id)))
    }

    fn entry(&self, item: &Item) -> CatalogEntry {
        CatalogEntry {
            id: item.id.clone(),
            title: item.title.clone(),
            tagline: item.tagline.clone(),
            image: item.image.clone(),
            price: item.price,
            price_display: self.formatter.format(item.price, &self.currency_code),
        }
    }
}
