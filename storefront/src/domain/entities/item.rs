//! Catalog item domain entity
//!
//! A purchasable entry in the cabinet. Items are immutable once loaded.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Unique identifier for a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "price_cents")]
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Text the search filter matches against: title and tagline joined by a space
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.tagline.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_joins_title_and_tagline() {
        let item = Item {
            id: ItemId::from("ossuary-candle"),
            title: "Ossuary Candle".to_string(),
            price: Money::from_units(22),
            tagline: Some("Tallow & myrrh".to_string()),
            image: None,
        };

        assert_eq!(item.search_text(), "Ossuary Candle Tallow & myrrh");
    }

    #[test]
    fn search_text_without_tagline() {
        let item = Item {
            id: ItemId::from("plain"),
            title: "Plain Box".to_string(),
            price: Money::ZERO,
            tagline: None,
            image: None,
        };

        assert_eq!(item.search_text(), "Plain Box ");
    }

    #[test]
    fn deserializes_price_in_cents() {
        let item: Item = serde_json::from_str(
            r#"{"id":"ring","title":"Ring","price_cents":6900,"tagline":"Silver"}"#,
        )
        .unwrap();

        assert_eq!(item.id, ItemId::from("ring"));
        assert_eq!(item.price, Money::from_units(69));
        assert_eq!(item.image, None);
    }
}
