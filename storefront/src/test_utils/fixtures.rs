//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{Boon, Familiar, FamiliarId, Item, ItemId, Money, Rarity, Storefront};
use crate::inventory::{default_catalog, default_familiars};

/// A fixed date so rendered certificates are stable
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// The built-in catalog
pub fn test_catalog() -> Vec<Item> {
    default_catalog()
}

/// The built-in familiars (Mortiboo, Snaggle, Gloompuff), none adopted
pub fn test_familiars() -> Vec<Familiar> {
    default_familiars()
}

/// A storefront stocked with the built-in inventory and an empty cart
pub fn test_storefront() -> Storefront {
    Storefront::new(test_catalog(), test_familiars())
}

/// Create a catalog item priced in whole units
pub fn test_item(id: &str, units: u64) -> Item {
    Item {
        id: ItemId::from(id),
        title: format!("Test {}", id),
        price: Money::from_units(units),
        tagline: Some("A test curio.".to_string()),
        image: None,
    }
}

/// Mortiboo as shipped: Uncommon, 38, blessed, not adopted
pub fn test_mortiboo() -> Familiar {
    test_familiars()
        .into_iter()
        .find(|f| f.name == "Mortiboo")
        .unwrap()
}

/// Create a familiar with a specific name
pub fn test_familiar_named(name: &str) -> Familiar {
    Familiar {
        id: FamiliarId(format!("{}-999", name.to_lowercase())),
        name: name.to_string(),
        price: Money::from_units(40),
        rarity: Rarity::Common,
        temperament: "calm".to_string(),
        origin: "a forgotten drawer".to_string(),
        traits: vec!["hums".to_string()],
        boon: Boon::Blessing("Finds lost buttons.".to_string()),
        oath: "Keep it away from drafts.".to_string(),
        lore: "It was here before the shop.".to_string(),
        photo: None,
        adopted: false,
    }
}
