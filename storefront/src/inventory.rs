//! Inventory seed
//!
//! The built-in cabinet stock, familiars and lore, plus loading a
//! replacement inventory from a JSON file at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{
    Boon, Familiar, FamiliarId, Item, ItemId, LoreEntry, Money, Rarity, ADOPTION_ITEM_PREFIX,
};
use crate::error::AppError;

/// Catalog items and familiars a store starts with
#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub familiars: Vec<Familiar>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: default_catalog(),
            familiars: default_familiars(),
        }
    }
}

impl Inventory {
    /// Load an inventory from a JSON file
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Config(format!("Cannot read inventory {}: {}", path.display(), e))
        })?;
        let inventory = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            items = inventory.items.len(),
            familiars = inventory.familiars.len(),
            "Loaded inventory"
        );
        Ok(inventory)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let inventory: Inventory = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("Invalid inventory: {}", e)))?;
        inventory.validate()?;
        Ok(inventory)
    }

    /// Ids must be unique within the catalog and within the registry.
    /// Item ids under the adoption prefix are reserved for adoption lines.
    fn validate(&self) -> Result<(), AppError> {
        let mut item_ids = HashSet::new();
        for item in &self.items {
            if item.id.as_str().starts_with(ADOPTION_ITEM_PREFIX) {
                return Err(AppError::Config(format!(
                    "Item id '{}' uses the reserved prefix '{}'",
                    item.id, ADOPTION_ITEM_PREFIX
                )));
            }
            if !item_ids.insert(&item.id) {
                return Err(AppError::Config(format!("Duplicate item id: {}", item.id)));
            }
        }

        let mut familiar_ids = HashSet::new();
        for familiar in &self.familiars {
            if !familiar_ids.insert(&familiar.id) {
                return Err(AppError::Config(format!(
                    "Duplicate familiar id: {}",
                    familiar.id
                )));
            }
        }

        Ok(())
    }
}

fn item(id: &str, title: &str, units: u64, tagline: &str) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        price: Money::from_units(units),
        tagline: Some(tagline.to_string()),
        image: None,
    }
}

/// The cabinet's built-in stock
pub fn default_catalog() -> Vec<Item> {
    vec![
        item(
            "skull-cameo-ring",
            "Skull Cameo Ring",
            69,
            "Victorian memento mori, 925 silver.",
        ),
        item(
            "crow-feather-quill",
            "Crow Feather Quill",
            29,
            "For contracts you *must* keep.",
        ),
        item(
            "ossuary-candle",
            "Ossuary Candle",
            22,
            "Tallow & myrrh; whispers optional.",
        ),
        item(
            "crypt-keeper-journal",
            "Crypt Keeper Journal",
            34,
            "Black vellum, stitched in red.",
        ),
        item(
            "curiosity-vial-set",
            "Curiosity Vial Set (6)",
            48,
            "For specimens, tears, or moonlight.",
        ),
    ]
}

/// The Adoption Hall's built-in familiars
pub fn default_familiars() -> Vec<Familiar> {
    vec![
        Familiar {
            id: FamiliarId::from("mortiboo-001"),
            name: "Mortiboo".to_string(),
            price: Money::from_units(38),
            rarity: Rarity::Uncommon,
            temperament: "clingy, protective".to_string(),
            origin: "stitched from a thundercloud's leftover static".to_string(),
            traits: vec![
                "key-guardian".to_string(),
                "soft chittering at dawn".to_string(),
            ],
            boon: Boon::Blessing(
                "Keys mysteriously surface when you whisper its name.".to_string(),
            ),
            oath: "Feed it a sliver of moonlight each Sunday.".to_string(),
            lore: "Mortiboo nests in warm pockets and hums when danger nears. \
                   It remembers doors you forgot you locked."
                .to_string(),
            photo: None,
            adopted: false,
        },
        Familiar {
            id: FamiliarId::from("snaggle-013"),
            name: "Snaggle".to_string(),
            price: Money::from_units(42),
            rarity: Rarity::Rare,
            temperament: "mischievous, loyal".to_string(),
            origin: "fell out of a tangle of headphone cords".to_string(),
            traits: vec![
                "unties knots".to_string(),
                "hoards shiny screws".to_string(),
            ],
            boon: Boon::Curse("Earbuds may tie themselves in its absence.".to_string()),
            oath: "Offer a single copper coin on the new moon.".to_string(),
            lore: "Snaggle loves labyrinths and will always take the longer hallway \
                   if it means one more echo."
                .to_string(),
            photo: None,
            adopted: false,
        },
        Familiar {
            id: FamiliarId::from("gloompuff-077"),
            name: "Gloompuff".to_string(),
            price: Money::from_units(35),
            rarity: Rarity::Common,
            temperament: "shy, easily startled".to_string(),
            origin: "condensed from candle smoke during a midnight draft".to_string(),
            traits: vec![
                "squeaks at meteor showers".to_string(),
                "warms palms".to_string(),
            ],
            boon: Boon::Blessing("Tea tastes 3% better when it sits nearby.".to_string()),
            oath: "Never blow out all candles at once in its presence.".to_string(),
            lore: "Gloompuff prefers bookshelves and will guard dog-eared pages \
                   like a dragon guards gold."
                .to_string(),
            photo: None,
            adopted: false,
        },
    ]
}

/// Lore & Provenance entries
pub fn default_lore() -> Vec<LoreEntry> {
    vec![
        LoreEntry {
            title: "The Ledger".to_string(),
            teaser: "Before there was a store, there was a book bound in night-black vellum."
                .to_string(),
            body: "Within its pages, inventory appeared on its own — sketches of artifacts, \
                   margins annotated by an unfamiliar hand. Items that were sold would fade \
                   from the illustrations; others would materialize when a customer merely \
                   *dreamed* of them."
                .to_string(),
        },
        LoreEntry {
            title: "The Keeper".to_string(),
            teaser: "Some say the shop keeps itself. Others say a curatorship passes down as a vow."
                .to_string(),
            body: "The title is given but not spoken. You will know you are the Keeper when \
                   doors open for you that refuse all others, and when clocks tick backwards \
                   while you set prices."
                .to_string(),
        },
        LoreEntry {
            title: "The Return Policy".to_string(),
            teaser: "Every object yearns to return — to a place, a person, or a purpose."
                .to_string(),
            body: "Returns are accepted on the final night of a waning moon, accompanied by an \
                   explanation penned in iron gall. Exchanges require a story of equal weight."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inventory_has_unique_ids() {
        let inventory = Inventory::default();

        assert_eq!(inventory.items.len(), 5);
        assert_eq!(inventory.familiars.len(), 3);
        assert!(inventory.validate().is_ok());
        assert!(inventory.familiars.iter().all(|f| !f.adopted));
    }

    #[test]
    fn from_json_parses_items_and_familiars() {
        let raw = r#"{
            "items": [
                {"id": "bone-comb", "title": "Bone Comb", "price_cents": 1500}
            ],
            "familiars": [
                {
                    "id": "wisp-100",
                    "name": "Wisp",
                    "price_cents": 5000,
                    "rarity": "Mythic",
                    "temperament": "distant",
                    "origin": "marsh light",
                    "traits": ["glows"],
                    "boon": {"blessing": "Finds lost paths."},
                    "oath": "Never follow it twice.",
                    "lore": "Seen only at dusk."
                }
            ]
        }"#;

        let inventory = Inventory::from_json(raw).unwrap();

        assert_eq!(inventory.items[0].price, Money::from_units(15));
        assert_eq!(inventory.familiars[0].rarity, Rarity::Mythic);
        assert_eq!(
            inventory.familiars[0].boon,
            Boon::Blessing("Finds lost paths.".to_string())
        );
    }

    #[test]
    fn from_json_rejects_duplicate_item_ids() {
        let raw = r#"{
            "items": [
                {"id": "dup", "title": "One", "price_cents": 100},
                {"id": "dup", "title": "Two", "price_cents": 200}
            ]
        }"#;

        let err = Inventory::from_json(raw).unwrap_err().to_string();
        assert!(err.contains("Duplicate item id: dup"));
    }

    #[test]
    fn from_json_rejects_item_shadowing_an_adoption_line() {
        let raw = r#"{
            "items": [
                {"id": "familiar-mortiboo-001", "title": "Familiar Plush", "price_cents": 500}
            ],
            "familiars": [{
                "id": "mortiboo-001", "name": "Mortiboo", "price_cents": 3800,
                "rarity": "Uncommon", "temperament": "clingy", "origin": "static",
                "oath": "o", "lore": "l"
            }]
        }"#;

        let err = Inventory::from_json(raw).unwrap_err().to_string();
        assert!(err.contains("reserved prefix 'familiar-'"));
    }

    #[test]
    fn default_catalog_has_no_reserved_ids() {
        assert!(default_catalog()
            .iter()
            .all(|item| !item.id.as_str().starts_with(ADOPTION_ITEM_PREFIX)));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = Inventory::from_json("{ not json").unwrap_err().to_string();
        assert!(err.contains("Invalid inventory"));
    }

    #[test]
    fn from_json_rejects_blessing_and_curse_together() {
        let raw = r#"{
            "familiars": [{
                "id": "both", "name": "Both", "price_cents": 100, "rarity": "Rare",
                "temperament": "torn", "origin": "nowhere", "oath": "o", "lore": "l",
                "boon": {"blessing": "good", "curse": "bad"}
            }]
        }"#;

        assert!(Inventory::from_json(raw).is_err());
    }

    #[test]
    fn default_lore_entries() {
        let titles: Vec<String> = default_lore().into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["The Ledger", "The Keeper", "The Return Policy"]);
    }

    #[tokio::test]
    async fn load_missing_file_is_config_error() {
        let err = Inventory::load(Path::new("/nonexistent/inventory.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }
}
