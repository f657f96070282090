//! Familiar domain entity
//!
//! An adoptable, one-of-a-kind collectible with lore attributes.
//! A familiar's `adopted` flag is the only mutable field; it moves from
//! `false` to `true` once and never reverts.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};
use super::money::Money;

/// Prefix that keeps adoption cart lines apart from catalog item ids
pub const ADOPTION_ITEM_PREFIX: &str = "familiar-";

/// Unique identifier for a familiar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamiliarId(pub String);

impl FamiliarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FamiliarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FamiliarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FamiliarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Familiar rarity, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Uncommon => write!(f, "Uncommon"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Mythic => write!(f, "Mythic"),
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "mythic" => Ok(Rarity::Mythic),
            _ => Err(format!("Unknown rarity: {}", s)),
        }
    }
}

/// What a familiar bestows on its keeper: at most one blessing or one curse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boon {
    #[default]
    None,
    Blessing(String),
    Curse(String),
}

impl Boon {
    pub fn blessing(&self) -> Option<&str> {
        match self {
            Boon::Blessing(text) => Some(text),
            _ => None,
        }
    }

    pub fn curse(&self) -> Option<&str> {
        match self {
            Boon::Curse(text) => Some(text),
            _ => None,
        }
    }

    /// The blessing or curse text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Boon::None => None,
            Boon::Blessing(text) | Boon::Curse(text) => Some(text),
        }
    }
}

/// An adoptable familiar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Familiar {
    pub id: FamiliarId,
    pub name: String,
    #[serde(rename = "price_cents")]
    pub price: Money,
    pub rarity: Rarity,
    pub temperament: String,
    pub origin: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub boon: Boon,
    pub oath: String,
    pub lore: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub adopted: bool,
}

impl Familiar {
    pub fn is_available(&self) -> bool {
        !self.adopted
    }

    /// Traits joined for display ("key-guardian, soft chittering at dawn")
    pub fn traits_line(&self) -> String {
        self.traits.join(", ")
    }

    /// Id of the cart line created when this familiar is adopted
    pub fn adoption_item_id(&self) -> ItemId {
        ItemId(format!("{}{}", ADOPTION_ITEM_PREFIX, self.id))
    }

    /// Synthetic cart item representing the adoption of this familiar
    pub fn adoption_item(&self) -> Item {
        Item {
            id: self.adoption_item_id(),
            title: format!("{} (Adoption)", self.name),
            price: self.price,
            tagline: Some(format!("{} familiar", self.rarity)),
            image: self.photo.clone(),
        }
    }
}
