//! Lore entries shown in the "Lore & Provenance" section

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreEntry {
    pub title: String,
    pub teaser: String,
    pub body: String,
}
