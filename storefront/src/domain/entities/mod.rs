//! Domain entities
//!
//! Pure domain models for the storefront: catalog items, familiars, the cart
//! ledger and the storefront state that owns them.

pub mod cart;
pub mod familiar;
pub mod item;
pub mod lore;
pub mod money;
pub mod storefront;

pub use cart::{Cart, CartLine};
pub use familiar::{Boon, Familiar, FamiliarId, Rarity, ADOPTION_ITEM_PREFIX};
pub use item::{Item, ItemId};
pub use lore::LoreEntry;
pub use money::Money;
pub use storefront::{AdoptionMark, Storefront};
