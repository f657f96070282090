//! Storefront state
//!
//! The single owned state object for a running store: the catalog, the
//! familiar registry and the shopper's cart. Services borrow it for the
//! duration of one request; there is no ambient or static state.

use super::cart::Cart;
use super::familiar::{Familiar, FamiliarId};
use super::item::{Item, ItemId};

/// Result of marking a familiar as adopted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptionMark {
    /// The flag moved from available to adopted
    Adopted,
    /// The familiar was adopted before; nothing changed
    AlreadyAdopted,
}

#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Vec<Item>,
    familiars: Vec<Familiar>,
    cart: Cart,
}

impl Storefront {
    pub fn new(catalog: Vec<Item>, familiars: Vec<Familiar>) -> Self {
        Self {
            catalog,
            familiars,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.catalog.iter().find(|i| &i.id == id)
    }

    pub fn familiars(&self) -> &[Familiar] {
        &self.familiars
    }

    pub fn familiar(&self, id: &FamiliarId) -> Option<&Familiar> {
        self.familiars.iter().find(|f| &f.id == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Number of familiars still waiting for a keeper
    pub fn available_count(&self) -> usize {
        self.familiars.iter().filter(|f| f.is_available()).count()
    }

    /// First familiar in registry order that has not been adopted
    pub fn first_available(&self) -> Option<&Familiar> {
        self.familiars.iter().find(|f| f.is_available())
    }

    /// Adopted familiars in registry order (the Book of Keepers)
    pub fn keepers(&self) -> impl Iterator<Item = &Familiar> {
        self.familiars.iter().filter(|f| f.adopted)
    }

    /// Flip the adopted flag of one familiar. `None` if the id is unknown.
    pub fn mark_adopted(&mut self, id: &FamiliarId) -> Option<AdoptionMark> {
        let familiar = self.familiars.iter_mut().find(|f| &f.id == id)?;
        if familiar.adopted {
            return Some(AdoptionMark::AlreadyAdopted);
        }
        familiar.adopted = true;
        Some(AdoptionMark::Adopted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_catalog, test_familiar_named, test_familiars};

    #[test]
    fn lookups_by_id() {
        let store = Storefront::new(test_catalog(), test_familiars());

        assert!(store.item(&ItemId::from("skull-cameo-ring")).is_some());
        assert!(store.item(&ItemId::from("nope")).is_none());
        assert!(store.familiar(&FamiliarId::from("mortiboo-001")).is_some());
        assert!(store.familiar(&FamiliarId::from("nope")).is_none());
    }

    #[test]
    fn mark_adopted_only_touches_one_familiar() {
        let mut store = Storefront::new(test_catalog(), test_familiars());
        let id = FamiliarId::from("snaggle-013");

        assert_eq!(store.mark_adopted(&id), Some(AdoptionMark::Adopted));

        for familiar in store.familiars() {
            assert_eq!(familiar.adopted, familiar.id == id);
        }
    }

    #[test]
    fn mark_adopted_is_one_way() {
        let mut store = Storefront::new(vec![], vec![test_familiar_named("Mortiboo")]);
        let id = store.familiars()[0].id.clone();

        assert_eq!(store.mark_adopted(&id), Some(AdoptionMark::Adopted));
        assert_eq!(store.mark_adopted(&id), Some(AdoptionMark::AlreadyAdopted));
        assert!(store.familiars()[0].adopted);
    }

    #[test]
    fn mark_adopted_unknown_id() {
        let mut store = Storefront::new(vec![], test_familiars());

        assert_eq!(store.mark_adopted(&FamiliarId::from("ghost")), None);
        assert_eq!(store.available_count(), 3);
    }

    #[test]
    fn availability_and_keepers() {
        let mut store = Storefront::new(vec![], test_familiars());
        assert_eq!(store.available_count(), 3);
        assert_eq!(store.keepers().count(), 0);
        assert_eq!(
            store.first_available().map(|f| f.name.as_str()),
            Some("Mortiboo")
        );

        store.mark_adopted(&FamiliarId::from("mortiboo-001"));

        assert_eq!(store.available_count(), 2);
        let keepers: Vec<&str> = store.keepers().map(|f| f.name.as_str()).collect();
        assert_eq!(keepers, vec!["Mortiboo"]);
        assert_eq!(
            store.first_available().map(|f| f.name.as_str()),
            Some("Snaggle")
        );
    }

    #[test]
    fn first_available_none_when_all_adopted() {
        let mut store = Storefront::new(vec![], test_familiars());
        let ids: Vec<FamiliarId> = store.familiars().iter().map(|f| f.id.clone()).collect();
        for id in &ids {
            store.mark_adopted(id);
        }

        assert!(store.first_available().is_none());
        assert_eq!(store.available_count(), 0);
    }
}
