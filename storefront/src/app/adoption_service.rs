//! Adoption service
//!
//! Runs the Adoption Hall: listing familiars, adopting them and presenting
//! their certificates.
//!
//! Adoption is a durable state change with a best-effort notification:
//! 1. Flip the familiar's adopted flag (once, never back)
//! 2. Put a synthetic adoption line in the cart
//! 3. Render the certificate and hand it to the display channel
//!
//! If the display channel refuses the certificate, steps 1 and 2 stay
//! committed and the shopper gets a notice instead.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::certificate::{certificate_title, render_certificate};
use crate::domain::entities::{
    AdoptionMark, Familiar, FamiliarId, ItemId, Money, Rarity, Storefront,
};
use crate::domain::ports::{CertificateDocument, CurrencyFormatter, DisplayChannel, DisplayHandle};
use crate::error::DomainError;

/// Shown when the display channel refuses a certificate
pub const BLOCKED_NOTICE: &str = "Allow pop-ups to print the certificate.";

/// Where a certificate ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "delivery", rename_all = "snake_case")]
pub enum CertificateDelivery {
    Opened {
        handle: DisplayHandle,
        location: String,
    },
    Blocked {
        notice: String,
    },
}

/// Result of an adoption request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdoptionOutcome {
    Adopted {
        familiar_id: FamiliarId,
        line_item_id: ItemId,
        certificate: CertificateDelivery,
    },
    AlreadyAdopted {
        familiar_id: FamiliarId,
    },
}

/// A familiar card in the Adoption Hall
#[derive(Debug, Clone, Serialize)]
pub struct FamiliarSummary {
    pub id: FamiliarId,
    pub name: String,
    pub rarity: Rarity,
    pub temperament: String,
    pub adopted: bool,
    pub price: Money,
    /// Price while available, "Adopted" afterwards
    pub status_label: String,
}

/// Everything the "Learn More" view shows
#[derive(Debug, Clone, Serialize)]
pub struct FamiliarDetails {
    #[serde(flatten)]
    pub summary: FamiliarSummary,
    pub origin: String,
    pub traits: Vec<String>,
    pub blessing: Option<String>,
    pub curse: Option<String>,
    pub lore: String,
    pub oath: String,
    pub photo: Option<String>,
}

/// An entry in the Book of Keepers
#[derive(Debug, Clone, Serialize)]
pub struct Keeper {
    pub id: FamiliarId,
    pub name: String,
}

/// The Adoption Hall listing
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionHall {
    pub available: usize,
    pub familiars: Vec<FamiliarSummary>,
    pub keepers: Vec<Keeper>,
}

pub struct AdoptionService<DC, CF>
where
    DC: DisplayChannel,
    CF: CurrencyFormatter,
{
    display: Arc<DC>,
    formatter: Arc<CF>,
    currency_code: String,
}

impl<DC, CF> AdoptionService<DC, CF>
where
    DC: DisplayChannel,
    CF: CurrencyFormatter,
{
    pub fn new(display: Arc<DC>, formatter: Arc<CF>, currency_code: String) -> Self {
        Self {
            display,
            formatter,
            currency_code,
        }
    }

    /// Adopt a familiar
    ///
    /// Adopting an already-adopted familiar changes nothing and opens no
    /// certificate.
    pub async fn adopt(
        &self,
        store: &mut Storefront,
        id: &FamiliarId,
        today: NaiveDate,
    ) -> Result<AdoptionOutcome, DomainError> {
        match store.mark_adopted(id) {
            None => return Err(not_found(id)),
            Some(AdoptionMark::AlreadyAdopted) => {
                tracing::debug!(familiar = %id, "Familiar already adopted");
                return Ok(AdoptionOutcome::AlreadyAdopted {
                    familiar_id: id.clone(),
                });
            }
            Some(AdoptionMark::Adopted) => {}
        }

        let familiar = store.familiar(id).cloned().ok_or_else(|| not_found(id))?;

        let item = familiar.adoption_item();
        let line_item_id = item.id.clone();
        store.cart_mut().add(item);

        tracing::info!(
            familiar = %familiar.id,
            name = %familiar.name,
            price = %familiar.price,
            "Familiar adopted"
        );

        let certificate = self.present(&familiar, today).await;

        Ok(AdoptionOutcome::Adopted {
            familiar_id: familiar.id,
            line_item_id,
            certificate,
        })
    }

    /// Open a certificate for a familiar without adopting it
    pub async fn preview_certificate(
        &self,
        store: &Storefront,
        id: &FamiliarId,
        today: NaiveDate,
    ) -> Result<CertificateDelivery, DomainError> {
        let familiar = store.familiar(id).ok_or_else(|| not_found(id))?;
        Ok(self.present(familiar, today).await)
    }

    /// Render a familiar's certificate without touching the display channel
    pub fn certificate_html(
        &self,
        store: &Storefront,
        id: &FamiliarId,
        today: NaiveDate,
    ) -> Result<String, DomainError> {
        let familiar = store.familiar(id).ok_or_else(|| not_found(id))?;
        Ok(render_certificate(familiar, today))
    }

    /// The Adoption Hall listing
    pub fn hall(&self, store: &Storefront) -> AdoptionHall {
        AdoptionHall {
            available: store.available_count(),
            familiars: store.familiars().iter().map(|f| self.summary(f)).collect(),
            keepers: self.keepers(store),
        }
    }

    /// Full details of one familiar
    pub fn details(
        &self,
        store: &Storefront,
        id: &FamiliarId,
    ) -> Result<FamiliarDetails, DomainError> {
        store
            .familiar(id)
            .map(|f| self.details_of(f))
            .ok_or_else(|| not_found(id))
    }

    /// The first familiar still waiting for a keeper
    pub fn next_available(&self, store: &Storefront) -> Option<FamiliarDetails> {
        store.first_available().map(|f| self.details_of(f))
    }

    /// The Book of Keepers: adopted familiars in registry order
    pub fn keepers(&self, store: &Storefront) -> Vec<Keeper> {
        store
            .keepers()
            .map(|f| Keeper {
                id: f.id.clone(),
                name: f.name.clone(),
            })
            .collect()
    }

    /// Render and hand a certificate to the display channel. Never fails.
    async fn present(&self, familiar: &Familiar, today: NaiveDate) -> CertificateDelivery {
        let document = CertificateDocument {
            familiar_id: familiar.id.clone(),
            title: certificate_title(familiar),
            html: render_certificate(familiar, today),
        };

        match self.display.open(document).await {
            Ok(handle) => CertificateDelivery::Opened {
                handle,
                location: format!("/certificates/{}", handle),
            },
            Err(e) => {
                tracing::warn!(familiar = %familiar.id, error = %e, "Certificate not displayed");
                CertificateDelivery::Blocked {
                    notice: BLOCKED_NOTICE.to_string(),
                }
            }
        }
    }

    fn summary(&self, familiar: &Familiar) -> FamiliarSummary {
        let status_label = if familiar.adopted {
            "Adopted".to_string()
        } else {
            self.formatter.format(familiar.price, &self.currency_code)
        };

        FamiliarSummary {
            id: familiar.id.clone(),
            name: familiar.name.clone(),
            rarity: familiar.rarity,
            temperament: familiar.temperament.clone(),
            adopted: familiar.adopted,
            price: familiar.price,
            status_label,
        }
    }

    fn details_of(&self, familiar: &Familiar) -> FamiliarDetails {
        FamiliarDetails {
            summary: self.summary(familiar),
            origin: familiar.origin.clone(),
            traits: familiar.traits.clone(),
            blessing: familiar.boon.blessing().map(str::to_string),
            curse: familiar.boon.curse().map(str::to_string),
            lore: familiar.lore.clone(),
            oath: familiar.oath.clone(),
            photo: familiar.photo.clone(),
        }
    }
}

fn not_found(id: &FamiliarId) -> DomainError {
    DomainError::NotFound(format!("Familiar '{}' not in the Adoption Hall", id))
}
