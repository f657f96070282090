//! Display channel port
//!
//! Abstracts "open a new display surface and write this document into it".
//! The adoption workflow hands rendered certificates to this port and never
//! retries: a refusal is reported to the shopper, the adoption stands.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::FamiliarId;
use crate::error::DisplayError;

/// Handle to an opened display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayHandle(pub Uuid);

impl DisplayHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DisplayHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DisplayHandle {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rendered, self-contained document ready to be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    pub familiar_id: FamiliarId,
    pub title: String,
    pub html: String,
}

#[async_trait]
pub trait DisplayChannel: Send + Sync {
    /// Open a new surface showing `document`
    async fn open(&self, document: CertificateDocument) -> Result<DisplayHandle, DisplayError>;
}
