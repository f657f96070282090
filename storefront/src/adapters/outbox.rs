//! Certificate outbox adapter
//!
//! The storefront's display surface: every opened certificate is parked in a
//! bounded in-memory outbox under a fresh handle and served back over HTTP.
//! A full outbox drops its oldest document. An outbox with zero capacity is
//! blocked and refuses everything.

use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{CertificateDocument, DisplayChannel, DisplayHandle};
use crate::error::DisplayError;

pub struct CertificateOutbox {
    capacity: usize,
    documents: RwLock<VecDeque<(DisplayHandle, CertificateDocument)>>,
}

impl CertificateOutbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            documents: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Fetch a previously opened document
    pub fn get(&self, handle: &DisplayHandle) -> Option<CertificateDocument> {
        let documents = self.documents.read().ok()?;
        documents
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, doc)| doc.clone())
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DisplayChannel for CertificateOutbox {
    async fn open(&self, document: CertificateDocument) -> Result<DisplayHandle, DisplayError> {
        if self.capacity == 0 {
            return Err(DisplayError::Blocked);
        }

        let mut documents = self
            .documents
            .write()
            .map_err(|_| DisplayError::Unavailable("certificate outbox poisoned".to_string()))?;

        while documents.len() >= self.capacity {
            if let Some((evicted, _)) = documents.pop_front() {
                tracing::debug!(handle = %evicted, "Evicted certificate from outbox");
            }
        }

        let handle = DisplayHandle::new();
        tracing::debug!(
            handle = %handle,
            familiar = %document.familiar_id,
            "Opened certificate"
        );
        documents.push_back((handle, document));

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FamiliarId;

    fn document(name: &str) -> CertificateDocument {
        CertificateDocument {
            familiar_id: FamiliarId::from(name),
            title: format!("Adoption — {}", name),
            html: format!("<html>{}</html>", name),
        }
    }

    #[tokio::test]
    async fn open_then_get() {
        let outbox = CertificateOutbox::new(4);

        let handle = outbox.open(document("mortiboo")).await.unwrap();

        let doc = outbox.get(&handle).unwrap();
        assert_eq!(doc.html, "<html>mortiboo</html>");
        assert_eq!(outbox.len(), 1);
    }

    #[tokio::test]
    async fn zero_capacity_is_blocked() {
        let outbox = CertificateOutbox::new(0);

        let result = outbox.open(document("mortiboo")).await;

        assert!(matches!(result, Err(DisplayError::Blocked)));
        assert!(outbox.is_empty());
    }

    #[tokio::test]
    async fn full_outbox_evicts_oldest() {
        let outbox = CertificateOutbox::new(2);

        let first = outbox.open(document("a")).await.unwrap();
        let second = outbox.open(document("b")).await.unwrap();
        let third = outbox.open(document("c")).await.unwrap();

        assert_eq!(outbox.len(), 2);
        assert!(outbox.get(&first).is_none());
        assert!(outbox.get(&second).is_some());
        assert!(outbox.get(&third).is_some());
    }

    #[test]
    fn unknown_handle() {
        let outbox = CertificateOutbox::new(2);
        assert!(outbox.get(&DisplayHandle::new()).is_none());
    }
}
