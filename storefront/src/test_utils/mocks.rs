//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{CertificateDocument, DisplayChannel, DisplayHandle};
use crate::error::DisplayError;

// ============================================================================
// Recording Display Channel
// ============================================================================

/// Accepts every document and remembers it
#[derive(Default, Clone)]
pub struct RecordingDisplayChannel {
    opened: Arc<RwLock<Vec<(DisplayHandle, CertificateDocument)>>>,
}

impl RecordingDisplayChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<CertificateDocument> {
        self.opened
            .read()
            .unwrap()
            .iter()
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.opened.read().unwrap().len()
    }
}

#[async_trait]
impl DisplayChannel for RecordingDisplayChannel {
    async fn open(&self, document: CertificateDocument) -> Result<DisplayHandle, DisplayError> {
        let handle = DisplayHandle::new();
        self.opened.write().unwrap().push((handle, document));
        Ok(handle)
    }
}

// ============================================================================
// Blocked Display Channel
// ============================================================================

/// Refuses every document, like a browser blocking pop-ups
#[derive(Default, Clone)]
pub struct BlockedDisplayChannel {
    attempts: Arc<RwLock<usize>>,
}

impl BlockedDisplayChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.read().unwrap()
    }
}

#[async_trait]
impl DisplayChannel for BlockedDisplayChannel {
    async fn open(&self, _document: CertificateDocument) -> Result<DisplayHandle, DisplayError> {
        *self.attempts.write().unwrap() += 1;
        Err(DisplayError::Blocked)
    }
}
