//! In-Memory Lock
//!
//! A process-local `ResourceLock` backend. Useful for tests and for running
//! several elector tasks against a shared lease inside one process.

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lock::ResourceLock;
use crate::record::ElectionRecord;

/// Lock backend that stores the election record in process memory.
///
/// On its own the backend is already safe for concurrent use; wrapping it in
/// a [`GuardedLock`](crate::lock::GuardedLock) additionally orders whole
/// operations, which is what election code relies on.
pub struct MemoryLock {
    name: String,
    identity: String,
    record: Mutex<Option<ElectionRecord>>,
    events: Mutex<Vec<String>>,
}

impl MemoryLock {
    /// Create an empty lock named `name`, acting as elector `identity`
    pub fn new(name: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: identity.into(),
            record: Mutex::new(None),
            events: Mutex::new(Vec::new()),
        }
    }

    /// All events recorded so far, oldest first
    pub async fn events(&self) -> Vec<String> {
        self.events.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ResourceLock for MemoryLock {
    async fn get(&self) -> Result<ElectionRecord> {
        let record = self.record.lock().await;
        record
            .clone()
            .ok_or_else(|| Error::RecordNotFound(self.name.clone()))
    }

    async fn create(&self, record: ElectionRecord) -> Result<()> {
        let mut slot = self.record.lock().await;
        if slot.is_some() {
            return Err(Error::Conflict {
                resource: self.name.clone(),
                reason: "record already exists".to_string(),
            });
        }
        *slot = Some(record);
        Ok(())
    }

    async fn update(&self, record: ElectionRecord) -> Result<()> {
        let mut slot = self.record.lock().await;
        if slot.is_none() {
            return Err(Error::RecordNotFound(self.name.clone()));
        }
        *slot = Some(record);
        Ok(())
    }

    async fn record_event(&self, event: &str) {
        debug!("Lock {}: {}", self.name, event);
        self.events.lock().await.push(event.to_string());
    }

    async fn describe(&self) -> String {
        self.name.clone()
    }

    async fn identity(&self) -> String {
        self.identity.clone()
    }
}
