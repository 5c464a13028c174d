//! Guarded Lock
//!
//! Wraps a `ResourceLock` so it can be shared by concurrent tasks: every
//! operation is funneled through one mutex, so at most one call reaches the
//! wrapped backend at any instant.

use tokio::sync::Mutex;

use crate::error::Result;
use crate::lock::ResourceLock;
use crate::record::ElectionRecord;

/// Serializing facade over a single wrapped [`ResourceLock`].
///
/// The facade implements `ResourceLock` itself and forwards each call
/// unchanged while holding its mutex, so calls are totally ordered: no
/// operation overlaps another, reads included. Serializing even `get`,
/// `describe` and `identity` costs some read concurrency but removes every
/// thread-safety assumption about the backend, and callers may depend on
/// that ordering.
///
/// The wrapped lock is moved in at construction and never handed back;
/// reaching the backend around the facade would reintroduce the races this
/// type exists to prevent.
///
/// A slow backend call holds the mutex for its full duration and stalls all
/// other callers. That is the intended trade: this layer adds no timeouts
/// and no errors of its own.
pub struct GuardedLock<L> {
    inner: Mutex<L>,
}

impl<L: ResourceLock> GuardedLock<L> {
    /// Wrap `lock`, taking exclusive ownership of it
    pub fn new(lock: L) -> Self {
        Self {
            inner: Mutex::new(lock),
        }
    }
}

#[async_trait::async_trait]
impl<L: ResourceLock> ResourceLock for GuardedLock<L> {
    async fn get(&self) -> Result<ElectionRecord> {
        let inner = self.inner.lock().await;
        inner.get().await
    }

    async fn create(&self, record: ElectionRecord) -> Result<()> {
        let inner = self.inner.lock().await;
        inner.create(record).await
    }

    async fn update(&self, record: ElectionRecord) -> Result<()> {
        let inner = self.inner.lock().await;
        inner.update(record).await
    }

    async fn record_event(&self, event: &str) {
        let inner = self.inner.lock().await;
        inner.record_event(event).await;
    }

    async fn describe(&self) -> String {
        let inner = self.inner.lock().await;
        inner.describe().await
    }

    async fn identity(&self) -> String {
        let inner = self.inner.lock().await;
        inner.identity().await
    }
}
