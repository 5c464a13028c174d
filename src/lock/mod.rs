//! Resource Lock Module
//!
//! The abstract capability for reading and writing the election record
//! against a coordination backend, plus the facade that makes any such
//! backend safe to share between concurrent tasks.

mod guarded;
mod memory;

pub use guarded::GuardedLock;
pub use memory::MemoryLock;

use crate::error::Result;
use crate::record::ElectionRecord;

/// Capability for persisting the election record.
///
/// Backends implement this against whatever store actually holds the record;
/// this crate never assumes anything about the encoding or the transport.
/// All six operations are async, metadata queries included, so a facade can
/// serialize every one of them behind a single mutex.
#[async_trait::async_trait]
pub trait ResourceLock: Send + Sync {
    /// Fetch the current election record.
    ///
    /// Returns [`Error::RecordNotFound`](crate::Error::RecordNotFound) when
    /// no record has been created yet.
    async fn get(&self) -> Result<ElectionRecord>;

    /// Create the election record; fails if one already exists
    async fn create(&self, record: ElectionRecord) -> Result<()>;

    /// Replace an existing election record
    async fn update(&self, record: ElectionRecord) -> Result<()>;

    /// Emit an audit event tied to the locked resource (leadership won,
    /// leadership lost, and the like)
    async fn record_event(&self, event: &str);

    /// Human-readable description of the locked resource, for log lines
    async fn describe(&self) -> String;

    /// Identity of the candidate this lock instance writes on behalf of
    async fn identity(&self) -> String;
}
