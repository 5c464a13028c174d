//! Leaseguard - Concurrency-Safe Leader Election Primitives
//!
//! Building blocks for lease-based leader election between distributed
//! processes: a lock facade that serializes every backend operation, and an
//! observed-record cache that answers how stale the last observation is.
//!
//! # Architecture
//!
//! Election backends implement the [`ResourceLock`] trait over a shared
//! election record. Elector tasks never talk to a backend directly; they go
//! through a [`GuardedLock`], which funnels all six lock operations through
//! one mutex so the backend sees at most one call at a time. Each observed
//! record lands in an [`ObservedState`], which pairs it with the observation
//! time so staleness checks stay off the wire.
//!
//! # Features
//!
//! - Serializing lock facade safe to share across tasks
//! - Observed-record cache with injectable clocks for exact staleness tests
//! - In-memory lock backend for tests and single-process elections
//! - Lease timing configuration with validation

pub mod clock;
pub mod config;
pub mod error;
pub mod lock;
pub mod record;
pub mod state;

pub use config::LeaseConfig;
pub use error::{Error, Result};
pub use lock::{GuardedLock, MemoryLock, ResourceLock};
pub use record::ElectionRecord;
pub use state::ObservedState;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::clock::{Clock, MockClock, SystemClock};
    pub use crate::config::LeaseConfig;
    pub use crate::error::{Error, Result};
    pub use crate::lock::{GuardedLock, MemoryLock, ResourceLock};
    pub use crate::record::ElectionRecord;
    pub use crate::state::ObservedState;
}
