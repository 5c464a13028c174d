//! Election Record
//!
//! The value describing the current claim on the shared resource: who holds
//! leadership, for how long, and how often it has changed hands.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the election record stored by a lock backend.
///
/// Records are immutable values: this crate never mutates one in place, only
/// replaces a cached record wholesale. Equality is structural over all five
/// fields, timestamps included, and the conditional update in
/// [`ObservedState`](crate::state::ObservedState) relies on exactly that:
/// two records compare equal only when every field matches.
///
/// How a backend encodes the record on the wire is the backend's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionRecord {
    /// Identity of the current leader (empty when the lease was released)
    pub holder_identity: String,

    /// How long the lease is valid after the last renewal
    pub lease_duration: Duration,

    /// When the current holder first acquired leadership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquire_time: Option<DateTime<Utc>>,

    /// When the current holder most recently renewed the lease
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_time: Option<DateTime<Utc>>,

    /// Incremented every time the holder identity changes
    #[serde(default)]
    pub leader_transitions: u64,
}

impl ElectionRecord {
    /// Create a record claiming the lease for `identity`, with no timestamps
    /// and a zero transition count
    pub fn new(identity: impl Into<String>, lease_duration: Duration) -> Self {
        Self {
            holder_identity: identity.into(),
            lease_duration,
            ..Default::default()
        }
    }

    /// Check whether any candidate currently claims the lease
    pub fn has_holder(&self) -> bool {
        !self.holder_identity.is_empty()
    }

    /// Check whether `identity` is the current holder
    ///
    /// A released record (empty holder) matches no candidate.
    pub fn is_held_by(&self, identity: &str) -> bool {
        self.has_holder() && self.holder_identity == identity
    }
}
