//! Observed Record Cache
//!
//! Remembers the last election record seen on the lock and when it was seen,
//! so staleness checks never have to touch the backend.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::record::ElectionRecord;

/// A record together with the instant it was captured.
///
/// Both fields live under one lock so readers always see a matching pair.
#[derive(Debug, Default)]
struct Observation {
    record: ElectionRecord,
    observed_at: Option<DateTime<Utc>>,
}

/// Cache of the most recently observed election record.
///
/// Electors refresh the cache each time they read the lock, then ask how long
/// ago the record last changed. A challenger uses that age to decide whether
/// the leader has gone quiet; any change to the record resets the age, so a
/// leader that keeps renewing stays protected.
///
/// Time comes from the injected [`Clock`], never from the system directly,
/// which keeps staleness arithmetic testable.
pub struct ObservedState {
    inner: RwLock<Observation>,
    clock: Arc<dyn Clock>,
}

impl ObservedState {
    /// Create an empty cache that reads time from `clock`
    ///
    /// Until the first update the cache reports the zero record and an
    /// infinite age, so freshness checks fail closed.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Observation::default()),
            clock,
        }
    }

    /// Store `record` and stamp the observation time, unconditionally
    pub async fn update_record(&self, record: ElectionRecord) {
        let mut inner = self.inner.write().await;
        inner.record = record;
        inner.observed_at = Some(self.clock.now());
    }

    /// Store `record` only if it differs from the cached one.
    ///
    /// Returns whether the record changed. An identical record leaves the
    /// observation time untouched, so a leader that republishes the same
    /// record without renewing keeps aging. The comparison and the store
    /// happen under one write guard; concurrent callers cannot interleave
    /// between them.
    pub async fn update_record_if_changed(&self, record: ElectionRecord) -> bool {
        let mut inner = self.inner.write().await;
        if inner.record == record {
            trace!("Election record unchanged, keeping observation time");
            return false;
        }
        debug!(
            "Observed new election record: holder {}, transitions {}",
            record.holder_identity, record.leader_transitions
        );
        inner.record = record;
        inner.observed_at = Some(self.clock.now());
        true
    }

    /// Snapshot of the cached record
    pub async fn record(&self) -> ElectionRecord {
        self.inner.read().await.record.clone()
    }

    /// When the cached record was last observed, if ever
    pub async fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.observed_at
    }

    /// Age of the current observation.
    ///
    /// Reports [`Duration::MAX`] before the first update, so an empty cache
    /// always reads as stale.
    pub async fn elapsed(&self) -> Duration {
        let inner = self.inner.read().await;
        match inner.observed_at {
            Some(at) => self.clock.since(at),
            None => Duration::MAX,
        }
    }

    /// Whether the observation is younger than `within`
    pub async fn is_fresh(&self, within: Duration) -> bool {
        self.elapsed().await < within
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    fn record(holder: &str, transitions: u64) -> ElectionRecord {
        let mut record = ElectionRecord::new(holder, Duration::from_secs(15));
        record.leader_transitions = transitions;
        record
    }

    fn mock_state() -> (Arc<MockClock>, ObservedState) {
        let clock = Arc::new(MockClock::new(Utc::now()));
        let state = ObservedState::new(clock.clone());
        (clock, state)
    }

    #[tokio::test]
    async fn test_update_record_always_stamps_time() {
        let (clock, state) = mock_state();
        let a = record("node-a", 0);

        state.update_record(a.clone()).await;
        let first = state.observed_at().await;
        assert_eq!(first, Some(clock.now()));

        clock.advance(Duration::from_secs(3));
        state.update_record(a.clone()).await;
        assert_eq!(state.observed_at().await, Some(clock.now()));
        assert_ne!(state.observed_at().await, first);
        assert_eq!(state.elapsed().await, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_unchanged_record_preserves_observation_time() {
        let (clock, state) = mock_state();
        let a = record("node-a", 0);

        assert!(state.update_record_if_changed(a.clone()).await);
        let first = state.observed_at().await;

        clock.advance(Duration::from_secs(5));
        assert!(!state.update_record_if_changed(a.clone()).await);
        assert_eq!(state.observed_at().await, first);
        assert_eq!(state.elapsed().await, Duration::from_secs(5));

        // Age keeps accumulating across repeated no-op updates.
        clock.advance(Duration::from_secs(15));
        assert!(!state.update_record_if_changed(a.clone()).await);
        assert_eq!(state.observed_at().await, first);
        assert_eq!(state.elapsed().await, Duration::from_secs(20));
    }

    #[tokio::test]
    async fn test_single_field_change_is_detected() {
        let (clock, state) = mock_state();
        let a = record("node-a", 0);
        assert!(state.update_record_if_changed(a.clone()).await);

        clock.advance(Duration::from_secs(2));
        let mut renewed = a;
        renewed.renew_time = Some(clock.now());
        assert!(state.update_record_if_changed(renewed.clone()).await);
        assert_eq!(state.record().await, renewed);
        assert_eq!(state.elapsed().await, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_elapsed_tracks_mock_clock() {
        let (clock, state) = mock_state();
        state.update_record(record("node-a", 0)).await;

        clock.advance(Duration::from_secs(42));
        assert_eq!(state.elapsed().await, Duration::from_secs(42));
    }

    #[tokio::test]
    async fn test_staleness_over_leadership_change() {
        let (clock, state) = mock_state();

        // node-a takes the lease
        assert!(state.update_record_if_changed(record("node-a", 0)).await);
        assert_eq!(state.elapsed().await, Duration::ZERO);
        assert!(state.is_fresh(Duration::from_secs(10)).await);

        // node-a goes quiet for 5s; the same record keeps aging
        clock.advance(Duration::from_secs(5));
        assert!(!state.update_record_if_changed(record("node-a", 0)).await);
        assert_eq!(state.elapsed().await, Duration::from_secs(5));
        assert!(state.is_fresh(Duration::from_secs(10)).await);
        assert!(!state.is_fresh(Duration::from_secs(5)).await);

        // node-b takes over and the age resets
        assert!(state.update_record_if_changed(record("node-b", 1)).await);
        assert_eq!(state.elapsed().await, Duration::ZERO);
        assert_eq!(state.record().await.holder_identity, "node-b");
    }

    #[tokio::test]
    async fn test_empty_cache_is_infinitely_stale() {
        let (_clock, state) = mock_state();

        assert_eq!(state.record().await, ElectionRecord::default());
        assert_eq!(state.observed_at().await, None);
        assert_eq!(state.elapsed().await, Duration::MAX);
        assert!(!state.is_fresh(Duration::MAX).await);
    }

    #[tokio::test]
    async fn test_is_fresh_boundary_is_strict() {
        let (clock, state) = mock_state();
        state.update_record(record("node-a", 0)).await;

        clock.advance(Duration::from_secs(10));
        assert!(!state.is_fresh(Duration::from_secs(10)).await);
        assert!(state
            .is_fresh(Duration::from_secs(10) + Duration::from_nanos(1))
            .await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_and_reads() {
        let (_clock, state) = mock_state();
        let state = Arc::new(state);

        let mut tasks = Vec::new();
        for i in 0..8u64 {
            let writer = state.clone();
            tasks.push(tokio::spawn(async move {
                writer.update_record_if_changed(record("node-a", i)).await;
            }));
            let reader = state.clone();
            tasks.push(tokio::spawn(async move {
                let _ = reader.record().await;
                let _ = reader.elapsed().await;
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }

        assert!(state.observed_at().await.is_some());
        assert!(state.record().await.leader_transitions < 8);
    }
}
