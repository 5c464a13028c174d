//! Leaseguard demo: one renewing leader, one watching challenger.
//!
//! Runs two tasks against a shared in-memory lock. The leader renews its
//! lease on every retry tick; the watcher reads the lock through the guarded
//! facade, feeds each record into an `ObservedState`, and reports how fresh
//! the leader looks.
//!
//! Run with: cargo run --example observer

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaseguard::clock::SystemClock;
use leaseguard::{ElectionRecord, GuardedLock, LeaseConfig, MemoryLock, ObservedState, ResourceLock};

/// Initialize logging
fn init_logging(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> leaseguard::Result<()> {
    init_logging("info");

    // Compressed timings so the demo finishes in a few seconds
    let config = LeaseConfig {
        lease_duration_ms: 1500,
        renew_deadline_ms: 1000,
        retry_period_ms: 250,
    };
    config.validate()?;

    let identity = format!("demo-{}", uuid::Uuid::new_v4());
    info!("Starting demo elector {}", identity);

    let lock = Arc::new(GuardedLock::new(MemoryLock::new("demo/lease", &identity)));
    let observed = Arc::new(ObservedState::new(Arc::new(SystemClock::new())));

    // Take the lease
    let now = Utc::now();
    let mut record = ElectionRecord::new(&identity, config.lease_duration());
    record.acquire_time = Some(now);
    record.renew_time = Some(now);
    lock.create(record).await?;
    lock.record_event("became leader").await;

    // Leader: renew on every retry tick
    let renewer = {
        let lock = lock.clone();
        let retry_period = config.retry_period();
        tokio::spawn(async move {
            for _ in 0..5 {
                tokio::time::sleep(retry_period).await;
                let mut record = match lock.get().await {
                    Ok(record) => record,
                    Err(e) => {
                        error!("Renew failed to read record: {}", e);
                        break;
                    }
                };
                record.renew_time = Some(Utc::now());
                if let Err(e) = lock.update(record).await {
                    error!("Renew failed to write record: {}", e);
                    break;
                }
                info!("Renewed lease");
            }
        })
    };

    // Challenger: watch the lock and report staleness
    let watcher = {
        let lock = lock.clone();
        let observed = observed.clone();
        let lease_duration = config.lease_duration();
        let retry_period = config.retry_period();
        tokio::spawn(async move {
            for _ in 0..5 {
                tokio::time::sleep(retry_period * 2).await;
                let record = match lock.get().await {
                    Ok(record) => record,
                    Err(e) => {
                        error!("Watch failed to read record: {}", e);
                        continue;
                    }
                };
                let changed = observed.update_record_if_changed(record).await;
                let snapshot = observed.record().await;
                info!(
                    "Leader {} changed={} age={:?} fresh={}",
                    snapshot.holder_identity,
                    changed,
                    observed.elapsed().await,
                    observed.is_fresh(lease_duration).await
                );
            }
        })
    };

    let _ = renewer.await;
    let _ = watcher.await;

    let record = lock.get().await?;
    info!(
        "Demo finished: lock {} held by {}, {} transitions",
        lock.describe().await,
        record.holder_identity,
        record.leader_transitions
    );
    Ok(())
}
