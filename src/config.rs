//! Lease Configuration
//!
//! Timing contract shared by everything that produces or judges election
//! records. The crate validates the relationships between the timings; the
//! loop that schedules acquire/renew attempts lives outside this crate.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lease timing configuration
///
/// Embeddable in a host application's own configuration file; every field
/// has a serde default so a bare `[lease]` table is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseConfig {
    /// How long a lease is valid after the last renewal, in milliseconds.
    /// Non-leader candidates must wait at least this long after observing a
    /// fresh record before they may try to take the lease over.
    #[serde(default = "default_lease_duration_ms")]
    pub lease_duration_ms: u64,

    /// How long the acting leader keeps trying to renew before giving up
    /// leadership, in milliseconds
    #[serde(default = "default_renew_deadline_ms")]
    pub renew_deadline_ms: u64,

    /// Pause between individual acquire/renew attempts, in milliseconds
    #[serde(default = "default_retry_period_ms")]
    pub retry_period_ms: u64,
}

// Default value functions
fn default_lease_duration_ms() -> u64 {
    15_000
}

fn default_renew_deadline_ms() -> u64 {
    10_000
}

fn default_retry_period_ms() -> u64 {
    2_000
}

impl Default for LeaseConfig {
    fn default() -> Self {
        Self {
            lease_duration_ms: default_lease_duration_ms(),
            renew_deadline_ms: default_renew_deadline_ms(),
            retry_period_ms: default_retry_period_ms(),
        }
    }
}

impl LeaseConfig {
    /// Get the lease duration as a Duration
    pub fn lease_duration(&self) -> Duration {
        Duration::from_millis(self.lease_duration_ms)
    }

    /// Get the renew deadline as a Duration
    pub fn renew_deadline(&self) -> Duration {
        Duration::from_millis(self.renew_deadline_ms)
    }

    /// Get the retry period as a Duration
    pub fn retry_period(&self) -> Duration {
        Duration::from_millis(self.retry_period_ms)
    }

    /// Validate the configuration
    ///
    /// A lease must outlive the renew deadline, and the renew deadline must
    /// leave room for more than one retry; otherwise a leader would lose the
    /// lease before it had a real chance to keep it.
    pub fn validate(&self) -> crate::Result<()> {
        if self.retry_period_ms == 0 {
            return Err(crate::Error::Config(
                "retry_period_ms must be greater than zero".into(),
            ));
        }

        if self.renew_deadline_ms <= self.retry_period_ms {
            return Err(crate::Error::Config(
                "renew_deadline_ms must be greater than retry_period_ms".into(),
            ));
        }

        if self.lease_duration_ms <= self.renew_deadline_ms {
            return Err(crate::Error::Config(
                "lease_duration_ms must be greater than renew_deadline_ms".into(),
            ));
        }

        Ok(())
    }
}
