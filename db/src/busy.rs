//! How engine calls react to a busy database.
//!
//! The engine reports `SQLITE_BUSY` when another connection holds a lock it
//! needs. Stepping the same statement again is safe: nothing was applied, so
//! each row is still delivered exactly once. [`BusyPolicy::Spin`] retries
//! without bound, which can livelock if the lock is never released.
//! [`BusyPolicy::Backoff`] bounds the attempts with an exponential delay built
//! on `backon`.

use std::thread;
use std::time::Duration;

use backon::{BlockingRetryable, ExponentialBuilder};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{Error, Result};

/// Bounded retry settings for [`BusyPolicy::Backoff`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Multiplier applied to the delay after each retry.
    pub factor: f32,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            initial_delay_ms: 5,
            max_delay_ms: 1_000,
            factor: 2.0,
        }
    }
}

impl BackoffConfig {
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay_ms = delay.as_millis() as u64;
        self
    }

    fn build_backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.initial_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
            .with_max_times(self.max_retries as usize)
            .with_factor(self.factor)
            .with_jitter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BusyPolicy {
    /// Retry immediately until the lock clears.
    #[default]
    Spin,
    /// Retry with exponential delay; give up with the busy error once the
    /// attempts are used up.
    Backoff(BackoffConfig),
}

impl BusyPolicy {
    /// Run `op`, retrying it while it fails with a transient busy error.
    pub(crate) fn retry<T>(&self, what: &'static str, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        match self {
            BusyPolicy::Spin => {
                let mut attempt = 0u64;
                loop {
                    match op() {
                        Err(err) if err.is_busy() => {
                            attempt += 1;
                            trace!(operation = what, attempt, "Database busy, retrying");
                            thread::yield_now();
                        }
                        other => return other,
                    }
                }
            }
            BusyPolicy::Backoff(config) => {
                let max_retries = config.max_retries;
                let mut attempt = 0u32;
                let notify = |err: &Error, dur: Duration| {
                    attempt += 1;
                    warn!(
                        operation = what,
                        attempt,
                        max_retries,
                        next_delay_ms = dur.as_millis() as u64,
                        error = %err,
                        "Database busy, will retry"
                    );
                };

                op.retry(config.build_backoff())
                    .sleep(thread::sleep)
                    .when(Error::is_busy)
                    .notify(notify)
                    .call()
            }
        }
    }
}
