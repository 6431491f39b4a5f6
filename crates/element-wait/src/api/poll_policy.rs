// Poll policy - retry budget shared by every wait
//
// The defaults (10 attempts, 500ms apart) bound any single lookup to roughly
// five seconds. The policy is a plain value so callers can pass a different
// one per call without changing the contract of any operation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of lookup attempts per poll
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default delay between lookup attempts in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Environment variable overriding [`PollPolicy::max_attempts`]
pub const MAX_ATTEMPTS_ENV: &str = "ELEMENT_WAIT_MAX_ATTEMPTS";

/// Environment variable overriding [`PollPolicy::interval_ms`]
pub const INTERVAL_MS_ENV: &str = "ELEMENT_WAIT_INTERVAL_MS";

/// Retry budget for a poll: how many lookups, and how long to wait between them.
///
/// Serializes as `{"maxAttempts": 10, "intervalMs": 500}`. Missing fields take
/// the defaults.
///
/// # Example
///
/// ```ignore
/// use element_wait::PollPolicy;
/// use std::time::Duration;
///
/// let policy = PollPolicy::builder()
///     .max_attempts(20)
///     .interval(Duration::from_millis(250))
///     .build();
/// assert_eq!(policy.worst_case_wait(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollPolicy {
    /// Maximum number of lookups. Zero is treated as one.
    pub max_attempts: u32,
    /// Delay between consecutive lookups in milliseconds
    pub interval_ms: u64,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl PollPolicy {
    /// Create a new builder for PollPolicy
    pub fn builder() -> PollPolicyBuilder {
        PollPolicyBuilder::default()
    }

    /// Reads the policy from `ELEMENT_WAIT_MAX_ATTEMPTS` and `ELEMENT_WAIT_INTERVAL_MS`.
    ///
    /// Unset variables keep their defaults. A variable that is set but not a
    /// non-negative integer is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();

        if let Some(value) = lookup(MAX_ATTEMPTS_ENV) {
            policy.max_attempts = value.trim().parse().map_err(|e| {
                Error::InvalidArgument(format!("{}='{}': {}", MAX_ATTEMPTS_ENV, value, e))
            })?;
        }

        if let Some(value) = lookup(INTERVAL_MS_ENV) {
            policy.interval_ms = value.trim().parse().map_err(|e| {
                Error::InvalidArgument(format!("{}='{}': {}", INTERVAL_MS_ENV, value, e))
            })?;
        }

        Ok(policy)
    }

    /// Delay between consecutive lookups
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Number of lookups a poll performs before giving up (never less than one)
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Advertised upper bound on a single poll: `max_attempts * interval`.
    pub fn worst_case_wait(&self) -> Duration {
        self.interval() * self.attempts()
    }
}

/// Builder for PollPolicy
#[derive(Debug, Clone, Default)]
pub struct PollPolicyBuilder {
    max_attempts: Option<u32>,
    interval_ms: Option<u64>,
}

impl PollPolicyBuilder {
    /// Set the maximum number of lookups
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Set the delay between lookups
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval_ms = Some(interval.as_millis() as u64);
        self
    }

    /// Set the delay between lookups in milliseconds
    pub fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Build the PollPolicy
    pub fn build(self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            interval_ms: self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS),
        }
    }
}
