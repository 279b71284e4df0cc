//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

use crate::resilience::RetryPolicy;

/// Delay before a retry, split so logs can show the jitter separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    /// `base * 2^(attempt-1)`, capped at the policy maximum.
    pub capped: Duration,
    /// Random extra of at most a tenth of `capped`.
    pub jitter: Duration,
}

impl Backoff {
    pub fn total(&self) -> Duration {
        self.capped + self.jitter
    }
}

/// Backoff after `attempt` failed attempts (1-based) under `policy`.
pub fn backoff_for(policy: &RetryPolicy, attempt: u32) -> Backoff {
    if attempt == 0 {
        return Backoff {
            capped: Duration::ZERO,
            jitter: Duration::ZERO,
        };
    }

    let factor = 1u64.checked_shl(attempt - 1).unwrap_or(u64::MAX);
    let capped_ms = policy
        .base_delay_ms()
        .saturating_mul(factor)
        .min(policy.max_delay_ms());
    let jitter_ms = rand::thread_rng().gen_range(0..=capped_ms / 10);

    Backoff {
        capped: Duration::from_millis(capped_ms),
        jitter: Duration::from_millis(jitter_ms),
    }
}
