//! Retry budget and backoff schedule for upstream requests.

use crate::config::Config;
use std::time::Duration;

/// Bounded retry with exponential backoff.
///
/// Attempts are numbered from 1. When attempt `n` fails with a retryable
/// error and `n < max_attempts`, the next attempt starts after
/// `base_delay * 2^n`; with a one second base that is 2s, 4s, 8s, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_attempts, config.backoff_base())
    }

    /// Whether another attempt is allowed after `attempt` failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Wait after failed attempt `attempt` before the next one.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Every wait a request may go through when all attempts fail.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|a| self.delay_for(a)).collect()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            crate::constants::retry::MAX_ATTEMPTS,
            Duration::from_millis(crate::constants::retry::BASE_DELAY_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(
            policy.schedule(),
            vec![Duration::from_secs(2), Duration::from_secs(4)]
        );
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
    }

    #[test]
    fn test_delays_strictly_increase() {
        let policy = RetryPolicy::new(6, Duration::from_millis(10));
        let schedule = policy.schedule();
        assert_eq!(schedule.len(), 5);
        assert!(schedule.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_should_retry_respects_budget() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(1));
        assert_eq!(policy.max_attempts, 1);
        assert!(policy.schedule().is_empty());
    }

    #[test]
    fn test_huge_attempt_saturates() {
        let policy = RetryPolicy::new(100, Duration::from_secs(1));
        assert_eq!(policy.delay_for(64), Duration::from_secs(1).saturating_mul(u32::MAX));
    }
}
