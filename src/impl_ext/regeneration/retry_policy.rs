use std::time::Duration;

/// Statuses for which retrying cannot change the outcome.
const NON_RETRYABLE_STATUSES: [u16; 3] = [400, 403, 404];

/// Retry schedule for the regenerate call. The status lookup itself is never
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationRetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RegenerationRetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(30_000),
        }
    }
}

impl RegenerationRetryPolicy {
    /// `failure_count` is the number of failed attempts so far. `status` is
    /// the HTTP status of the last failure, if there was a response.
    pub fn should_retry(&self, failure_count: u32, status: Option<u16>) -> bool {
        if status.is_some_and(|s| NON_RETRYABLE_STATUSES.contains(&s)) {
            return false;
        }
        failure_count < self.max_retries
    }

    /// Exponential backoff, capped.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |d| d.min(self.max_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_final() {
        let policy = RegenerationRetryPolicy::default();
        for status in [400, 403, 404] {
            assert!(!policy.should_retry(0, Some(status)));
        }
        assert!(policy.should_retry(0, Some(500)));
        assert!(policy.should_retry(1, None));
        assert!(!policy.should_retry(2, Some(503)));
    }

    #[test]
    fn delay_doubles_up_to_cap() {
        let policy = RegenerationRetryPolicy::default();
        assert_eq!(policy.retry_delay(0), Duration::from_millis(1000));
        assert_eq!(policy.retry_delay(1), Duration::from_millis(2000));
        assert_eq!(policy.retry_delay(4), Duration::from_millis(16_000));
        assert_eq!(policy.retry_delay(5), Duration::from_millis(30_000));
        assert_eq!(policy.retry_delay(40), Duration::from_millis(30_000));
    }
}
