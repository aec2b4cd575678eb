use crate::utils::error::ApiError;
use std::time::Duration;

/// 重試之間的等待時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    None,
    /// 第 n 次重試等待 `step * n`
    Linear { step: Duration },
    /// 第 n 次重試等待 `initial * 2^(n-1)`，上限 `max`
    Exponential { initial: Duration, max: Duration },
}

impl Backoff {
    /// `retry` 從 1 開始
    pub fn delay(&self, retry: u32) -> Duration {
        let retry = retry.max(1);
        match *self {
            Backoff::None => Duration::ZERO,
            Backoff::Linear { step } => step.saturating_mul(retry),
            Backoff::Exponential { initial, max } => {
                let factor = 2u32.saturating_pow(retry - 1);
                initial.saturating_mul(factor).min(max)
            }
        }
    }
}

fn server_error(status: u16) -> bool {
    status >= 500
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Backoff,
    retryable_status: fn(u16) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Backoff::Linear {
                step: Duration::from_secs(1),
            },
            retryable_status: server_error,
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Backoff::None,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_retryable_status(mut self, predicate: fn(u16) -> bool) -> Self {
        self.retryable_status = predicate;
        self
    }

    /// 4xx 一律不重試；5xx 依 predicate；傳輸失敗與逾時都可重試
    pub fn is_retryable(&self, error: &ApiError) -> bool {
        match error {
            ApiError::Http { status, .. } => (self.retryable_status)(*status),
            ApiError::Timeout(_) => true,
            ApiError::Network(_) => error.is_network(),
            _ => false,
        }
    }

    /// `retries_used` 為已經做過的重試次數
    pub fn should_retry(&self, error: &ApiError, retries_used: u32) -> bool {
        retries_used < self.max_retries && self.is_retryable(error)
    }

    pub fn delay_for(&self, retry: u32) -> Duration {
        self.backoff.delay(retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            status_text: String::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_linear_backoff_grows_with_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
    }

    #[test]
    fn test_exponential_backoff_is_capped() {
        let backoff = Backoff::Exponential {
            initial: Duration::from_millis(100),
            max: Duration::from_millis(350),
        };
        assert_eq!(backoff.delay(1), Duration::from_millis(100));
        assert_eq!(backoff.delay(2), Duration::from_millis(200));
        assert_eq!(backoff.delay(3), Duration::from_millis(350));
        assert_eq!(Backoff::None.delay(5), Duration::ZERO);
    }

    #[test]
    fn test_client_errors_are_terminal() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(&http(404), 0));
        assert!(!policy.should_retry(&http(403), 0));
        assert!(policy.should_retry(&http(503), 0));
        assert!(policy.should_retry(&http(500), 1));
        assert!(!policy.should_retry(&http(503), 2));
    }

    #[test]
    fn test_timeouts_are_retryable() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(&ApiError::Timeout(Duration::from_secs(10)), 0));
        assert!(!RetryPolicy::none().should_retry(&ApiError::Timeout(Duration::from_secs(10)), 0));
    }

    #[test]
    fn test_custom_status_predicate() {
        let policy = RetryPolicy::default().with_retryable_status(|s| s == 502 || s == 429);
        assert!(policy.should_retry(&http(429), 0));
        assert!(!policy.should_retry(&http(500), 0));
    }
}
