//! Timeout, single retry, and degradation bookkeeping for collaborator reads.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cadence_core::config::AnalyticsConfig;
use cadence_core::errors::{CadenceError, CadenceResult};
use cadence_observability::events;

const MAX_RETRIES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub timeout: Duration,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            timeout: config.collaborator_timeout(),
            backoff: config.retry_backoff(),
        }
    }
}

/// Run `call` under the policy's timeout, retrying once after the backoff.
///
/// Fatal errors are returned immediately without a retry.
pub async fn fetch_with_retry<T, F, Fut>(
    component: &str,
    policy: RetryPolicy,
    mut call: F,
) -> CadenceResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CadenceResult<T>>,
{
    let mut attempt = 0;
    loop {
        let err = match tokio::time::timeout(policy.timeout, call()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => e,
            Err(_) => CadenceError::Timeout {
                component: component.to_string(),
                millis: policy.timeout.as_millis() as u64,
            },
        };
        if err.is_fatal() || attempt >= MAX_RETRIES {
            return Err(err);
        }
        attempt += 1;
        events::collaborator_retry(component, &err.to_string());
        tokio::time::sleep(policy.backoff).await;
    }
}

/// A collaborator whose result was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degradation {
    pub component: String,
    pub reason: String,
}

/// Degradations recorded while assembling one snapshot.
#[derive(Debug, Clone, Default)]
pub struct Degradations {
    entries: Vec<Degradation>,
}

impl Degradations {
    /// Take the value, or record the failure and fall back to `default`.
    pub fn absorb<T>(&mut self, component: &str, result: CadenceResult<T>, default: T) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.record(component, e.to_string());
                default
            }
        }
    }

    pub fn record(&mut self, component: &str, reason: String) {
        events::partial_data_default(component, &reason);
        self.entries.push(Degradation {
            component: component.to_string(),
            reason,
        });
    }

    pub fn into_vec(self) -> Vec<Degradation> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn policy() -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_millis(20),
            backoff: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn retries_once_then_succeeds() {
        let calls = AtomicUsize::new(0);
        let result = fetch_with_retry("test", policy(), || async {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CadenceError::ConfigError("flaky".into()))
            } else {
                Ok(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn gives_up_after_one_retry() {
        let calls = AtomicUsize::new(0);
        let result: CadenceResult<u8> = fetch_with_retry("test", policy(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CadenceError::ConfigError("down".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fatal_errors_are_not_retried() {
        let calls = AtomicUsize::new(0);
        let result: CadenceResult<u8> = fetch_with_retry("test", policy(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CadenceError::unavailable("event_store", "connection refused"))
        })
        .await;
        assert!(matches!(result, Err(CadenceError::DataUnavailable { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn timeouts_become_errors() {
        let result: CadenceResult<u8> = fetch_with_retry("slow", policy(), || async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(1)
        })
        .await;
        assert!(matches!(result, Err(CadenceError::Timeout { millis: 20, .. })));
    }

    #[test]
    fn absorb_records_failures() {
        let mut d = Degradations::default();
        assert_eq!(d.absorb("a", Ok(1), 0), 1);
        assert_eq!(d.absorb::<i32>("b", Err(CadenceError::ConfigError("x".into())), 0), 0);
        let entries = d.into_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component, "b");
    }
}
