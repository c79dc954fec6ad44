//! CallbackForwarder - relays inbound provider payloads downstream.
//!
//! Each delivery runs as its own task, detached from the HTTP response that
//! accepted the payload. Tasks are registered with a `TaskTracker` so the
//! process can wait for them on shutdown, and share one `CancellationToken`
//! that interrupts attempts and backoff sleeps once the grace period ends.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use uuid::Uuid;

use crate::domain::forwarding::{DeliveryOutcome, RetryPolicy};
use crate::ports::CallbackTransport;

/// Background relay of callback payloads with bounded retry.
pub struct CallbackForwarder {
    transport: Arc<dyn CallbackTransport>,
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl CallbackForwarder {
    pub fn new(transport: Arc<dyn CallbackTransport>) -> Self {
        Self {
            transport,
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Start a delivery in the background and return immediately.
    pub fn spawn(
        &self,
        url: impl Into<String>,
        payload: Bytes,
        policy: RetryPolicy,
    ) -> JoinHandle<DeliveryOutcome> {
        let transport = Arc::clone(&self.transport);
        let shutdown = self.shutdown.clone();
        let url = url.into();

        self.tracker
            .spawn(async move { run_delivery(transport, shutdown, url, payload, policy).await })
    }

    /// Deliver in the caller's task.
    pub async fn deliver(&self, url: &str, payload: Bytes, policy: RetryPolicy) -> DeliveryOutcome {
        run_delivery(
            Arc::clone(&self.transport),
            self.shutdown.clone(),
            url.to_string(),
            payload,
            policy,
        )
        .await
    }

    /// Deliveries spawned and not yet finished.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait up to `grace` for in-flight deliveries, then cancel the rest.
    ///
    /// Returns `true` when everything finished inside the grace period.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.tracker.close();

        let pending = self.tracker.len();
        if pending > 0 {
            tracing::info!(
                pending,
                grace_secs = grace.as_secs(),
                "Draining callback deliveries"
            );
        }

        if tokio::time::timeout(grace, self.tracker.wait()).await.is_ok() {
            return true;
        }

        tracing::warn!(
            remaining = self.tracker.len(),
            "Grace period elapsed, cancelling callback deliveries"
        );
        self.shutdown.cancel();
        self.tracker.wait().await;
        false
    }
}

async fn run_delivery(
    transport: Arc<dyn CallbackTransport>,
    shutdown: CancellationToken,
    url: String,
    payload: Bytes,
    policy: RetryPolicy,
) -> DeliveryOutcome {
    let delivery_id = Uuid::new_v4();
    let mut attempts = 0;

    while attempts < policy.max_attempts {
        if shutdown.is_cancelled() {
            return cancelled(delivery_id, attempts);
        }
        attempts += 1;

        let result = tokio::select! {
            biased;
            _ = shutdown.cancelled() => return cancelled(delivery_id, attempts),
            result = tokio::time::timeout(
                policy.attempt_timeout,
                transport.deliver(&url, payload.clone()),
            ) => result,
        };

        match result {
            Ok(Ok(())) => {
                tracing::info!(%delivery_id, attempts, url = %url, "Callback delivered");
                return DeliveryOutcome::Delivered { attempts };
            }
            Ok(Err(e)) => {
                tracing::warn!(%delivery_id, attempt = attempts, url = %url, error = %e, "Callback attempt failed");
            }
            Err(_) => {
                tracing::warn!(
                    %delivery_id,
                    attempt = attempts,
                    url = %url,
                    timeout_ms = policy.attempt_timeout.as_millis() as u64,
                    "Callback attempt timed out"
                );
            }
        }

        if let Some(delay) = policy.delay_after(attempts) {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return cancelled(delivery_id, attempts),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    tracing::error!(%delivery_id, attempts, url = %url, "Callback delivery gave up");
    DeliveryOutcome::Exhausted { attempts }
}

fn cancelled(delivery_id: Uuid, attempts: u32) -> DeliveryOutcome {
    tracing::warn!(%delivery_id, attempts, "Callback delivery cancelled by shutdown");
    DeliveryOutcome::Cancelled { attempts }
}
