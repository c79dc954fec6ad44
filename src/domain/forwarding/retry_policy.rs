//! Bounded retry schedule for relaying callbacks downstream.

use std::time::Duration;

/// How many times a payload is offered downstream, and how long to wait.
///
/// Backoff is linear: after failed attempt `n` (1-based) the forwarder
/// sleeps `n * backoff_step` before the next attempt. No sleep follows the
/// final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_step: Duration,
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    /// Payment webhooks: 3 attempts, 3s/6s backoff, 5s per attempt.
    pub const fn bounded() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(3),
            attempt_timeout: Duration::from_secs(5),
        }
    }

    /// Login results: one attempt, 5s timeout.
    pub const fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            backoff_step: Duration::ZERO,
            attempt_timeout: Duration::from_secs(5),
        }
    }

    /// Sleep before the attempt following `attempt`, or `None` when
    /// `attempt` was the last one allowed.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt >= self.max_attempts {
            return None;
        }
        Some(self.backoff_step * attempt)
    }

    /// Longest time a delivery can take when every attempt times out.
    pub fn worst_case(&self) -> Duration {
        let attempts = self.attempt_timeout * self.max_attempts;
        let sleeps: Duration = (1..self.max_attempts)
            .filter_map(|attempt| self.delay_after(attempt))
            .sum();
        attempts + sleeps
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::bounded()
    }
}

/// How a delivery ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Downstream accepted the payload on attempt `attempts`.
    Delivered { attempts: u32 },

    /// Every allowed attempt failed.
    Exhausted { attempts: u32 },

    /// Shutdown interrupted the delivery after `attempts` attempts.
    Cancelled { attempts: u32 },
}

impl DeliveryOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            DeliveryOutcome::Delivered { attempts }
            | DeliveryOutcome::Exhausted { attempts }
            | DeliveryOutcome::Cancelled { attempts } => *attempts,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}
