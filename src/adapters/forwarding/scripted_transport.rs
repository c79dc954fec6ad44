//! Scripted callback transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::time::Instant;

use crate::ports::{CallbackTransport, DeliveryError};

/// What one delivery attempt does.
#[derive(Debug, Clone)]
pub enum Step {
    Succeed,
    Fail(DeliveryError),
    /// Never completes; the caller's timeout or cancellation must end it.
    Hang,
}

/// Recorded delivery attempt.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub url: String,
    pub payload: Bytes,
    pub at: Instant,
}

/// `CallbackTransport` that plays back a list of steps.
///
/// Once the script runs out, every further attempt uses the fallback step.
#[derive(Clone)]
pub struct ScriptedTransport {
    inner: Arc<Mutex<ScriptState>>,
}

struct ScriptState {
    script: VecDeque<Step>,
    fallback: Step,
    attempts: Vec<Attempt>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Step>, fallback: Step) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScriptState {
                script: script.into_iter().collect(),
                fallback,
                attempts: Vec::new(),
            })),
        }
    }

    pub fn succeeding() -> Self {
        Self::new([], Step::Succeed)
    }

    pub fn failing() -> Self {
        Self::new([], Step::Fail(DeliveryError::Status(503)))
    }

    pub fn hanging() -> Self {
        Self::new([], Step::Hang)
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.inner.lock().unwrap().attempts.clone()
    }

    pub fn attempt_count(&self) -> usize {
        self.inner.lock().unwrap().attempts.len()
    }
}

#[async_trait]
impl CallbackTransport for ScriptedTransport {
    async fn deliver(&self, url: &str, payload: Bytes) -> Result<(), DeliveryError> {
        let step = {
            let mut state = self.inner.lock().unwrap();
            state.attempts.push(Attempt {
                url: url.to_string(),
                payload,
                at: Instant::now(),
            });
            let fallback = state.fallback.clone();
            state.script.pop_front().unwrap_or(fallback)
        };

        match step {
            Step::Succeed => Ok(()),
            Step::Fail(error) => Err(error),
            Step::Hang => std::future::pending().await,
        }
    }
}
