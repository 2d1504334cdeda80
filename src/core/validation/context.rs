//! Per-validation cancellation and deadline handling

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::core::types::ProbeError;

/// Caller-controlled deadline and cancellation signal for one validation run
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl ValidationContext {
    /// Context without deadline or cancellation
    pub fn background() -> Self {
        Self::default()
    }

    /// Context whose deadline is `timeout` from now. A timeout too large
    /// to represent means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancel: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cancel probe calls once `true` is sent on the channel
    pub fn with_cancellation(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation().is_some()
    }

    fn cancellation(&self) -> Option<ProbeError> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(ProbeError::cancelled("validation cancelled"));
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(ProbeError::cancelled("deadline exceeded"));
        }
        None
    }

    /// Run one probe call under this context.
    ///
    /// An already cancelled or expired context fails without polling the
    /// call at all.
    pub async fn run<T, F>(&self, call: F) -> Result<T, ProbeError>
    where
        F: Future<Output = Result<T, ProbeError>>,
    {
        if let Some(err) = self.cancellation() {
            return Err(err);
        }

        let cancelled = async {
            match self.cancel.clone() {
                Some(mut rx) => {
                    // A dropped sender can never cancel.
                    if rx.wait_for(|cancelled| *cancelled).await.is_err() {
                        std::future::pending::<()>().await;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(ProbeError::cancelled("validation cancelled")),
            _ = expired => Err(ProbeError::cancelled("deadline exceeded")),
            result = call => result,
        }
    }
}
