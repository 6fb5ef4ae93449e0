//! Per-operation deadline for store calls.

use std::future::IntoFuture;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};

use crate::errors::{StoreError, StoreResult};

/// Deadline shared by every store call of one service operation.
///
/// Repositories run each driver future through [`OpContext::run`]; when the
/// deadline passes the future is dropped, which cancels the in-flight call.
#[derive(Debug, Clone, Copy)]
pub struct OpContext {
    deadline: Instant,
}

impl OpContext {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now() + timeout,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Await `fut` unless the deadline passes first.
    pub async fn run<F, T, E>(&self, fut: F) -> StoreResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Into<StoreError>,
    {
        match timeout_at(self.deadline, fut.into_future()).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(StoreError::Timeout),
        }
    }
}
