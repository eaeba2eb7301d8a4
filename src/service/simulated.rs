//! In-process services that stand in for a remote counter API.

use std::time::Duration;

use async_trait::async_trait;

use super::{CounterService, ServiceError};

/// Value returned by [`SimulatedCounterService::default`].
pub const DEFAULT_FETCH_VALUE: i64 = 42;

/// Simulated request latency in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 500;

/// Simulated request latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(DEFAULT_LATENCY_MS);

/// Always succeeds, returning a fixed value after `latency`.
#[derive(Debug, Clone)]
pub struct SimulatedCounterService {
    value: i64,
    latency: Duration,
}

impl SimulatedCounterService {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for SimulatedCounterService {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_VALUE)
    }
}

#[async_trait]
impl CounterService for SimulatedCounterService {
    async fn fetch_count(&self) -> Result<i64, ServiceError> {
        tokio::time::sleep(self.latency).await;
        Ok(self.value)
    }

    async fn update_count(&self, new_value: i64) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(new_value, "Simulated count update accepted");
        Ok(())
    }
}

/// Fails every fetch with `error` after `latency`.
///
/// Updates still succeed; only the read path is broken.
#[derive(Debug, Clone)]
pub struct FailingCounterService {
    error: ServiceError,
    latency: Duration,
}

impl FailingCounterService {
    pub fn new() -> Self {
        Self {
            error: ServiceError::InvalidResponse,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_error(mut self, error: ServiceError) -> Self {
        self.error = error;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for FailingCounterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterService for FailingCounterService {
    async fn fetch_count(&self) -> Result<i64, ServiceError> {
        tokio::time::sleep(self.latency).await;
        Err(self.error.clone())
    }

    async fn update_count(&self, new_value: i64) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(new_value, "Simulated count update accepted");
        Ok(())
    }
}
