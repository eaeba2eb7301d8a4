//! Counter data source.
//!
//! The controller only ever talks to [`CounterService`]. A real deployment
//! would bind it to an HTTP client; the two simulated variants here model
//! request latency so UI state can be exercised under success and failure.

mod error;
mod simulated;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{ServiceConfig, ServiceKind};

pub use error::ServiceError;
pub use simulated::{
    FailingCounterService, SimulatedCounterService, DEFAULT_FETCH_VALUE, DEFAULT_LATENCY,
    DEFAULT_LATENCY_MS,
};

/// Remote counter capability.
#[async_trait]
pub trait CounterService: Send + Sync {
    /// Fetch the current count from the remote side.
    async fn fetch_count(&self) -> Result<i64, ServiceError>;

    /// Submit an updated count to the remote side.
    async fn update_count(&self, new_value: i64) -> Result<(), ServiceError>;
}

/// Build the service variant selected by configuration.
pub fn build_service(config: &ServiceConfig) -> Arc<dyn CounterService> {
    let latency = Duration::from_millis(config.latency_ms);
    tracing::info!(
        kind = ?config.kind,
        fetch_value = config.fetch_value,
        latency_ms = config.latency_ms,
        "Counter service selected"
    );
    match config.kind {
        ServiceKind::Simulated => {
            Arc::new(SimulatedCounterService::new(config.fetch_value).with_latency(latency))
        }
        ServiceKind::Failing => Arc::new(FailingCounterService::new().with_latency(latency)),
    }
}
