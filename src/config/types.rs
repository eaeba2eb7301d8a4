use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::service::{DEFAULT_FETCH_VALUE, DEFAULT_LATENCY_MS};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which counter service backs the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Succeeds with `fetch_value` after the simulated latency.
    #[default]
    Simulated,
    /// Fails every fetch with an invalid-response error.
    Failing,
}

/// Counter service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub kind: ServiceKind,
    /// Value returned by the simulated service (default: 42).
    #[serde(default = "default_fetch_value")]
    pub fetch_value: i64,
    /// Simulated request latency in milliseconds (default: 500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_fetch_value() -> i64 {
    DEFAULT_FETCH_VALUE
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            kind: ServiceKind::default(),
            fetch_value: default_fetch_value(),
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
