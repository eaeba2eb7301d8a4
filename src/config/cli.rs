use std::path::PathBuf;

use clap::Parser;

use crate::config::types::{Config, ServiceKind};

/// Command-line flags. Anything set here wins over the config file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "counter-mvi", version, about = "Single-screen MVI counter")]
pub struct Cli {
    /// Path to config file (default: ~/.config/counter-mvi/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Counter service to use
    #[arg(long, value_enum, value_name = "KIND")]
    pub service: Option<ServiceKind>,

    /// Value returned by the simulated service
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub fetch_value: Option<i64>,

    /// Simulated request latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}

impl Cli {
    /// Config file to load: `--config` or the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply CLI overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(kind) = self.service {
            config.service.kind = kind;
        }
        if let Some(value) = self.fetch_value {
            config.service.fetch_value = value;
        }
        if let Some(latency) = self.latency_ms {
            config.service.latency_ms = latency;
        }
        config
    }
}
