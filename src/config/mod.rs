mod cli;
mod loader;
mod types;

pub use cli::Cli;
pub use loader::ConfigError;
pub use types::{Config, ServiceConfig, ServiceKind, UiConfig};
