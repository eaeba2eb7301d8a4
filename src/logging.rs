use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV_VAR: &str = "COUNTER_MVI_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber if `COUNTER_MVI_LOG` is set.
///
/// Nothing is logged otherwise: the screen owns stdout. Each run writes to
/// its own `{path}.{timestamp}.{pid}` so concurrent instances don't clash.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };

    let path = unique_log_path(Path::new(&base));
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}

fn unique_log_path(base: &Path) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!(
        "{}.{}.{}",
        base.display(),
        timestamp,
        std::process::id()
    ))
}
