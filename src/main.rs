use anyhow::Context;
use clap::Parser;
use counter_mvi::config::{Cli, Config};
use counter_mvi::{logging, service, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config_path = cli.config_path();
    let config = Config::load_from(&config_path).context("Failed to load configuration")?;
    let config = cli.apply(config);

    let service = service::build_service(&config.service);
    ui::runtime::run(&config, service)
        .await
        .context("Counter screen failed")?;

    tracing::info!("Counter screen closed");
    Ok(())
}
