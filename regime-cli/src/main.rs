use anyhow::Context;
use clap::Parser;
use tracing::debug;

use regime_cli::app;
use regime_cli::cli::Cli;
use regime_cli::config::AppConfig;
use regime_cli::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::resolve(cli.config.as_deref()).context("failed to load config")?;
    cli.apply_overrides(&mut config);

    init_logging(&config.logging.level, config.logging.file.as_deref())?;
    debug!(database = ?config.database, model = %config.advisor.model, "configuration resolved");

    let output = app::run(cli, &config).await?;
    println!("{output}");

    Ok(())
}
