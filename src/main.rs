use anyhow::Context;
use clap::Parser;
use shopfront::cli::Cli;
use shopfront::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = cli.resolve_config().context("Failed to load configuration")?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(config = %source, "Loaded config");
    tracing::info!(log = %log_path.display(), premium = config.shop.user_premium, "Starting shopfront");

    shopfront::ui::run(&config).context("Terminal UI failed")?;
    Ok(())
}
