use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, ConfigSource};

#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about = "Terminal product card with cart and reviews")]
pub struct Cli {
    /// Path to a config file (default: ~/.config/shopfront/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start as a premium member (free shipping)
    #[arg(long)]
    pub premium: bool,

    /// Log filter used when RUST_LOG is not set (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loads the config named on the command line (or the default one) and
    /// applies command-line overrides on top of it. Also returns where the
    /// config came from so it can be logged once tracing is up.
    pub fn resolve_config(&self) -> Result<(Config, ConfigSource), ConfigError> {
        let (mut config, source) = match &self.config {
            Some(path) => (Config::load_from(path)?, ConfigSource::File(path.clone())),
            None => Config::load()?,
        };

        if self.premium {
            config.shop.user_premium = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        Ok((config, source))
    }
}
