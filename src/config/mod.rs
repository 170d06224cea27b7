mod loader;
mod types;

pub use loader::{ConfigError, ConfigSource};
pub use types::{Config, LoggingConfig, ShopSettings};
