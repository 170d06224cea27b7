use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shop: ShopSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Product catalog. Falls back to the built-in product when absent.
    #[serde(default)]
    pub product: Product,
}

/// Shop-wide settings owned by the root application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Whether the current user has a premium membership (free shipping).
    #[serde(default)]
    pub user_premium: bool,
    /// Flat shipping fee charged to non-premium users (default: 2.99).
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,
    /// Currency symbol appended to amounts (default: "€").
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_shipping_fee() -> f64 {
    2.99
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            user_premium: false,
            shipping_fee: default_shipping_fee(),
            currency: default_currency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
