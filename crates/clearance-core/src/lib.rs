pub mod app_config;
pub mod config;
pub mod feed;
pub mod products;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use feed::{ClearanceFeed, FeedTab, FeedTabs, CLEARANCE_TAB_NAME};
pub use products::Product;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
