//! Logger configuration
//!
//! Sources, in the order the plugin usually layers them:
//! - `LoggerConfig::default()`: console only, clear on start
//! - YAML file (`<config_dir>/archimede_converter/logger.yaml`)
//! - `M3U_CONVERTER_*` environment variables

mod error;
mod logger;

pub use error::{ConfigError, ConfigResult};
pub use logger::{default_log_path, LoggerConfig, ENV_CLEAR_LOG, ENV_LOG_FILE, ENV_LOG_LEVEL};
