pub mod config;
pub mod logging;

pub use config::{ApiConfig, AppConfig, CliArgs, LoggingConfig, SeedConfig, ServerConfig};
