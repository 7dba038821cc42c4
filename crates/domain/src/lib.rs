//! dnsf domain layer
pub mod config;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, ZoneConfig};
pub use errors::ZoneError;
