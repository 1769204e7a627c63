//! Configuration loading.
//!
//! mdtag reads a versioned TOML file with named profiles, one per vault.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{DailyConfig, LoggingConfig, OpenConfig, OpenTarget, ResolvedConfig};
