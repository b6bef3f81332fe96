//! Marble configuration system.
//!
//! Provides TOML-based configuration for the window, sphere mesh, camera,
//! light, and logging. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marble_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MarbleConfig, CONFIG_SCHEMA_VERSION};

use marble_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<MarbleConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
///
/// Unlike [`load_config`], a missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<MarbleConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MarbleConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
