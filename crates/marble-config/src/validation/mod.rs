//! Full configuration validation.
//!
//! Validates numeric ranges and non-degenerate vectors. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod camera;
mod helpers;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::MarbleConfig;
use marble_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MarbleConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_window(&mut errors, config);
    scene::validate_sphere(&mut errors, config);
    scene::validate_light(&mut errors, config);
    camera::validate_camera(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
