//! Configuration schema types for Marble.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the demo was tuned with.

mod camera;
mod scene;
mod system;
mod window;

pub use camera::*;
pub use scene::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Marble.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MarbleConfig {
    pub window: WindowConfig,
    pub sphere: SphereConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
