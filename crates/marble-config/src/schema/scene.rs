//! Scene configuration types: sphere mesh, light, and model transform.

use serde::{Deserialize, Serialize};

/// Sphere mesh generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Samples per parametric axis (valid range: 2-2048).
    pub resolution: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self { resolution: 100 }
    }
}

/// Directional light in world space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub direction: [f32; 3],
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [0.0, 0.0, -1.0],
            intensity: 1.0,
        }
    }
}

/// Model transform applied to the sphere before the camera.
///
/// The generated sphere has its poles on Z; tilting it 90 degrees about X
/// stands the poles up along Y.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub rotation_x_degrees: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            rotation_x_degrees: 90.0,
        }
    }
}
