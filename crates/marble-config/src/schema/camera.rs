//! Fly camera configuration types.

use serde::{Deserialize, Serialize};

/// Starting state and tuning of the fly camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub location: [f32; 3],
    pub direction: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees (valid range: 1-179).
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second of held movement.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse motion.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            location: [0.0, 0.0, 5.0],
            direction: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            field_of_view: 45.0,
            near: 0.01,
            far: 1000.0,
            speed: 5.0,
            sensitivity: 0.1,
        }
    }
}
