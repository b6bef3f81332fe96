//! Per-frame shader uniforms derived from the camera, model, and light.

use glam::{Mat4, Vec3};
use marble_config::schema::LightConfig;

use crate::camera::FlyCamera;

/// A directional light in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            // Pointing into the screen.
            direction: Vec3::NEG_Z,
            intensity: 1.0,
        }
    }
}

impl From<&LightConfig> for DirectionalLight {
    fn from(config: &LightConfig) -> Self {
        Self {
            direction: Vec3::from_array(config.direction),
            intensity: config.intensity,
        }
    }
}

/// Everything the lit, textured sphere shader needs for one frame.
///
/// Matrices are column-major. Uploaded as a single uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub model_view: [f32; 16],
    /// Inverse-transpose of `model_view`, for transforming normals.
    pub normal_matrix: [f32; 16],
    pub model_view_projection: [f32; 16],
    /// Light direction in view space (`w = 0`).
    pub light_direction: [f32; 4],
    pub light_intensity: f32,
    /// Seconds since start, for animated effects such as cloud drift.
    pub time: f32,
    pub _padding: [f32; 2],
}

impl FrameUniforms {
    pub fn compute(camera: &FlyCamera, model: &Mat4, light: &DirectionalLight, time: f32) -> Self {
        let view = camera.view();
        let model_view = view * *model;
        let normal_matrix = model_view.inverse().transpose();
        let model_view_projection = camera.view_projection() * *model;
        let light_direction = view * light.direction.extend(0.0);

        Self {
            model_view: model_view.to_cols_array(),
            normal_matrix: normal_matrix.to_cols_array(),
            model_view_projection: model_view_projection.to_cols_array(),
            light_direction: light_direction.to_array(),
            light_intensity: light.intensity,
            time,
            _padding: [0.0; 2],
        }
    }
}

/// Model matrix tilting the sphere about X so its poles stand along Y.
pub fn sphere_model_matrix(rotation_x_degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(rotation_x_degrees.to_radians())
}

// =============================================================================
// Tests
// =============================================================================
