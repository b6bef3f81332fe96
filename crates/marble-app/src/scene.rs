//! The per-window scene: mesh, camera, input context, and light.
//!
//! A windowing backend pushes events onto `input` and calls
//! [`Scene::frame`] once per redraw; the returned uniforms and the mesh
//! buffers are all it needs to draw.

use glam::Mat4;
use marble_config::MarbleConfig;
use marble_renderer::frame::sphere_model_matrix;
use marble_renderer::{
    CameraController, DirectionalLight, FlyCamera, FrameClock, FrameUniforms, InputQueue,
    SphereMesh,
};
use tracing::{debug, info};

pub struct Scene {
    pub mesh: SphereMesh,
    pub camera: FlyCamera,
    pub controller: CameraController,
    pub input: InputQueue,
    pub clock: FrameClock,
    pub light: DirectionalLight,
    pub model: Mat4,
}

impl Scene {
    /// Build the scene from config, with the clock starting at `now`.
    pub fn from_config(config: &MarbleConfig, now: f64) -> marble_common::Result<Self> {
        let mesh = SphereMesh::generate(config.sphere.resolution)?;
        info!(
            resolution = mesh.resolution(),
            vertices = mesh.vertices().len(),
            triangles = mesh.triangles().len(),
            "sphere mesh ready"
        );

        let camera = FlyCamera::from_config(&config.camera, config.window.width, config.window.height);

        Ok(Self {
            mesh,
            camera,
            controller: CameraController::new(),
            input: InputQueue::new(),
            clock: FrameClock::new(now),
            light: DirectionalLight::from(&config.light),
            model: sphere_model_matrix(config.model.rotation_x_degrees),
        })
    }

    /// Advance one frame at timestamp `now` and return its uniforms.
    ///
    /// Queued input is applied only when time has moved forward; otherwise
    /// it stays queued for the next frame.
    pub fn frame(&mut self, now: f64) -> FrameUniforms {
        if let Some(delta) = self.clock.tick(now) {
            self.controller
                .update(&mut self.camera, &mut self.input, delta);
            debug!(
                location = ?self.camera.location,
                direction = ?self.camera.direction,
                up = ?self.camera.up,
                delta,
                "camera updated"
            );
        }

        FrameUniforms::compute(
            &self.camera,
            &self.model,
            &self.light,
            self.clock.elapsed() as f32,
        )
    }

    pub fn should_close(&self) -> bool {
        self.controller.close_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use marble_renderer::{InputEvent, Key};

    fn small_config() -> MarbleConfig {
        let mut config = MarbleConfig::default();
        config.sphere.resolution = 8;
        config
    }

    #[test]
    fn scene_builds_from_default_config() {
        let scene = Scene::from_config(&MarbleConfig::default(), 0.0).unwrap();
        assert_eq!(scene.mesh.vertices().len(), 100 * 100);
        assert_eq!(scene.camera.location, Vec3::new(0.0, 0.0, 5.0));
        assert!(!scene.should_close());
    }

    #[test]
    fn invalid_resolution_fails_fast() {
        let mut config = MarbleConfig::default();
        config.sphere.resolution = 1;
        let err = Scene::from_config(&config, 0.0).err().unwrap();
        assert!(matches!(err, marble_common::MarbleError::Mesh(_)));
    }

    #[test]
    fn held_key_moves_camera_across_frames() {
        let mut scene = Scene::from_config(&small_config(), 0.0).unwrap();
        scene.input.push(InputEvent::KeyPressed { key: Key::W });
        scene.frame(0.1);
        scene.frame(0.2);
        // 0.2 s at 5 units/s toward -Z.
        assert!((scene.camera.location - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-4);
    }

    #[test]
    fn stalled_clock_keeps_input_queued() {
        let mut scene = Scene::from_config(&small_config(), 1.0).unwrap();
        scene.input.push(InputEvent::KeyPressed { key: Key::Escape });
        scene.frame(1.0);
        assert!(!scene.should_close());
        assert_eq!(scene.input.len(), 1);
        scene.frame(1.5);
        assert!(scene.should_close());
    }

    #[test]
    fn frame_uniforms_include_model_matrix() {
        let mut scene = Scene::from_config(&small_config(), 0.0).unwrap();
        let uniforms = scene.frame(0.5);
        let expected = scene.camera.view_projection() * scene.model;
        let got = Mat4::from_cols_array(&uniforms.model_view_projection);
        assert!(got.abs_diff_eq(expected, 1e-5));
        assert!((uniforms.time - 0.5).abs() < 1e-6);
    }
}
