//! Free-flying camera with a look basis and perspective projection.

use glam::{Mat3, Mat4, Vec3};
use marble_config::schema::CameraConfig;

/// Viewer position and orientation plus projection parameters.
///
/// `direction` and `up` are kept as-is between updates; they are only
/// normalized where an operation needs unit vectors. Rotations in
/// [`FlyCamera::look`] are not re-orthonormalized, so long sessions can
/// accumulate a small skew between the two.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub location: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    /// Distance moved per unit of movement input.
    pub speed: f32,
    /// Degrees of rotation per unit of look input.
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            location: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            field_of_view: 45f32.to_radians(),
            aspect_ratio: 800.0 / 600.0,
            near: 0.01,
            far: 1000.0,
            speed: 5.0,
            sensitivity: 0.1,
        }
    }
}

impl FlyCamera {
    /// Build a camera from config for a `width` x `height` viewport.
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            location: Vec3::from_array(config.location),
            direction: Vec3::from_array(config.direction),
            up: Vec3::from_array(config.up),
            field_of_view: config.field_of_view.to_radians(),
            aspect_ratio: 1.0,
            near: config.near,
            far: config.far,
            speed: config.speed,
            sensitivity: config.sensitivity,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Move along the view direction. Negative `amount` moves backwards.
    pub fn move_forward(&mut self, amount: f32) {
        self.location += self.direction.normalize() * amount * self.speed;
    }

    /// Strafe along the right vector. Negative `amount` moves left.
    pub fn move_right(&mut self, amount: f32) {
        self.location += self.right() * amount * self.speed;
    }

    /// Rotate the view by `delta_yaw` / `delta_pitch` input units.
    ///
    /// Pitch turns about the right vector and tilts both `up` and
    /// `direction`; yaw then turns `direction` about the `up` vector the
    /// camera had before this call. Positive yaw turns left, positive pitch
    /// looks up.
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let yaw = (delta_yaw * self.sensitivity).to_radians();
        let pitch = (delta_pitch * self.sensitivity).to_radians();

        let right = self.right();
        let yaw_rotation = Mat3::from_axis_angle(self.up.normalize(), yaw);
        let pitch_rotation = Mat3::from_axis_angle(right, pitch);

        self.up = pitch_rotation * self.up;
        self.direction = yaw_rotation * (pitch_rotation * self.direction);
    }

    /// Unit vector pointing to the camera's right.
    pub fn right(&self) -> Vec3 {
        self.direction.cross(self.up).normalize()
    }

    /// Update the aspect ratio after a framebuffer resize.
    ///
    /// A zero height (minimized window) leaves the aspect ratio unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// Right-handed look-at transform.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.location, self.location + self.direction, self.up)
    }

    /// Right-handed perspective projection with OpenGL `[-1, 1]` clip depth.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.field_of_view, self.aspect_ratio, self.near, self.far)
    }

    /// `projection * view`; multiply by a model matrix on the right for MVP.
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

// =============================================================================
// Tests
// =============================================================================
