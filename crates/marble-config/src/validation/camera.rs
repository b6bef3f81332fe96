//! Camera validation: projection parameters and basis vectors.

use crate::schema::MarbleConfig;

use super::helpers::{validate_greater_than, validate_nonzero_vec3, validate_range_f32};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &MarbleConfig) {
    let camera = &config.camera;

    validate_nonzero_vec3(errors, "camera.direction", camera.direction);
    validate_nonzero_vec3(errors, "camera.up", camera.up);

    let [dx, dy, dz] = camera.direction;
    let [ux, uy, uz] = camera.up;
    let cross = [dy * uz - dz * uy, dz * ux - dx * uz, dx * uy - dy * ux];
    if cross.iter().map(|c| c * c).sum::<f32>() <= 1e-12 {
        errors.push("camera.direction must not be parallel to camera.up".into());
    }

    validate_range_f32(
        errors,
        "camera.field_of_view",
        camera.field_of_view,
        1.0,
        179.0,
    );
    validate_greater_than(errors, "camera.near", camera.near, 0.0);
    validate_greater_than(errors, "camera.far", camera.far, camera.near);
    validate_range_f32(errors, "camera.speed", camera.speed, 0.0, f32::MAX);
    validate_range_f32(
        errors,
        "camera.sensitivity",
        camera.sensitivity,
        0.0,
        f32::MAX,
    );
}
