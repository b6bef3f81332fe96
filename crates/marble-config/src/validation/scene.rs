//! Window, sphere, and light validation.

use crate::schema::MarbleConfig;

use super::helpers::{validate_nonzero_vec3, validate_range, validate_range_f32};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MarbleConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &MarbleConfig) {
    validate_range(
        errors,
        "sphere.resolution",
        config.sphere.resolution,
        2,
        2048,
    );
}

pub(crate) fn validate_light(errors: &mut Vec<String>, config: &MarbleConfig) {
    validate_nonzero_vec3(errors, "light.direction", config.light.direction);
    validate_range_f32(
        errors,
        "light.intensity",
        config.light.intensity,
        0.0,
        10.0,
    );
}
