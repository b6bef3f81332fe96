//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = MarbleConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_resolution_too_small() {
    let mut config = MarbleConfig::default();
    config.sphere.resolution = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sphere.resolution"));
}

#[test]
fn catches_zero_window_height() {
    let mut config = MarbleConfig::default();
    config.window.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn catches_field_of_view_out_of_range() {
    let mut config = MarbleConfig::default();
    config.camera.field_of_view = 180.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.field_of_view"));
}

#[test]
fn catches_far_not_beyond_near() {
    let mut config = MarbleConfig::default();
    config.camera.near = 10.0;
    config.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn catches_non_positive_near() {
    let mut config = MarbleConfig::default();
    config.camera.near = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.near"));
}

#[test]
fn catches_direction_parallel_to_up() {
    let mut config = MarbleConfig::default();
    config.camera.direction = [0.0, 2.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("parallel"));
}

#[test]
fn catches_zero_light_direction() {
    let mut config = MarbleConfig::default();
    config.light.direction = [0.0, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("light.direction"));
}

#[test]
fn catches_negative_speed() {
    let mut config = MarbleConfig::default();
    config.camera.speed = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.speed"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MarbleConfig::default();
    config.sphere.resolution = 0;
    config.light.intensity = 50.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sphere.resolution"));
    assert!(err.contains("light.intensity"));
    assert!(err.contains("; "));
}
