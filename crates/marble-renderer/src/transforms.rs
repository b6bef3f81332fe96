//! Affine and projective transform helpers.
//!
//! Thin wrappers over `glam` that take degrees where people think in
//! degrees, plus a fixed-width matrix printer and the walkthrough printed by
//! `marble transforms`. Matrices are column-major; `a * b` applies `b`
//! first.

use glam::{Mat4, Vec3, Vec4};
use std::fmt::Write as _;

/// Translation by `offset`. Moves points (`w = 1`), leaves directions (`w = 0`).
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Non-uniform scale.
pub fn scale(amount: Vec3) -> Mat4 {
    Mat4::from_scale(amount)
}

/// Rotation of `angle_degrees` about `axis`. The axis need not be unit length.
pub fn rotation(angle_degrees: f32, axis: Vec3) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), angle_degrees.to_radians())
}

/// Model matrix applying scale, then rotation, then translation.
pub fn compose(translation: &Mat4, rotation: &Mat4, scale: &Mat4) -> Mat4 {
    *translation * *rotation * *scale
}

/// Project a clip-space position to normalized device coordinates.
pub fn perspective_divide(clip: Vec4) -> Vec4 {
    clip / clip.w
}

/// Mirror `incident` about the plane with unit `normal`.
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Refract `incident` through a surface with unit `normal` and ratio of
/// indices of refraction `eta`. Returns zero on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Vec3 {
    let cos_i = normal.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * incident - (eta * cos_i + k.sqrt()) * normal
    }
}

/// Render a matrix row by row, ten characters per cell, four decimals.
pub fn format_matrix(m: &Mat4) -> String {
    let mut out = String::new();
    for row in 0..4 {
        let cells: Vec<String> = (0..4)
            .map(|col| format!("{:>10.4}", m.col(col)[row]))
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

fn format_vec4(v: Vec4) -> String {
    format!("vec4({:.3}, {:.3}, {:.3}, {:.3})", v.x, v.y, v.z, v.w)
}

fn format_vec3(v: Vec3) -> String {
    format!("vec3({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn heading(out: &mut String, title: &str) {
    let rule = "-".repeat(title.len());
    let _ = writeln!(out, "\n{rule}\n{title}\n{rule}");
}

/// The transform walkthrough: each basic transform applied to a point and a
/// direction, their composition, a full model-view-projection, and the
/// common vector operations.
pub fn walkthrough() -> String {
    let mut out = String::new();

    let point_and_direction = |out: &mut String, m: &Mat4, xyz: Vec3| {
        let _ = writeln!(out, "{}", format_vec4(*m * xyz.extend(1.0)));
        let _ = writeln!(out, "{}", format_vec4(*m * xyz.extend(0.0)));
    };

    heading(&mut out, "TRANSLATION MATRIX");
    let t = translation(Vec3::splat(10.0));
    out.push_str(&format_matrix(&t));
    point_and_direction(&mut out, &t, Vec3::splat(10.0));

    heading(&mut out, "SCALE MATRIX");
    let s = scale(Vec3::splat(2.0));
    out.push_str(&format_matrix(&s));
    point_and_direction(&mut out, &s, Vec3::new(100.0, 100.0, 0.0));

    heading(&mut out, "ROTATION MATRIX");
    let r = rotation(90.0, Vec3::Z);
    out.push_str(&format_matrix(&r));
    point_and_direction(&mut out, &r, Vec3::new(100.0, 0.0, 0.0));

    heading(&mut out, "COMPOSED MATRIX");
    let model = compose(
        &translation(Vec3::new(0.0, 10.0, 0.0)),
        &rotation(45.0, Vec3::Z),
        &scale(Vec3::new(2.0, 2.0, 0.0)),
    );
    let _ = writeln!(out, "Model Matrix:");
    out.push_str(&format_matrix(&model));
    point_and_direction(&mut out, &model, Vec3::new(1.0, 1.0, 0.0));

    heading(&mut out, "MODEL VIEW PROJECTION");
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh_gl(45f32.to_radians(), 800.0 / 600.0, 1.0, 100_000.0);
    let mvp = projection * view * Mat4::IDENTITY;
    let _ = writeln!(out, "View Matrix:");
    out.push_str(&format_matrix(&view));
    let _ = writeln!(out, "Projection Matrix:");
    out.push_str(&format_matrix(&projection));
    let _ = writeln!(out, "Model View Projection:");
    out.push_str(&format_matrix(&mvp));
    let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let _ = writeln!(out, "{}", format_vec4(clip));
    let _ = writeln!(out, "{}", format_vec4(perspective_divide(clip)));

    heading(&mut out, "VECTOR OPERATIONS");
    let p0 = Vec3::new(10.0, 10.0, 0.0);
    let p1 = Vec3::new(10.0, 10.0, 10.0);
    let n = p0.normalize();
    let rows = [
        ("sum", format_vec3(p0 + p1)),
        ("difference", format_vec3(p0 - p1)),
        ("scaled by 5", format_vec3(p0 * 5.0)),
        ("component product", format_vec3(p0 * p1)),
        ("component quotient", format_vec3(p0 / p1)),
        ("length", format!("{:.3}", p0.length())),
        ("normalized", format_vec3(n)),
        ("dot", format!("{:.3}", p0.dot(p1))),
        ("cross", format_vec3(p0.cross(p1))),
        ("distance", format!("{:.3}", p0.distance(p1))),
        ("refract", format_vec3(refract(p0, n, 1.0))),
        ("reflect", format_vec3(reflect(p0, n))),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<20}{value}");
    }

    out
}

// =============================================================================
// Tests
// =============================================================================
