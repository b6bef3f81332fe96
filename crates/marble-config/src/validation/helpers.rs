//! Shared validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is rejected.
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not strictly greater than `bound`.
pub(crate) fn validate_greater_than(errors: &mut Vec<String>, name: &str, value: f32, bound: f32) {
    if value.is_nan() || value <= bound {
        errors.push(format!("{name} = {value} must be greater than {bound}"));
    }
}

/// Push an error if a direction vector has (near) zero length.
pub(crate) fn validate_nonzero_vec3(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    let length_sq: f32 = value.iter().map(|c| c * c).sum();
    if length_sq.is_nan() || length_sq <= 1e-12 {
        errors.push(format!("{name} = {value:?} must be a non-zero vector"));
    }
}
