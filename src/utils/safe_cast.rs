//! Safe casting utilities for display-space pixel coordinates

/// Clamp and convert f64 to i32 for pixel coordinates
///
/// Non-finite values collapse to `min`; everything else is clamped into
/// `[min, max]` before truncation so the conversion can never wrap.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Clamping bounds are approximate
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i32_clamp(value: f64, min: i32, max: i32) -> i32 {
    // Ensure min <= max
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(f64::from(min), f64::from(max));

    let result = clamped as i32;
    result.clamp(min, max)
}
