//! Geometry primitives shared by drag tracking and window layout

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;

/// Clamp a single axis to `[0, max]`.
///
/// A negative or NaN upper bound collapses to zero, and a NaN value lands on
/// zero as well, so the result is always a finite, non-negative number.
#[inline]
pub fn clamp_axis(value: f32, max: f32) -> f32 {
    let upper = if max.is_finite() && max > 0.0 { max } else { 0.0 };
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, upper)
}
