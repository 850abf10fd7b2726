//! Pointer input module
//!
//! Provides the single-gesture drag tracker used to move floating windows.
//! Mouse and touch gestures share the same clamping; only the event source
//! differs.

mod drag;
mod result;
mod tracker;

pub use drag::{DragState, PointerSource};
pub use result::InputResult;
pub use tracker::PointerDragTracker;

use crate::math::{clamp_axis, Size, Vec2};

/// Clamp a proposed surface origin so the whole surface stays inside the viewport
///
/// Each axis is clamped independently to `[0, viewport - surface]`. A surface
/// larger than the viewport, or a degenerate viewport, pins that axis to 0.
pub fn clamp_to_viewport(proposed: Vec2, viewport: Size, surface: Size) -> Vec2 {
    let slack = viewport.slack(surface);
    Vec2::new(clamp_axis(proposed.x, slack.x), clamp_axis(proposed.y, slack.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_inside_viewport_unchanged() {
        let pos = clamp_to_viewport(
            Vec2::new(120.0, 80.0),
            Size::new(1000.0, 800.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(pos, Vec2::new(120.0, 80.0));
    }

    #[test]
    fn test_clamp_past_right_and_bottom_edges() {
        let pos = clamp_to_viewport(
            Vec2::new(950.0, 790.0),
            Size::new(1000.0, 800.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(pos, Vec2::new(700.0, 500.0));
    }

    #[test]
    fn test_clamp_negative_to_origin() {
        let pos = clamp_to_viewport(
            Vec2::new(-40.0, -1.0),
            Size::new(1000.0, 800.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_zero_viewport_pins_to_origin() {
        let pos = clamp_to_viewport(Vec2::new(25.0, 60.0), Size::ZERO, Size::new(300.0, 300.0));
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_surface_larger_than_viewport_pins_axis() {
        let pos = clamp_to_viewport(
            Vec2::new(50.0, 50.0),
            Size::new(320.0, 800.0),
            Size::new(400.0, 300.0),
        );
        assert_eq!(pos, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_nan_input_lands_on_zero() {
        let pos = clamp_to_viewport(
            Vec2::new(f32::NAN, 10.0),
            Size::new(f32::NAN, 800.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(pos, Vec2::new(0.0, 10.0));
    }

    proptest! {
        #[test]
        fn clamped_position_stays_in_bounds(
            px in -5000.0f32..5000.0,
            py in -5000.0f32..5000.0,
            vw in 0.0f32..4000.0,
            vh in 0.0f32..4000.0,
            sw in 0.0f32..2000.0,
            sh in 0.0f32..2000.0,
        ) {
            let pos = clamp_to_viewport(Vec2::new(px, py), Size::new(vw, vh), Size::new(sw, sh));
            prop_assert!(pos.x >= 0.0);
            prop_assert!(pos.y >= 0.0);
            prop_assert!(pos.x <= (vw - sw).max(0.0));
            prop_assert!(pos.y <= (vh - sh).max(0.0));
        }

        #[test]
        fn clamping_is_idempotent(
            px in -5000.0f32..5000.0,
            py in -5000.0f32..5000.0,
            vw in 0.0f32..4000.0,
            vh in 0.0f32..4000.0,
            sw in 0.0f32..2000.0,
            sh in 0.0f32..2000.0,
        ) {
            let viewport = Size::new(vw, vh);
            let surface = Size::new(sw, sh);
            let once = clamp_to_viewport(Vec2::new(px, py), viewport, surface);
            let twice = clamp_to_viewport(once, viewport, surface);
            prop_assert_eq!(once, twice);
        }
    }
}
