//! Geometry inputs for opening windows

use crate::math::{Size, Vec2};

/// Caller-supplied geometry overrides
///
/// Any field left as `None` falls back to the layout table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Initial position (None = layout table strategy)
    pub position: Option<Vec2>,
    /// Initial size (None = per-kind default)
    pub size: Option<Size>,
}

impl Geometry {
    /// Override the position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Vec2::new(x, y));
        self
    }

    /// Override the size
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }
}

/// Environment sampled once when a window is opened
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Creation timestamp in milliseconds, used for the window id
    pub now_ms: u64,
    /// Current viewport size
    pub viewport: Size,
    /// Two uniform samples in `[0, 1)` for pseudo-random offsets
    pub jitter: Vec2,
}

impl Placement {
    /// Placement with no jitter, mostly useful in tests
    pub fn fixed(now_ms: u64, viewport: Size) -> Self {
        Self {
            now_ms,
            viewport,
            jitter: Vec2::ZERO,
        }
    }
}
