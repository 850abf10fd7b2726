//! Drag state for an active gesture

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::window::WindowId;

/// Where a pointer gesture comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    /// Mouse or pen
    #[default]
    Mouse,
    /// Single-finger touch
    Touch,
}

impl PointerSource {
    /// Touch moves must suppress the platform's scroll/zoom while dragging
    #[inline]
    pub fn needs_default_suppression(self) -> bool {
        matches!(self, PointerSource::Touch)
    }
}

impl FromStr for PointerSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mouse" | "pen" => Ok(PointerSource::Mouse),
            "touch" => Ok(PointerSource::Touch),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PointerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerSource::Mouse => f.write_str("mouse"),
            PointerSource::Touch => f.write_str("touch"),
        }
    }
}

/// State of the gesture currently moving a window
///
/// Only exists between a press and its matching release.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from the window origin to the pointer, captured at press
    pub anchor_offset: Vec2,
    /// Input device that started the gesture
    pub source: PointerSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_source_parse() {
        assert_eq!("mouse".parse::<PointerSource>(), Ok(PointerSource::Mouse));
        assert_eq!("pen".parse::<PointerSource>(), Ok(PointerSource::Mouse));
        assert_eq!("touch".parse::<PointerSource>(), Ok(PointerSource::Touch));
        assert!("stylus".parse::<PointerSource>().is_err());
    }

    #[test]
    fn test_only_touch_suppresses_default() {
        assert!(PointerSource::Touch.needs_default_suppression());
        assert!(!PointerSource::Mouse.needs_default_suppression());
    }

    #[test]
    fn test_drag_state_preserves_anchor() {
        let state = DragState {
            window_id: WindowId::from("About-1"),
            anchor_offset: Vec2::new(15.5, 25.5),
            source: PointerSource::Touch,
        };

        let cloned = state.clone();
        assert_eq!(cloned.window_id.as_str(), "About-1");
        assert!((cloned.anchor_offset.x - 15.5).abs() < 0.001);
        assert!((cloned.anchor_offset.y - 25.5).abs() < 0.001);
    }
}
