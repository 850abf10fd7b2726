//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A dragged window moved
    Moved {
        /// Window that moved
        #[serde(rename = "windowId")]
        window_id: WindowId,
        /// New left offset in viewport pixels
        x: f32,
        /// New top offset in viewport pixels
        y: f32,
        /// The page must cancel the platform default (touch scroll/zoom)
        #[serde(rename = "preventDefault")]
        prevent_default: bool,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Moved { .. })
    }

    /// Whether the page should call `preventDefault` on the source event
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputResult::Moved { prevent_default: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_serializes_for_the_page() {
        let result = InputResult::Moved {
            window_id: WindowId::from("Contact-7"),
            x: 10.0,
            y: 20.0,
            prevent_default: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "moved");
        assert_eq!(json["windowId"], "Contact-7");
        assert_eq!(json["preventDefault"], true);
        assert!(result.is_handled());
        assert!(result.prevents_default());
    }

    #[test]
    fn test_unhandled() {
        let json = serde_json::to_value(InputResult::Unhandled).unwrap();
        assert_eq!(json["type"], "unhandled");
        assert!(!InputResult::Unhandled.is_handled());
        assert!(!InputResult::Handled.prevents_default());
    }
}
