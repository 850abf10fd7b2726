//! Window session data structure

use serde::Serialize;

use crate::math::{Size, Vec2};
use super::{WindowId, WindowKind};

/// One open floating window
///
/// `content` is whatever the caller supplied when opening the window; the
/// manager never looks inside it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSession<C> {
    /// Unique identifier
    pub id: WindowId,
    /// Logical kind, used for deduplication
    pub kind: WindowKind,
    /// Top-left offset relative to the viewport
    pub position: Vec2,
    /// Window size
    pub size: Size,
    /// Stacking order (higher = on top)
    pub z_index: u64,
    /// Opaque renderable payload
    pub content: C,
}

impl<C> WindowSession<C> {
    /// Check whether a viewport point falls inside this window
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size.width
            && point.y >= self.position.y
            && point.y < self.position.y + self.size.height
    }
}
