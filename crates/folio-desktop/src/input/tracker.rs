//! Pointer drag tracker state machine

use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::{clamp_to_viewport, DragState, PointerSource};

/// Tracks the one drag gesture honored at a time
///
/// The first gesture owns the tracker until it is released; a second press
/// while a drag is active is ignored.
#[derive(Debug, Default)]
pub struct PointerDragTracker {
    /// Current drag state
    drag: Option<DragState>,
}

impl PointerDragTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window owned by the active gesture
    #[inline]
    pub fn target(&self) -> Option<&WindowId> {
        self.drag.as_ref().map(|d| &d.window_id)
    }

    /// Start a drag
    ///
    /// Records `pointer - surface_origin` as the anchor offset. Returns
    /// `false` without touching state if a gesture is already active.
    pub fn begin_drag(
        &mut self,
        window_id: WindowId,
        source: PointerSource,
        pointer: Vec2,
        surface_origin: Vec2,
    ) -> bool {
        if self.drag.is_some() {
            tracing::trace!(window_id = %window_id, "drag already active, press ignored");
            return false;
        }

        tracing::debug!(window_id = %window_id, %source, "drag started");
        self.drag = Some(DragState {
            window_id,
            anchor_offset: pointer - surface_origin,
            source,
        });
        true
    }

    /// Compute the clamped surface position for a pointer move
    ///
    /// Returns `None` when no drag is active.
    pub fn on_pointer_move(&self, pointer: Vec2, viewport: Size, surface: Size) -> Option<Vec2> {
        let drag = self.drag.as_ref()?;
        let proposed = pointer - drag.anchor_offset;
        Some(clamp_to_viewport(proposed, viewport, surface))
    }

    /// Whether a move from `source` must suppress the platform default
    #[inline]
    pub fn prevents_default(&self, source: PointerSource) -> bool {
        self.is_dragging() && source.needs_default_suppression()
    }

    /// End the current drag, returning the gesture that ended
    ///
    /// Calling this while idle is a no-op.
    pub fn end_drag(&mut self) -> Option<DragState> {
        let ended = self.drag.take();
        if let Some(drag) = &ended {
            tracing::debug!(window_id = %drag.window_id, "drag ended");
        }
        ended
    }
}
