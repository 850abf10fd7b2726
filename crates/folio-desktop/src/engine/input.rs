//! Input handling for pointer events and drag operations

use crate::input::{InputResult, PointerSource};
use crate::math::Vec2;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle a press on a window's drag handle
    ///
    /// Focuses the window and starts a drag anchored at the press point. A
    /// press while another gesture is active only focuses.
    pub fn handle_pointer_down(&mut self, id: &WindowId, x: f32, y: f32, source: PointerSource) -> InputResult {
        let origin = match self.windows.get(id) {
            Some(window) => window.position,
            None => return InputResult::Unhandled,
        };

        self.focus_window(id);
        self.input.begin_drag(id.clone(), source, Vec2::new(x, y), origin);
        InputResult::Handled
    }

    /// Handle a press anywhere on the desktop, hit-testing windows
    pub fn handle_pointer_down_at(&mut self, x: f32, y: f32, source: PointerSource) -> InputResult {
        match self.windows.window_at(Vec2::new(x, y)).cloned() {
            Some(id) => self.handle_pointer_down(&id, x, y, source),
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move
    ///
    /// Moves the dragged window to the clamped position. Without an active
    /// drag this is a no-op.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32, source: PointerSource) -> InputResult {
        let Some(id) = self.input.target().cloned() else {
            return InputResult::Unhandled;
        };

        let size = match self.windows.get(&id) {
            Some(window) => window.size,
            None => {
                tracing::debug!(window_id = %id, "dragged window vanished");
                self.input.end_drag();
                return InputResult::Unhandled;
            }
        };

        let Some(position) = self.input.on_pointer_move(Vec2::new(x, y), self.viewport, size) else {
            return InputResult::Unhandled;
        };
        self.windows.move_window(&id, position);

        InputResult::Moved {
            prevent_default: self.input.prevents_default(source),
            window_id: id,
            x: position.x,
            y: position.y,
        }
    }

    /// Handle pointer release or cancel
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::tests::engine_at;
    use crate::input::{InputResult, PointerSource};
    use crate::math::Vec2;
    use crate::window::{Geometry, WindowKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mouse_drag_moves_and_clamps() {
        let (mut engine, _) = engine_at("");
        let id = engine.open_window_with(WindowKind::About, "", Geometry::default().at(100.0, 100.0).sized(300.0, 200.0));

        let down = engine.handle_pointer_down(&id, 110.0, 120.0, PointerSource::Mouse);
        assert_eq!(down, InputResult::Handled);

        let moved = engine.handle_pointer_move(210.0, 220.0, PointerSource::Mouse);
        assert_eq!(
            moved,
            InputResult::Moved {
                window_id: id.clone(),
                x: 200.0,
                y: 200.0,
                prevent_default: false,
            }
        );

        // Far outside: pinned to the viewport edge
        engine.handle_pointer_move(5000.0, -50.0, PointerSource::Mouse);
        assert_eq!(engine.windows.get(&id).unwrap().position, Vec2::new(1140.0, 0.0));

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
        assert_eq!(engine.handle_pointer_move(0.0, 0.0, PointerSource::Mouse), InputResult::Unhandled);
        assert_eq!(engine.windows.get(&id).unwrap().position, Vec2::new(1140.0, 0.0));
    }

    #[test]
    fn test_touch_drag_prevents_default() {
        let (mut engine, _) = engine_at("");
        let id = engine.open_window_with(WindowKind::Contact, "", Geometry::default().at(40.0, 40.0).sized(200.0, 200.0));

        engine.handle_pointer_down(&id, 50.0, 50.0, PointerSource::Touch);
        let moved = engine.handle_pointer_move(20.0, 20.0, PointerSource::Touch);
        assert!(moved.prevents_default());
        assert_eq!(engine.windows.get(&id).unwrap().position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_pointer_down_focuses() {
        let (mut engine, _) = engine_at("");
        let about = engine.open_window(WindowKind::About, "");
        let contact = engine.open_window(WindowKind::Contact, "");
        assert_eq!(engine.windows.focused(), Some(&contact));

        engine.handle_pointer_down(&about, 0.0, 0.0, PointerSource::Mouse);
        assert_eq!(engine.windows.focused(), Some(&about));
    }

    #[test]
    fn test_second_press_does_not_steal_drag() {
        let (mut engine, _) = engine_at("");
        let about = engine.open_window_with(WindowKind::About, "", Geometry::default().at(0.0, 0.0).sized(100.0, 100.0));
        let contact = engine.open_window_with(WindowKind::Contact, "", Geometry::default().at(400.0, 400.0).sized(100.0, 100.0));

        engine.handle_pointer_down(&about, 10.0, 10.0, PointerSource::Mouse);
        engine.handle_pointer_down(&contact, 410.0, 410.0, PointerSource::Touch);
        assert_eq!(engine.input.target(), Some(&about));

        engine.handle_pointer_move(60.0, 60.0, PointerSource::Mouse);
        assert_eq!(engine.windows.get(&about).unwrap().position, Vec2::new(50.0, 50.0));
        assert_eq!(engine.windows.get(&contact).unwrap().position, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_closing_dragged_window_ends_drag() {
        let (mut engine, _) = engine_at("");
        let id = engine.open_window(WindowKind::About, "");
        engine.handle_pointer_down(&id, 0.0, 0.0, PointerSource::Mouse);
        engine.close_window(&id);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.handle_pointer_move(1.0, 1.0, PointerSource::Mouse), InputResult::Unhandled);
    }

    #[test]
    fn test_pointer_down_hit_test() {
        let (mut engine, _) = engine_at("");
        let id = engine.open_window_with(WindowKind::About, "", Geometry::default().at(600.0, 600.0).sized(100.0, 100.0));
        assert_eq!(engine.handle_pointer_down_at(650.0, 650.0, PointerSource::Mouse), InputResult::Handled);
        assert_eq!(engine.input.target(), Some(&id));
        engine.handle_pointer_up();
        assert_eq!(engine.handle_pointer_down_at(1430.0, 890.0, PointerSource::Mouse), InputResult::Unhandled);
    }
}
