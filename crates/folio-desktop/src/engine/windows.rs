//! Window lifecycle and operations

use crate::input::clamp_to_viewport;
use crate::math::{Size, Vec2};
use crate::window::{Geometry, Placement, WindowId, WindowKind};
use super::DesktopEngine;

impl DesktopEngine {
    /// Sample clock, viewport and entropy for a window about to open
    pub(crate) fn placement(&self) -> Placement {
        Placement {
            now_ms: self.platform.now_ms(),
            viewport: self.viewport,
            jitter: Vec2::new(self.platform.random_unit(), self.platform.random_unit()),
        }
    }

    /// Open a window with default geometry
    ///
    /// Re-opening a kind that is already open raises it instead. Opening the
    /// Projects window also opens the gallery view.
    pub fn open_window(&mut self, kind: WindowKind, content: &str) -> WindowId {
        self.open_window_with(kind, content, Geometry::default())
    }

    /// Open a window with explicit geometry overrides
    pub fn open_window_with(&mut self, kind: WindowKind, content: &str, geometry: Geometry) -> WindowId {
        let placement = self.placement();
        let opened = kind.clone();
        let id = self
            .windows
            .open(kind, || content.to_string(), geometry, &placement);

        match opened {
            WindowKind::Projects => {
                if self.router.open_gallery(&self.platform) {
                    self.after_view_change();
                }
            }
            WindowKind::Articles => self.refresh_featured_article(),
            _ => {}
        }
        id
    }

    /// Close a window
    ///
    /// Closing the Projects window closes the gallery and any case study over
    /// it. Returns `false` for unknown ids.
    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let kind = match self.windows.get(id) {
            Some(window) => window.kind.clone(),
            None => return false,
        };

        if self.input.target() == Some(id) {
            self.input.end_drag();
        }

        if kind == WindowKind::Projects && self.router.close_gallery(&self.platform) {
            self.after_view_change();
        } else {
            self.windows.close(id);
        }
        true
    }

    /// Bring a window to the front
    pub fn focus_window(&mut self, id: &WindowId) {
        self.windows.focus(id);
    }

    /// Resize the viewport
    ///
    /// Floating windows are pulled back inside the new bounds; the Projects
    /// window is re-laid out to cover the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        let viewport = self.viewport;
        let placement = Placement::fixed(self.platform.now_ms(), viewport);
        let projects_geometry = self.windows.layout().resolve(&WindowKind::Projects, &placement);

        for window in self.windows.all_windows_mut() {
            if window.kind == WindowKind::Projects {
                (window.position, window.size) = projects_geometry;
            } else {
                window.position = clamp_to_viewport(window.position, viewport, window.size);
            }
        }
    }

    /// Open the configured sticky notes
    pub(crate) fn seed_sticky_notes(&mut self) {
        let notes = self.config.sticky_notes.clone();
        for note in notes {
            let placement = self.placement();
            let geometry = Geometry {
                position: note.position,
                size: None,
            };
            self.windows.seed_sticky(&note.name, note.text, geometry, &placement);
        }
    }

    /// Keep the Projects window in step with the router
    ///
    /// The gallery (and any case study over it) lives in the Projects window,
    /// so it exists exactly when the router is off the desktop.
    pub(crate) fn sync_projects_window(&mut self) {
        let open = self.windows.find_by_kind(&WindowKind::Projects).cloned();
        match (self.router.state().is_gallery_open(), open) {
            (true, None) => {
                let placement = self.placement();
                self.windows
                    .open(WindowKind::Projects, String::new, Geometry::default(), &placement);
            }
            (false, Some(id)) => {
                if self.input.target() == Some(&id) {
                    self.input.end_drag();
                }
                self.windows.close(&id);
            }
            _ => {}
        }
    }
}
