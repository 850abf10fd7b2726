//! Window manager for lifecycle, deduplication and z-order

use std::collections::HashMap;

use crate::math::{Size, Vec2};
use super::{Geometry, LayoutTable, Placement, WindowId, WindowKind, WindowSession};

/// Window manager handling window lifecycle, z-order and dedup-by-kind
///
/// The z-index pool is shared by all sessions and only ever grows, so no two
/// open/focus operations ever yield the same stacking value.
pub struct WindowManager<C> {
    /// All windows by ID
    windows: HashMap<WindowId, WindowSession<C>>,
    /// Default geometry per kind
    layout: LayoutTable,
    /// Next z-index value
    next_z: u64,
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowManager<C> {
    /// Create a new window manager with the default layout table
    pub fn new() -> Self {
        Self::with_layout(LayoutTable::default())
    }

    /// Create a window manager with a custom layout table
    pub fn with_layout(layout: LayoutTable) -> Self {
        Self {
            windows: HashMap::new(),
            layout,
            next_z: 1,
        }
    }

    /// Layout table used for default geometry
    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Open a window of `kind`, or raise the one already open
    ///
    /// Non-sticky kinds are unique: if one is open it is focused and its id
    /// returned, and `content` is never called.
    pub fn open<F>(&mut self, kind: WindowKind, content: F, geometry: Geometry, placement: &Placement) -> WindowId
    where
        F: FnOnce() -> C,
    {
        if !kind.is_sticky() {
            if let Some(id) = self.find_by_kind(&kind).cloned() {
                tracing::debug!(window_id = %id, %kind, "window already open, raising");
                self.focus(&id);
                return id;
            }
        }

        let id = self.allocate_id(&kind, placement.now_ms);
        let (default_position, default_size) = self.layout.resolve(&kind, placement);
        let size = geometry.size.unwrap_or(default_size);
        let position = geometry.position.unwrap_or(default_position);

        let z_index = self.take_z();
        tracing::debug!(window_id = %id, %kind, z = z_index, "window opened");

        self.windows.insert(id.clone(), WindowSession {
            id: id.clone(),
            kind,
            position,
            size,
            z_index,
            content: content(),
        });

        id
    }

    /// Pre-seed a sticky note window
    pub fn seed_sticky(&mut self, name: &str, content: C, geometry: Geometry, placement: &Placement) -> WindowId {
        self.open(WindowKind::Sticky(name.to_string()), || content, geometry, placement)
    }

    /// Close a window, returning it if it was open
    pub fn close(&mut self, id: &WindowId) -> Option<WindowSession<C>> {
        let removed = self.windows.remove(id);
        if removed.is_some() {
            tracing::debug!(window_id = %id, "window closed");
        }
        removed
    }

    /// Get a window by ID
    pub fn get(&self, id: &WindowId) -> Option<&WindowSession<C>> {
        self.windows.get(id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowSession<C>> {
        self.windows.get_mut(id)
    }

    /// Find an open window of `kind`
    ///
    /// Non-sticky kinds have at most one window. Sticky kinds may repeat, in
    /// which case any one of them is returned.
    pub fn find_by_kind(&self, kind: &WindowKind) -> Option<&WindowId> {
        self.windows
            .values()
            .find(|w| &w.kind == kind)
            .map(|w| &w.id)
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: &WindowId) {
        if !self.windows.contains_key(id) {
            return;
        }

        let z = self.take_z();
        if let Some(window) = self.windows.get_mut(id) {
            window.z_index = z;
            tracing::trace!(window_id = %id, z, "window focused");
        }
    }

    /// Get the topmost window ID
    pub fn focused(&self) -> Option<&WindowId> {
        self.windows
            .values()
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    /// Move a window to a new position; z-order is untouched
    pub fn move_window(&mut self, id: &WindowId, position: Vec2) {
        if let Some(window) = self.windows.get_mut(id) {
            window.position = position;
        }
    }

    /// Resize a window
    pub fn resize(&mut self, id: &WindowId, size: Size) {
        if let Some(window) = self.windows.get_mut(id) {
            window.size = size;
        }
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowSession<C>> {
        let mut windows: Vec<&WindowSession<C>> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows
    pub fn all_windows(&self) -> impl Iterator<Item = &WindowSession<C>> {
        self.windows.values()
    }

    /// Get mutable access to all windows
    pub fn all_windows_mut(&mut self) -> impl Iterator<Item = &mut WindowSession<C>> {
        self.windows.values_mut()
    }

    /// Find the topmost window at a viewport position
    pub fn window_at(&self, pos: Vec2) -> Option<&WindowId> {
        self.windows
            .values()
            .filter(|w| w.contains(pos))
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// The z-index the next open or focus will receive
    pub fn next_z(&self) -> u64 {
        self.next_z
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// `kind-timestamp`, with a numeric suffix if that id is still taken
    fn allocate_id(&self, kind: &WindowKind, now_ms: u64) -> WindowId {
        let base = format!("{}-{}", kind.id_prefix(), now_ms);
        let mut candidate = WindowId::new(base.clone());
        let mut n = 1;
        while self.windows.contains_key(&candidate) {
            candidate = WindowId::new(format!("{}-{}", base, n));
            n += 1;
        }
        candidate
    }
}
