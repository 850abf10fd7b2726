//! Window management module
//!
//! Provides window sessions, kind-based deduplication, z-order and the
//! declarative per-kind layout table.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod kind;
pub mod layout;
mod manager;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use window::WindowSession;
pub use config::{Geometry, Placement};
pub use kind::{KindClass, WindowKind};
pub use layout::LayoutTable;
pub use manager::WindowManager;

/// Unique window identifier
///
/// Derived from the window kind and its creation timestamp, e.g.
/// `About-1718000000000`. Treated as opaque everywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
