//! Retro desktop core for the Folio portfolio
//!
//! This crate provides the state behind a "desktop" themed portfolio page:
//! - Window sessions (open, close, focus, z-order, one window per kind)
//! - Pointer dragging with viewport clamping for mouse and touch
//! - Fragment routing between the desktop, the project gallery and case studies
//! - Article feed lookup and HTML rewriting, contact relay payloads
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`)
//! - [`input`]: Single-gesture drag tracker
//! - [`window`]: Window sessions, manager and layout table
//! - [`router`]: View router and request tokens
//! - [`content`]: Articles, contact form and case-study catalog
//! - [`platform`]: Browser services the core depends on
//! - [`testing`]: In-memory platform for tests
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_desktop::{DesktopEngine, SiteConfig, WindowKind};
//! use folio_desktop::testing::MockPlatform;
//!
//! let platform = Rc::new(MockPlatform::new());
//! let mut engine = DesktopEngine::new(SiteConfig::default(), platform).unwrap();
//! engine.init(1280.0, 800.0);
//!
//! let about = engine.open_window(WindowKind::About, "<p>Hello</p>");
//! assert_eq!(engine.open_window(WindowKind::About, "ignored"), about);
//! ```
//!
//! The browser surface lives behind the `wasm` feature as `DesktopController`.

pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod math;
pub mod platform;
pub mod router;
pub mod testing;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{FeedConfig, RelayConfig, SiteConfig, StickyNote};
pub use content::{ArticleView, CaseStudyCatalog, ContactMessage, ContactStatus};
pub use error::{ConfigError, ContactError, ContentError, KindError};
pub use input::{DragState, InputResult, PointerDragTracker, PointerSource};
pub use math::{Size, Vec2};
pub use platform::{History, PlatformAdapter};
pub use router::{NavigationState, RequestToken, ViewRouter};
pub use window::{Geometry, WindowId, WindowKind, WindowManager, WindowSession};

pub use engine::{attach, ArticleRequest, ContactSubmission, DesktopEngine, DesktopSnapshot, LIGHTBOX_HANDLER};
