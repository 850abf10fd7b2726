//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, sticky notes and viewport changes
//! - `input`: Pointer event handling and drag operations
//! - `navigation`: Gallery and case-study routing
//! - `content`: Article loading, contact form and lightbox state

mod content;
mod input;
mod navigation;
mod windows;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ArticleListView, ArticleView, ContactStatus, RuleList};
use crate::error::ContentError;
use crate::input::PointerDragTracker;
use crate::math::Size;
use crate::platform::PlatformAdapter;
use crate::router::{NavigationState, ViewRouter};
use crate::window::layout::LayoutTable;
use crate::window::{WindowManager, WindowSession};

pub use content::{ArticleRequest, ContactSubmission};

/// Global function embedded article images call to enlarge themselves
pub use crate::content::rewrite::LIGHTBOX_HANDLER;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (open/close, focus, z-order, dedup by kind)
/// - Drag tracker (one pointer gesture at a time)
/// - View router (gallery and case studies, synced with history)
/// - Article, contact and lightbox panel state
///
/// Window content is a string chosen by the page (markup or a template key).
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager<String>,
    /// Drag tracker
    pub input: PointerDragTracker,
    /// View router
    pub router: ViewRouter,
    pub(crate) config: SiteConfig,
    pub(crate) rules: RuleList,
    pub(crate) platform: Rc<dyn PlatformAdapter>,
    pub(crate) viewport: Size,
    pub(crate) article: ArticleView,
    pub(crate) article_list: ArticleListView,
    /// Article load in flight, if any
    pub(crate) article_request: Option<ArticleRequest>,
    /// Keyword the featured article panel was loaded for
    pub(crate) article_keyword: Option<String>,
    /// The current view needs a feed load nobody started yet
    pub(crate) article_load_due: bool,
    pub(crate) contact: ContactStatus,
    /// Image source shown in the lightbox overlay
    pub(crate) lightbox: Option<String>,
    pub(crate) initialized: bool,
}

impl DesktopEngine {
    /// Create an engine on top of `platform`
    pub fn new(config: SiteConfig, platform: Rc<dyn PlatformAdapter>) -> Result<Self, ContentError> {
        let layout = LayoutTable::default().with_breakpoint(config.mobile_breakpoint);
        Ok(Self {
            windows: WindowManager::with_layout(layout),
            input: PointerDragTracker::new(),
            router: ViewRouter::new(),
            config,
            rules: RuleList::article_defaults()?,
            platform,
            viewport: Size::ZERO,
            article: ArticleView::default(),
            article_list: ArticleListView::default(),
            article_request: None,
            article_keyword: None,
            article_load_due: false,
            contact: ContactStatus::default(),
            lightbox: None,
            initialized: false,
        })
    }

    /// Initialize the desktop with screen dimensions
    ///
    /// Seeds sticky notes, restores the view from the current fragment and
    /// injects the relay SDK. A deep-linked case study with an article leaves
    /// a load for `take_article_load`. Calling it again only updates the
    /// viewport.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.seed_sticky_notes();
        self.router.load(&self.platform);
        self.sync_projects_window();
        self.refresh_featured_article();

        if let Some(url) = self.config.relay.sdk_url.as_deref() {
            self.platform.load_external_script(url);
        }
        tracing::debug!(width, height, windows = self.windows.count(), "desktop initialized");
    }

    /// Initialize using the platform's current viewport size
    pub fn init_from_platform(&mut self) {
        let size = self.platform.viewport_size();
        self.init(size.width, size.height);
    }

    /// Site configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Current viewport size
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current view
    pub fn view(&self) -> &NavigationState {
        self.router.state()
    }

    /// Everything the page needs to render one frame
    pub fn snapshot(&self) -> DesktopSnapshot<'_> {
        DesktopSnapshot {
            windows: self.windows.windows_by_z(),
            focused: self.windows.focused().map(|id| id.as_str()),
            view: self.router.state(),
            case_study_title: self
                .router
                .state()
                .case_study_id()
                .map(|id| self.config.case_studies.label_for(id)),
            dragging: self.input.target().map(|id| id.as_str()),
            article: &self.article,
            articles: &self.article_list,
            contact: &self.contact,
            contact_message: self.contact.message(),
            lightbox: self.lightbox.as_deref(),
        }
    }
}

/// Render snapshot, serialized to JSON for the page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot<'a> {
    /// Open windows, bottom to top
    pub windows: Vec<&'a WindowSession<String>>,
    pub focused: Option<&'a str>,
    pub view: &'a NavigationState,
    pub case_study_title: Option<&'a str>,
    pub dragging: Option<&'a str>,
    pub article: &'a ArticleView,
    pub articles: &'a ArticleListView,
    pub contact: &'a ContactStatus,
    pub contact_message: String,
    pub lightbox: Option<&'a str>,
}

/// Connect a shared engine to platform events
///
/// Registers the back/forward observer and the lightbox global used by
/// rewritten article markup. `on_change` runs after an event changed what
/// the page shows, once the engine is no longer borrowed; a navigation into
/// a case study may leave a feed load for `take_article_load`. Callbacks
/// hold a weak reference, so dropping the engine silences them.
pub fn attach(engine: &Rc<RefCell<DesktopEngine>>, on_change: Rc<dyn Fn()>) {
    let platform = Rc::clone(&engine.borrow().platform);

    let weak: Weak<RefCell<DesktopEngine>> = Rc::downgrade(engine);
    let notify = Rc::clone(&on_change);
    platform.observe_navigation(Box::new(move |fragment| {
        let Some(engine) = weak.upgrade() else { return };
        let changed = engine.borrow_mut().navigate(&fragment);
        if changed {
            notify();
        }
    }));

    let weak = Rc::downgrade(engine);
    platform.install_global_handler(
        LIGHTBOX_HANDLER,
        Box::new(move |src| {
            let Some(engine) = weak.upgrade() else { return };
            engine.borrow_mut().open_lightbox(&src);
            on_change();
        }),
    );
}
