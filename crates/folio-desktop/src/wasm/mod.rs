//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine, allowing
//! the page to drive windows, dragging and navigation. State is read back as
//! JSON snapshots.

mod fetch;
mod platform;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::content::ContactMessage;
use crate::engine::{attach, ArticleRequest, DesktopEngine};
use crate::input::{InputResult, PointerSource};
use crate::window::{WindowId, WindowKind};

pub use platform::BrowserPlatform;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Unknown pointer types are treated as mouse
fn pointer_source(name: &str) -> PointerSource {
    name.parse().unwrap_or_default()
}

type ChangeListener = Rc<RefCell<Option<js_sys::Function>>>;

fn notify(listener: &ChangeListener) {
    if let Some(callback) = listener.borrow().as_ref() {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log(&format!("[folio-desktop] change listener threw: {:?}", e));
        }
    }
}

/// Start the feed load the engine asked for, if any
fn start_article_load(engine: &Rc<RefCell<DesktopEngine>>, listener: &ChangeListener) {
    let request = engine.borrow_mut().take_article_load();
    if let Some(request) = request {
        spawn_article_fetch(engine, listener, request);
    }
}

fn spawn_article_fetch(engine: &Rc<RefCell<DesktopEngine>>, listener: &ChangeListener, request: ArticleRequest) {
    let weak = Rc::downgrade(engine);
    let listener = Rc::clone(listener);
    wasm_bindgen_futures::spawn_local(async move {
        let body = fetch::get_text(&request.url).await;
        if let Err(e) = &body {
            log(&format!("[folio-desktop] feed load failed: {}", e));
        }
        let Some(engine) = weak.upgrade() else { return };
        let applied = engine.borrow_mut().complete_article_load(&request.token, body);
        if applied {
            notify(&listener);
        }
    });
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: Rc<RefCell<DesktopEngine>>,
    listener: ChangeListener,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller with the built-in site config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DesktopController, JsValue> {
        Self::build(SiteConfig::default())
    }

    /// Create a controller from a JSON site config
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<DesktopController, JsValue> {
        let config = SiteConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(config)
    }

    fn build(config: SiteConfig) -> Result<DesktopController, JsValue> {
        console_error_panic_hook::set_once();

        let platform = Rc::new(BrowserPlatform::new());
        let engine = DesktopEngine::new(config, platform).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let engine = Rc::new(RefCell::new(engine));
        let listener: ChangeListener = Rc::new(RefCell::new(None));

        let on_change = Rc::clone(&listener);
        let weak = Rc::downgrade(&engine);
        attach(
            &engine,
            Rc::new(move || {
                if let Some(engine) = weak.upgrade() {
                    start_article_load(&engine, &on_change);
                }
                notify(&on_change);
            }),
        );
        log("[folio-desktop] controller ready");

        Ok(Self { engine, listener })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.borrow_mut().init(width, height);
        start_article_load(&self.engine, &self.listener);
    }

    /// Initialize with the current window size
    #[wasm_bindgen]
    pub fn init_from_window(&mut self) {
        self.engine.borrow_mut().init_from_platform();
        start_article_load(&self.engine, &self.listener);
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.borrow_mut().resize(width, height);
    }

    /// Register a function called after asynchronous state changes
    ///
    /// Fires for back/forward navigation, lightbox clicks inside articles,
    /// finished feed loads and contact relay answers.
    #[wasm_bindgen]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        *self.listener.borrow_mut() = Some(callback);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open (or raise) a window of `kind` and return its id
    ///
    /// Kinds: `projects`, `about`, `contact`, `articles`, `sticky:<name>`.
    #[wasm_bindgen]
    pub fn open_window(&mut self, kind: &str, content: &str) -> Result<String, JsValue> {
        let kind: WindowKind = kind.parse().map_err(|e: crate::error::KindError| JsValue::from_str(&e.to_string()))?;
        let resets_contact = kind == WindowKind::Contact;

        let id = {
            let mut engine = self.engine.borrow_mut();
            if resets_contact {
                engine.reset_contact();
            }
            engine.open_window(kind, content)
        };
        start_article_load(&self.engine, &self.listener);
        Ok(id.to_string())
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        let closed = self.engine.borrow_mut().close_window(&WindowId::from(id));
        start_article_load(&self.engine, &self.listener);
        closed
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.borrow_mut().focus_window(&WindowId::from(id));
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Press on a window's title bar; `pointer_type` is the DOM pointerType
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: &str, x: f32, y: f32, pointer_type: &str) -> String {
        let result = self
            .engine
            .borrow_mut()
            .handle_pointer_down(&WindowId::from(id), x, y, pointer_source(pointer_type));
        to_json(&result)
    }

    /// Press anywhere; the topmost window under the pointer is dragged
    #[wasm_bindgen]
    pub fn pointer_down_at(&mut self, x: f32, y: f32, pointer_type: &str) -> String {
        let result = self
            .engine
            .borrow_mut()
            .handle_pointer_down_at(x, y, pointer_source(pointer_type));
        to_json(&result)
    }

    /// Pointer move; returns the moved window and whether to preventDefault
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32, pointer_type: &str) -> String {
        let result: InputResult = self
            .engine
            .borrow_mut()
            .handle_pointer_move(x, y, pointer_source(pointer_type));
        to_json(&result)
    }

    /// Pointer release or cancel
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.engine.borrow_mut().handle_pointer_up())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[wasm_bindgen]
    pub fn select_case_study(&mut self, id: &str) -> bool {
        let changed = self.engine.borrow_mut().select_case_study(id);
        start_article_load(&self.engine, &self.listener);
        changed
    }

    #[wasm_bindgen]
    pub fn close_case_study(&mut self) -> bool {
        let changed = self.engine.borrow_mut().close_case_study();
        start_article_load(&self.engine, &self.listener);
        changed
    }

    #[wasm_bindgen]
    pub fn close_gallery(&mut self) -> bool {
        let changed = self.engine.borrow_mut().close_gallery();
        start_article_load(&self.engine, &self.listener);
        changed
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Fetch the article feed again for the current view
    #[wasm_bindgen]
    pub fn load_articles(&mut self) {
        let request = self.engine.borrow_mut().begin_article_load();
        if let Some(request) = request {
            spawn_article_fetch(&self.engine, &self.listener, request);
        }
    }

    /// Send the contact form; progress shows up in the snapshot
    #[wasm_bindgen]
    pub fn submit_contact(&mut self, from_name: &str, from_email: &str, message: &str) -> Result<(), JsValue> {
        let message = ContactMessage::new(from_name, from_email, message);
        let submission = self
            .engine
            .borrow_mut()
            .begin_contact(&message)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let weak = Rc::downgrade(&self.engine);
        let listener = Rc::clone(&self.listener);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch::post_json(&submission.endpoint, &submission.body).await;
            let Some(engine) = weak.upgrade() else { return };
            engine.borrow_mut().complete_contact(result);
            notify(&listener);
        });
        Ok(())
    }

    #[wasm_bindgen]
    pub fn open_lightbox(&mut self, src: &str) {
        self.engine.borrow_mut().open_lightbox(src);
    }

    #[wasm_bindgen]
    pub fn close_lightbox(&mut self) {
        self.engine.borrow_mut().close_lightbox();
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Full render snapshot as JSON
    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> String {
        to_json(&self.engine.borrow().snapshot())
    }

    /// Current view as JSON, e.g. `{"view":"caseStudy","id":"savvo-sommelier"}`
    #[wasm_bindgen]
    pub fn get_view_json(&self) -> String {
        to_json(self.engine.borrow().view())
    }

    /// Open windows, bottom to top, as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        to_json(&self.engine.borrow().windows.windows_by_z())
    }

    /// Case studies in gallery order as JSON
    #[wasm_bindgen]
    pub fn get_case_studies_json(&self) -> String {
        let engine = self.engine.borrow();
        let studies: Vec<_> = engine.config().case_studies.iter().collect();
        to_json(&studies)
    }

    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.engine.borrow().input.is_dragging()
    }
}
