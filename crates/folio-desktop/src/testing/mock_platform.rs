//! In-memory platform for testing.
//!
//! Simulates a session history stack and records every side effect the core
//! asks the browser for. Back/forward produce queued navigation events that
//! the test delivers explicitly, mirroring how `popstate` arrives on a later
//! event-loop turn.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::math::Size;
use crate::platform::{GlobalHandler, History, NavigationCallback, PlatformAdapter};

/// In-memory platform for testing.
pub struct MockPlatform {
    /// History entries (fragments)
    entries: RefCell<Vec<String>>,
    /// Index of the current entry
    index: Cell<usize>,
    /// Every fragment pushed, in order
    pushes: RefCell<Vec<String>>,
    /// Every fragment used to replace an entry, in order
    replaces: RefCell<Vec<String>>,
    /// Number of `history_back` calls
    back_calls: Cell<usize>,
    /// Navigation events not yet delivered
    pending: RefCell<VecDeque<String>>,
    /// Registered navigation observer
    observer: RefCell<Option<NavigationCallback>>,
    /// Installed global functions
    handlers: RefCell<HashMap<String, GlobalHandler>>,
    /// Injected script URLs
    scripts: RefCell<Vec<String>>,
    /// Current timestamp
    now: Cell<u64>,
    /// Queued random samples
    randoms: RefCell<VecDeque<f32>>,
    /// Viewport size
    viewport: Cell<Size>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    /// Create a platform sitting on an empty fragment.
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// Create a platform whose page was loaded at `fragment`.
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            entries: RefCell::new(vec![fragment.to_string()]),
            index: Cell::new(0),
            pushes: RefCell::new(Vec::new()),
            replaces: RefCell::new(Vec::new()),
            back_calls: Cell::new(0),
            pending: RefCell::new(VecDeque::new()),
            observer: RefCell::new(None),
            handlers: RefCell::new(HashMap::new()),
            scripts: RefCell::new(Vec::new()),
            now: Cell::new(1_000),
            randoms: RefCell::new(VecDeque::new()),
            viewport: Cell::new(Size::new(1440.0, 900.0)),
        }
    }

    /// Set the viewport size.
    pub fn set_viewport(&self, size: Size) {
        self.viewport.set(size);
    }

    /// Advance the clock.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Queue samples returned by `random_unit`; 0.0 once exhausted.
    pub fn queue_random(&self, samples: &[f32]) {
        self.randoms.borrow_mut().extend(samples.iter().copied());
    }

    /// Simulate the browser forward button.
    pub fn go_forward(&self) {
        let index = self.index.get();
        if index + 1 < self.entries.borrow().len() {
            self.index.set(index + 1);
            self.pending.borrow_mut().push_back(self.current_fragment());
        }
    }

    /// Simulate the browser back button.
    pub fn go_back(&self) {
        let index = self.index.get();
        if index > 0 {
            self.index.set(index - 1);
            self.pending.borrow_mut().push_back(self.current_fragment());
        }
    }

    /// Pop the oldest undelivered navigation event.
    pub fn take_navigation(&self) -> Option<String> {
        self.pending.borrow_mut().pop_front()
    }

    /// Deliver all pending navigation events to the registered observer.
    ///
    /// Returns the number of events delivered.
    pub fn deliver_navigation(&self) -> usize {
        let mut delivered = 0;
        while let Some(fragment) = self.take_navigation() {
            let callback = self.observer.borrow_mut().take();
            if let Some(mut callback) = callback {
                callback(fragment);
                self.observer.borrow_mut().get_or_insert(callback);
                delivered += 1;
            }
        }
        delivered
    }

    /// Whether a navigation observer was registered.
    pub fn is_observing(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Call an installed global function, as embedded markup would.
    ///
    /// Returns `false` if no function with that name exists.
    pub fn call_global(&self, name: &str, arg: &str) -> bool {
        let handler = self.handlers.borrow_mut().remove(name);
        match handler {
            Some(mut handler) => {
                handler(arg.to_string());
                self.handlers.borrow_mut().entry(name.to_string()).or_insert(handler);
                true
            }
            None => false,
        }
    }

    /// Whether a global function called `name` is installed.
    pub fn has_global(&self, name: &str) -> bool {
        self.handlers.borrow().contains_key(name)
    }

    /// Fragments pushed so far.
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.borrow().clone()
    }

    /// Fragments used to replace entries so far.
    pub fn replaces(&self) -> Vec<String> {
        self.replaces.borrow().clone()
    }

    /// Number of `history_back` calls.
    pub fn back_calls(&self) -> usize {
        self.back_calls.get()
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Script URLs injected so far.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl History for MockPlatform {
    fn current_fragment(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push_fragment(&self, fragment: &str) {
        let index = self.index.get();
        let mut entries = self.entries.borrow_mut();
        entries.truncate(index + 1);
        entries.push(fragment.to_string());
        self.index.set(index + 1);
        self.pushes.borrow_mut().push(fragment.to_string());
    }

    fn replace_fragment(&self, fragment: &str) {
        self.entries.borrow_mut()[self.index.get()] = fragment.to_string();
        self.replaces.borrow_mut().push(fragment.to_string());
    }

    fn history_back(&self) {
        self.back_calls.set(self.back_calls.get() + 1);
        self.go_back();
    }
}

impl PlatformAdapter for MockPlatform {
    fn observe_navigation(&self, callback: NavigationCallback) {
        *self.observer.borrow_mut() = Some(callback);
    }

    fn install_global_handler(&self, name: &str, handler: GlobalHandler) {
        self.handlers.borrow_mut().insert(name.to_string(), handler);
    }

    fn load_external_script(&self, url: &str) {
        self.scripts.borrow_mut().push(url.to_string());
    }

    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn random_unit(&self) -> f32 {
        self.randoms.borrow_mut().pop_front().unwrap_or(0.0)
    }

    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }
}
