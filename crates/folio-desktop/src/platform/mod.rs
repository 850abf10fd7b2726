//! Platform adapter
//!
//! Everything the core needs from the browser goes through these traits:
//! history, navigation events, global callbacks for embedded markup,
//! third-party scripts, time, and entropy. The browser implementation lives
//! behind the `wasm` feature; [`crate::testing::MockPlatform`] is the test
//! double.

use std::rc::Rc;

use crate::math::Size;

/// Callback receiving the new location fragment after back/forward
pub type NavigationCallback = Box<dyn FnMut(String)>;

/// Callback installed as a named global function; receives its first argument
pub type GlobalHandler = Box<dyn FnMut(String)>;

/// Location fragment and session history
pub trait History {
    /// Current location fragment, including the leading `#` if any
    fn current_fragment(&self) -> String;

    /// Push a new history entry with `fragment`
    fn push_fragment(&self, fragment: &str);

    /// Replace the current history entry with `fragment`
    fn replace_fragment(&self, fragment: &str);

    /// Go back one entry; the platform reports the result as a navigation event
    fn history_back(&self);
}

/// Browser globals used by the desktop
pub trait PlatformAdapter: History {
    /// Register for back/forward navigation events
    fn observe_navigation(&self, callback: NavigationCallback);

    /// Expose `handler` as a global function called `name`
    fn install_global_handler(&self, name: &str, handler: GlobalHandler);

    /// Inject a third-party script tag
    fn load_external_script(&self, url: &str);

    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;

    /// Uniform sample in `[0, 1)`
    fn random_unit(&self) -> f32;

    /// Current viewport size in CSS pixels
    fn viewport_size(&self) -> Size;
}

impl<T: History + ?Sized> History for Rc<T> {
    fn current_fragment(&self) -> String {
        (**self).current_fragment()
    }

    fn push_fragment(&self, fragment: &str) {
        (**self).push_fragment(fragment)
    }

    fn replace_fragment(&self, fragment: &str) {
        (**self).replace_fragment(fragment)
    }

    fn history_back(&self) {
        (**self).history_back()
    }
}

impl<T: PlatformAdapter + ?Sized> PlatformAdapter for Rc<T> {
    fn observe_navigation(&self, callback: NavigationCallback) {
        (**self).observe_navigation(callback)
    }

    fn install_global_handler(&self, name: &str, handler: GlobalHandler) {
        (**self).install_global_handler(name, handler)
    }

    fn load_external_script(&self, url: &str) {
        (**self).load_external_script(url)
    }

    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn random_unit(&self) -> f32 {
        (**self).random_unit()
    }

    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }
}
