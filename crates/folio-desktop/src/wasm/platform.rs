//! Browser implementation of the platform adapter

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::math::Size;
use crate::platform::{GlobalHandler, History, NavigationCallback, PlatformAdapter};
use super::log;

/// Platform backed by `window`, `location` and `history`
#[derive(Default)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

impl History for BrowserPlatform {
    fn current_fragment(&self) -> String {
        current_hash()
    }

    fn push_fragment(&self, fragment: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(fragment)) {
            log(&format!("[folio-desktop] pushState failed: {:?}", e));
        }
    }

    fn replace_fragment(&self, fragment: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
            log(&format!("[folio-desktop] replaceState failed: {:?}", e));
        }
    }

    fn history_back(&self) {
        if let Some(Err(e)) = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.back())
        {
            log(&format!("[folio-desktop] history.back failed: {:?}", e));
        }
    }
}

impl PlatformAdapter for BrowserPlatform {
    fn observe_navigation(&self, mut callback: NavigationCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_pop = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            callback(current_hash());
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()) {
            log(&format!("[folio-desktop] popstate listener failed: {:?}", e));
        }
        // Lives as long as the page
        on_pop.forget();
    }

    fn install_global_handler(&self, name: &str, mut handler: GlobalHandler) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let function = Closure::wrap(Box::new(move |arg: JsValue| {
            handler(arg.as_string().unwrap_or_default());
        }) as Box<dyn FnMut(JsValue)>);

        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), function.as_ref()) {
            log(&format!("[folio-desktop] cannot install {}: {:?}", name, e));
        }
        function.forget();
    }

    fn load_external_script(&self, url: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let script = match document
            .create_element("script")
            .map(|el| el.dyn_into::<web_sys::HtmlScriptElement>())
        {
            Ok(Ok(script)) => script,
            _ => {
                log("[folio-desktop] cannot create script element");
                return;
            }
        };
        script.set_src(url);
        script.set_async(true);

        let appended = match document.head() {
            Some(head) => head.append_child(&script).map(|_| ()),
            None => Err(JsValue::from_str("document has no head")),
        };
        if let Err(e) = appended {
            log(&format!("[folio-desktop] cannot load {}: {:?}", url, e));
        }
    }

    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn random_unit(&self) -> f32 {
        // f64 -> f32 can round up to exactly 1.0
        (js_sys::Math::random() as f32).min(1.0 - f32::EPSILON)
    }

    fn viewport_size(&self) -> Size {
        let Some(window) = web_sys::window() else {
            return Size::ZERO;
        };
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Size::new(dimension(window.inner_width()), dimension(window.inner_height()))
    }
}
