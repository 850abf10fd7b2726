//! Browser tests for the wasm surface
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use folio_desktop::{BrowserPlatform, DesktopController, History, PlatformAdapter};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn push_and_replace_update_location() {
    let platform = BrowserPlatform::new();
    platform.push_fragment("#/projects/web-test");
    assert_eq!(platform.current_fragment(), "#/projects/web-test");
    platform.replace_fragment("#/");
    assert_eq!(platform.current_fragment(), "#/");
}

#[wasm_bindgen_test]
fn random_unit_in_range() {
    let platform = BrowserPlatform::new();
    for _ in 0..100 {
        let r = platform.random_unit();
        assert!((0.0..1.0).contains(&r));
    }
    assert!(platform.now_ms() > 0);
}

#[wasm_bindgen_test]
fn controller_opens_and_dedups() {
    let mut controller = DesktopController::new().unwrap();
    controller.init(1024.0, 768.0);
    let about = controller.open_window("about", "").unwrap();
    assert_eq!(controller.open_window("About", "").unwrap(), about);
    assert!(controller.open_window("nonsense", "").is_err());
    assert!(controller.get_windows_json().contains(&about));
}
