//! Browser lifecycle tests for the background controller
//!
//! These run in a headless browser via wasm-pack:
//! `wasm-pack test --headless --chrome crates/portfolio-background -- --features wasm`
#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use portfolio_background::MatrixBackground;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("canvas").unwrap();
    element.dyn_into::<web_sys::HtmlCanvasElement>().unwrap()
}

#[wasm_bindgen_test]
fn test_timer_and_listener_acquired_and_released_as_pair() {
    let mut background = MatrixBackground::new(make_canvas()).unwrap();

    // A successful start leaves both resources registered; a second start
    // on a running controller is a no-op, not a second acquisition
    background.start().unwrap();
    background.start().unwrap();

    // Stop releases both; repeating it must be safe
    background.stop();
    background.stop();

    // The controller can be restarted after a full release
    background.start().unwrap();
    background.stop();
}

#[wasm_bindgen_test]
fn test_manual_ticks_without_timer() {
    let mut background = MatrixBackground::new(make_canvas()).unwrap();
    let columns = background.column_count();

    background.tick();
    background.resize(280, 100);
    background.tick();

    // The column grid is sized at attach time and survives resizes
    assert_eq!(background.column_count(), columns);
}
