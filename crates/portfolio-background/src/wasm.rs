//! Browser bindings for the glyph-rain background
//!
//! This module provides the wasm-bindgen surface the host page talks to:
//! a controller that owns the canvas, the periodic redraw timer, and the
//! window resize subscription. The host creates one controller per mounted
//! background component, calls [`MatrixBackground::start`] on mount and
//! [`MatrixBackground::stop`] (or `free()`) on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::RainConfig;
use crate::engine::RainEngine;
use crate::paint::GlyphPainter;
use crate::rng::JsRandom;
use crate::surface::Surface;

/// Painter backed by a 2d canvas context
struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl GlyphPainter for CanvasPainter<'_> {
    fn fade(&mut self, width: u32, height: u32, alpha: f32) {
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {})", alpha));
        self.ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn begin_glyphs(&mut self, cell_size: u32, alpha: f32) {
        self.ctx
            .set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha));
        self.ctx.set_font(&format!("{}px monospace", cell_size));
    }

    fn glyph(&mut self, glyph: char, x: u32, y: u32) {
        let mut buf = [0u8; 4];
        let _ = self
            .ctx
            .fill_text(glyph.encode_utf8(&mut buf), f64::from(x), f64::from(y));
    }
}

/// State shared between the controller and its timer/resize callbacks
struct Inner {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: Surface,
    engine: RainEngine,
}

impl Inner {
    /// Advance and draw one frame
    fn draw(&mut self) {
        let mut painter = CanvasPainter { ctx: &self.ctx };
        self.engine.tick(&self.surface, &mut painter, &mut JsRandom);
    }

    /// Apply new dimensions to the canvas and the surface
    ///
    /// Reassigning the canvas dimensions clears its raster content; the
    /// column grid stays sized from attach time (see [`crate::ColumnTrails`]).
    fn apply_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.surface.resize(width, height);
    }
}

/// Background controller for WASM - wraps the rain engine with a JS-friendly API
#[wasm_bindgen]
pub struct MatrixBackground {
    inner: Rc<RefCell<Inner>>,
    tick_closure: Option<Closure<dyn FnMut()>>,
    resize_closure: Option<Closure<dyn FnMut()>>,
    interval_id: Option<i32>,
}

#[wasm_bindgen]
impl MatrixBackground {
    /// Create a controller for the given canvas with the default look
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<MatrixBackground, JsValue> {
        Self::build(canvas, RainConfig::default()).map_err(|e| JsValue::from_str(&e))
    }

    /// Create a controller with constants taken from a JSON config
    ///
    /// Missing fields fall back to the defaults. The config is fixed for
    /// the controller's lifetime.
    pub fn with_config(
        canvas: HtmlCanvasElement,
        config_json: &str,
    ) -> Result<MatrixBackground, JsValue> {
        let config: RainConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?;
        Self::build(canvas, config).map_err(|e| JsValue::from_str(&e))
    }

    /// Start the redraw timer and subscribe to window resizes
    ///
    /// Both resources are acquired together and released together by
    /// [`MatrixBackground::stop`]. Calling `start` on a running controller
    /// is a no-op.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.interval_id.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let inner = self.inner.clone();
        let resize = Closure::wrap(Box::new(move || {
            if let Ok((width, height)) = viewport_size() {
                inner.borrow_mut().apply_size(width, height);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        let inner = self.inner.clone();
        let tick = Closure::wrap(Box::new(move || {
            inner.borrow_mut().draw();
        }) as Box<dyn FnMut()>);

        let interval_ms = self.inner.borrow().engine.config().tick_interval_ms as i32;
        // Acquire the pair together or not at all: if the timer cannot be
        // registered, the listener must not stay behind
        let interval_id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        ) {
            Ok(id) => id,
            Err(err) => {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
                return Err(err);
            }
        };

        self.tick_closure = Some(tick);
        self.resize_closure = Some(resize);
        self.interval_id = Some(interval_id);
        web_sys::console::log_1(&"matrix background: started".into());
        Ok(())
    }

    /// Cancel the redraw timer and the resize subscription
    ///
    /// Safe to call repeatedly; after `stop` the surface is no longer
    /// touched until `start` is called again.
    pub fn stop(&mut self) {
        let was_running = self.interval_id.is_some();
        if let Some(window) = web_sys::window() {
            if let Some(interval_id) = self.interval_id.take() {
                window.clear_interval_with_handle(interval_id);
            }
            if let Some(resize) = self.resize_closure.take() {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            }
        }
        self.interval_id = None;
        self.tick_closure = None;
        self.resize_closure = None;
        if was_running {
            web_sys::console::log_1(&"matrix background: stopped".into());
        }
    }

    /// Draw a single frame, for hosts that drive their own scheduler
    pub fn tick(&mut self) {
        self.inner.borrow_mut().draw();
    }

    /// Apply viewport dimensions explicitly instead of via the resize listener
    pub fn resize(&mut self, width: u32, height: u32) {
        self.inner.borrow_mut().apply_size(width, height);
    }

    /// Number of glyph columns in the grid
    pub fn column_count(&self) -> u32 {
        self.inner.borrow().engine.column_count() as u32
    }

    /// Rendering constants as JSON
    pub fn config_json(&self) -> String {
        serde_json::to_string(self.inner.borrow().engine.config())
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn build(canvas: HtmlCanvasElement, config: RainConfig) -> Result<MatrixBackground, String> {
        let (width, height) = viewport_size()?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "failed to get 2d context".to_string())?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "context is not CanvasRenderingContext2d".to_string())?;

        let surface = Surface::new(width, height);
        let engine = RainEngine::new(config, surface.width());

        Ok(MatrixBackground {
            inner: Rc::new(RefCell::new(Inner {
                canvas,
                ctx,
                surface,
                engine,
            })),
            tick_closure: None,
            resize_closure: None,
            interval_id: None,
        })
    }
}

impl Drop for MatrixBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current window inner dimensions in pixels
fn viewport_size() -> Result<(u32, u32), String> {
    let window = web_sys::window().ok_or("no window")?;
    let width = window
        .inner_width()
        .map_err(|_| "no inner width")?
        .as_f64()
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .map_err(|_| "no inner height")?
        .as_f64()
        .unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}
