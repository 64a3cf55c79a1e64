//! Animated glyph-rain background for the portfolio site
//!
//! This crate renders the falling-binary "digital rain" effect that sits
//! behind the page content:
//!
//! - Full-viewport drawing surface, kept in sync with window resizes
//! - Per-column falling trails advanced on a fixed-rate tick
//! - Fading-trail compositing (the surface is dimmed, never cleared)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`config`]: Per-session rendering constants ([`RainConfig`])
//! - [`surface`]: Viewport-sized drawing surface dimensions
//! - [`columns`]: Per-column trail offsets ([`ColumnTrails`])
//! - [`engine`]: The per-tick rain algorithm ([`RainEngine`])
//! - [`paint`]: Draw-call seam between the engine and a raster target
//! - [`rng`]: Randomness seam for deterministic testing
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Injectable Seams**: Randomness and drawing go through traits so ticks are deterministic in tests
//! 3. **Small Modules**: Each file stays small and focused
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod columns;
pub mod config;
pub mod engine;
pub mod paint;
pub mod rng;
pub mod surface;

// Browser bindings (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::MatrixBackground;

// Re-export core types for convenience
pub use columns::ColumnTrails;
pub use config::RainConfig;
pub use engine::RainEngine;
pub use paint::GlyphPainter;
pub use rng::{RandomSource, SplitMix64};
pub use surface::Surface;
