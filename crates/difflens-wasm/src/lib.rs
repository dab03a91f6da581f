//! Difflens WASM - WebAssembly bindings for Difflens
//!
//! This crate provides WASM bindings to expose the difflens-core
//! functionality to JavaScript/TypeScript applications. The exported
//! functions are designed to be called from a Web Worker so that the
//! O(width x height) pixel scans never block the interactive thread.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `diff` - Pixel difference detection bindings
//! - `transcode` - Thumbnail generation and re-encoding bindings
//! - `metrics` - Worker-local job timing collection
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRasterImage, detect_changes } from '@difflens/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Compare two ImageData buffers from a canvas
//! const a = new JsRasterImage(left.width, left.height, new Uint8Array(left.data.buffer));
//! const b = new JsRasterImage(right.width, right.height, new Uint8Array(right.data.buffer));
//! const diff = detect_changes(a, b, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod diff;
mod metrics;
mod transcode;
mod types;

// Re-export public types
pub use diff::{detect_changes, detect_changes_with_stats, JsDiffOutcome};
pub use metrics::JsMetricsRecorder;
pub use transcode::{encode_image, generate_thumbnail, optimize_image, resize_to_edge};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
