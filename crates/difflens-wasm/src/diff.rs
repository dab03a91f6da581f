//! Difference engine WASM bindings.
//!
//! This module exposes the difflens-core change detection to JavaScript.
//! The worker script's `detectChanges` message maps directly onto
//! [`detect_changes`].
//!
//! # Example
//!
//! ```typescript
//! import { JsRasterImage, detect_changes } from '@difflens/wasm';
//!
//! const a = new JsRasterImage(imageDataA.width, imageDataA.height,
//!                             new Uint8Array(imageDataA.data.buffer));
//! const b = new JsRasterImage(imageDataB.width, imageDataB.height,
//!                             new Uint8Array(imageDataB.data.buffer));
//!
//! // Default sensitivity (threshold 30, red highlight)
//! const diff = detect_changes(a, b, undefined);
//!
//! // Custom sensitivity
//! const diff2 = detect_changes(a, b, { threshold: 60, highlight: [255, 0, 255, 255] });
//! ```

use crate::types::JsRasterImage;
use difflens_core::diff;
use difflens_core::{DiffOptions, DiffOutcome};
use wasm_bindgen::prelude::*;

/// Parse an optional `{ threshold, highlight }` object from JavaScript.
///
/// `undefined`/`null` means default options. Missing fields fall back to
/// their defaults (threshold 30, opaque red highlight).
fn options_from_js(value: JsValue) -> Result<DiffOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DiffOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compare two equal-sized images and produce a highlighted difference image.
///
/// Pixels whose sum-of-absolute-RGB-differences exceeds the threshold are
/// written as the highlight color; all other pixels are copied verbatim
/// from the first image, alpha included.
///
/// # Arguments
///
/// * `a` - First input image; unchanged regions pass through from here
/// * `b` - Second input image (must have the same dimensions as `a`)
/// * `options` - Optional `{ threshold, highlight }` object; pass
///   `undefined` for the defaults (threshold 30, highlight `[255,0,0,255]`)
///
/// # Returns
///
/// A new `JsRasterImage` with the same dimensions as the inputs.
///
/// # Errors
///
/// Returns an error if:
/// - The images differ in width or height
/// - Either pixel buffer doesn't match its declared dimensions
/// - The options object doesn't deserialize
#[wasm_bindgen]
pub fn detect_changes(
    a: &JsRasterImage,
    b: &JsRasterImage,
    options: JsValue,
) -> Result<JsRasterImage, JsValue> {
    let options = options_from_js(options)?;
    diff::detect_changes(a.as_raster(), b.as_raster(), &options)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Result of a difference scan, with changed-pixel counts.
///
/// Returned by [`detect_changes_with_stats`] so the UI can show a change
/// percentage without rescanning the output image.
#[wasm_bindgen]
pub struct JsDiffOutcome {
    outcome: DiffOutcome,
}

#[wasm_bindgen]
impl JsDiffOutcome {
    /// Number of pixels that exceeded the threshold
    #[wasm_bindgen(getter)]
    pub fn changed(&self) -> u32 {
        self.outcome.stats.changed
    }

    /// Total number of pixels scanned
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.outcome.stats.total
    }

    /// Fraction of pixels marked as changed (0.0 to 1.0)
    pub fn changed_ratio(&self) -> f64 {
        self.outcome.stats.changed_ratio()
    }

    /// The highlighted difference image.
    ///
    /// Note: This copies the pixel data into a fresh `JsRasterImage`.
    pub fn image(&self) -> JsRasterImage {
        JsRasterImage::from_raster(self.outcome.image.clone())
    }
}

/// Compare two images and report both the difference image and how many
/// pixels changed.
///
/// Identical to [`detect_changes`] except the result also carries the
/// changed/total pixel counts gathered during the same scan.
///
/// # Example
///
/// ```typescript
/// const outcome = detect_changes_with_stats(a, b, { threshold: 30 });
/// console.log(`${(outcome.changed_ratio() * 100).toFixed(1)}% changed`);
/// const diffImage = outcome.image();
/// ```
#[wasm_bindgen]
pub fn detect_changes_with_stats(
    a: &JsRasterImage,
    b: &JsRasterImage,
    options: JsValue,
) -> Result<JsDiffOutcome, JsValue> {
    let options = options_from_js(options)?;
    diff::detect_changes_with_stats(a.as_raster(), b.as_raster(), &options)
        .map(|outcome| JsDiffOutcome { outcome })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
