//! Raster transcoding WASM bindings.
//!
//! This module exposes the difflens-core resize and encode functions to
//! JavaScript. The worker script's `generateThumbnail` and `optimizeImage`
//! messages map directly onto [`generate_thumbnail`] and
//! [`optimize_image`].
//!
//! # Functions
//!
//! - [`generate_thumbnail`] - Downscale to a target edge and encode as a lossy blob
//! - [`optimize_image`] - Re-encode at a caller-controlled lossy quality
//! - [`encode_image`] - Encode with an explicit format ("lossy" or "lossless")
//! - [`resize_to_edge`] - Uniform scale returning pixels instead of a blob
//!
//! # Example
//!
//! ```typescript
//! import { generate_thumbnail, optimize_image } from '@difflens/wasm';
//!
//! const thumbBytes = generate_thumbnail(image, 150);
//! const blob = new Blob([thumbBytes], { type: 'image/jpeg' });
//!
//! const optimized = optimize_image(image, 85);
//! ```

use crate::types::{filter_from_u8, JsRasterImage};
use difflens_core::transcode::{self, OutputFormat, THUMBNAIL_QUALITY};
use wasm_bindgen::prelude::*;

/// Validate a JavaScript quality number for the lossy path.
///
/// JavaScript callers can pass any number, so the range check happens here
/// on an `i32` before narrowing to the core's `u8`.
fn quality_from_i32(quality: i32) -> Result<u8, JsValue> {
    if !(0..=100).contains(&quality) {
        return Err(JsValue::from_str(&format!(
            "Invalid quality: {} (expected 0-100)",
            quality
        )));
    }
    Ok(quality as u8)
}

/// Generate a thumbnail blob from an image.
///
/// Scales the image uniformly so its longer edge equals `max_edge`
/// (bilinear filtering), then encodes it as a lossy JPEG at the preview
/// quality (80).
///
/// # Arguments
///
/// * `image` - The source image
/// * `max_edge` - Target length of the longer edge in pixels (typically 150)
///
/// # Returns
///
/// A `Uint8Array` of JPEG bytes, suitable for
/// `new Blob([bytes], { type: 'image/jpeg' })`.
///
/// # Errors
///
/// Returns an error if `max_edge` is zero or encoding fails.
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsRasterImage, max_edge: u32) -> Result<Vec<u8>, JsValue> {
    let thumb = transcode::thumbnail(image.as_raster(), max_edge)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    transcode::encode(&thumb, OutputFormat::Lossy, THUMBNAIL_QUALITY)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-encode an image as a lossy blob at the requested quality.
///
/// # Arguments
///
/// * `image` - The source image
/// * `quality` - Lossy quality (0-100; higher quality, larger output)
///
/// # Returns
///
/// A `Uint8Array` of JPEG bytes.
///
/// # Errors
///
/// Returns an error if `quality` is outside 0-100 or encoding fails.
#[wasm_bindgen]
pub fn optimize_image(image: &JsRasterImage, quality: i32) -> Result<Vec<u8>, JsValue> {
    let quality = quality_from_i32(quality)?;
    transcode::encode(image.as_raster(), OutputFormat::Lossy, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image in an explicitly named format.
///
/// # Arguments
///
/// * `image` - The source image
/// * `format` - `"lossy"` (JPEG) or `"lossless"` (PNG)
/// * `quality` - Lossy quality (0-100); ignored for the lossless path
///
/// # Returns
///
/// A `Uint8Array` of encoded bytes.
///
/// # Errors
///
/// Returns an error if the format name is unknown, `quality` is outside
/// 0-100 on the lossy path, or encoding fails.
#[wasm_bindgen]
pub fn encode_image(
    image: &JsRasterImage,
    format: &str,
    quality: i32,
) -> Result<Vec<u8>, JsValue> {
    let format = OutputFormat::parse(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let quality = match format {
        OutputFormat::Lossy => quality_from_i32(quality)?,
        // Quality is ignored for lossless output
        OutputFormat::Lossless => 0,
    };
    transcode::encode(image.as_raster(), format, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scale an image uniformly so its longer edge equals `max_edge`,
/// returning the pixels rather than an encoded blob.
///
/// # Arguments
///
/// * `image` - The source image
/// * `max_edge` - Target length of the longer edge in pixels
/// * `filter` - Filter type (0 = Nearest, 1 = Bilinear, 2 = Lanczos3)
///
/// # Errors
///
/// Returns an error if `max_edge` is zero.
#[wasm_bindgen]
pub fn resize_to_edge(
    image: &JsRasterImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    transcode::resize_to_edge(image.as_raster(), max_edge, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
