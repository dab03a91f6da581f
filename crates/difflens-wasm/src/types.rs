//! JavaScript-facing wrapper types.
//!
//! The worker script hands pixel buffers across the WASM boundary as plain
//! `Uint8Array`s; this module wraps them in an exported class so the diff
//! and transcode bindings can borrow the underlying [`RasterImage`] without
//! copying it again per call.

use difflens_core::transcode::FilterType;
use difflens_core::RasterImage;
use wasm_bindgen::prelude::*;

/// Pixel buffer handle exported to JavaScript.
///
/// Holds a [`RasterImage`] whose layout matches a canvas `ImageData`
/// buffer: RGBA order, 4 bytes per pixel, rows top to bottom. A worker can
/// construct one straight from `imageData.data` and pass it to any of the
/// exported functions.
///
/// The pixels stay in WASM linear memory for the lifetime of the handle;
/// `pixels()` copies them out to JavaScript on each call, and wasm-bindgen's
/// generated `free()` releases the handle early if the caller wants to.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Wrap a pixel buffer supplied by JavaScript.
    ///
    /// The buffer is expected to hold `width * height * 4` RGBA bytes, as
    /// in a canvas `ImageData`. A mismatched length is reported as a typed
    /// error by the first operation that consumes the image.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            inner: RasterImage {
                width,
                height,
                pixels,
            },
        }
    }

    /// Image width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Image height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Length of the pixel buffer in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Copy the RGBA bytes out to a JavaScript `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsRasterImage {
    /// Take ownership of a core image produced by a binding.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    /// Lend the wrapped image to a core function.
    pub(crate) fn as_raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Map the numeric filter code used at the worker boundary onto a core
/// [`FilterType`]: 0 selects Nearest, 1 Bilinear, 2 Lanczos3. Unknown codes
/// select the default filter (Bilinear).
pub(crate) fn filter_from_u8(code: u8) -> FilterType {
    match code {
        0 => FilterType::Nearest,
        1 => FilterType::Bilinear,
        2 => FilterType::Lanczos3,
        _ => FilterType::default(),
    }
}
