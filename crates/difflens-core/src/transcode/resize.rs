//! Image resizing functions for thumbnail and preview generation.
//!
//! Provides resize operations using the `image` crate's algorithms.
//! All functions return new `RasterImage` instances without modifying the
//! input.

use super::{FilterType, TranscodeError};
use crate::raster::RasterImage;

/// Resample an image to exact target dimensions.
///
/// The source is validated before any work happens; a request for the
/// source's own dimensions then returns a plain copy without resampling.
///
/// # Errors
///
/// Returns `TranscodeError::InvalidDimensions` if either target dimension
/// is zero, and `TranscodeError::InvalidPixelData` if the source buffer
/// does not match its declared dimensions.
pub fn resize(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, TranscodeError> {
    if width == 0 || height == 0 {
        return Err(TranscodeError::InvalidDimensions { width, height });
    }

    let Some(src) = image.to_rgba_image() else {
        return Err(TranscodeError::InvalidPixelData {
            expected: image.expected_byte_size(),
            actual: image.pixels.len(),
        });
    };

    if (width, height) == (image.width, image.height) {
        return Ok(image.clone());
    }

    let resampled = image::imageops::resize(&src, width, height, filter.to_image_filter());
    Ok(RasterImage::from_rgba_image(resampled))
}

/// Scale an image uniformly so that its longer edge equals `max_edge`.
///
/// The scale factor is `min(max_edge / width, max_edge / height)`, applied
/// to both dimensions, so the aspect ratio is preserved exactly (no
/// cropping, no letterboxing). Sources smaller than `max_edge` are scaled
/// up through the same path.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `max_edge` - Target length of the longer edge in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `TranscodeError::InvalidDimensions` if `max_edge` is zero.
pub fn resize_to_edge(
    image: &RasterImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<RasterImage, TranscodeError> {
    if max_edge == 0 {
        return Err(TranscodeError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    let (new_width, new_height) = scaled_dimensions(image.width, image.height, max_edge);

    resize(image, new_width, new_height, filter)
}

/// Generate a thumbnail sized for grid display.
///
/// Uses bilinear interpolation: the only downstream consumer is a
/// low-resolution preview, so speed wins over resampling fidelity.
///
/// # Arguments
///
/// * `image` - The source image
/// * `max_edge` - Target length of the longer edge (typically 150)
///
/// # Errors
///
/// Returns `TranscodeError::InvalidDimensions` if `max_edge` is zero.
pub fn thumbnail(image: &RasterImage, max_edge: u32) -> Result<RasterImage, TranscodeError> {
    resize_to_edge(image, max_edge, FilterType::Bilinear)
}

/// Calculate dimensions for a uniform scale where the longer edge becomes
/// `max_edge`. Each dimension has a floor of 1 so extreme aspect ratios
/// never collapse to zero.
fn scaled_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = f64::min(
        max_edge as f64 / width as f64,
        max_edge as f64 / height as f64,
    );

    let new_width = (width as f64 * ratio).round() as u32;
    let new_height = (height as f64 * ratio).round() as u32;
    (new_width.max(1), new_height.max(1))
}
