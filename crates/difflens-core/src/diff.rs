//! Pixel-level difference detection between two equal-sized images.
//!
//! This module implements the comparison engine behind the "difference"
//! view: two RGBA buffers of identical dimensions are scanned pixel by
//! pixel, and pixels whose color distance exceeds a threshold are replaced
//! with a highlight color in the output.
//!
//! The distance metric is the sum of absolute per-channel differences over
//! the three color channels (alpha is excluded), giving a 0-765 scale.
//! This is deliberately cheaper than a perceptual metric: the engine runs
//! interactively on multi-megapixel images, so constant-time-per-pixel
//! arithmetic wins over weighted luminance or CIE distances.
//!
//! # Architecture
//!
//! Designed to be called from Web Workers via WASM bindings. The scan is
//! synchronous and single-threaded; concurrency comes from running each
//! job in its own worker instance.

use crate::raster::RasterImage;
use crate::{DiffOptions, DiffOutcome, DiffStats};
use thiserror::Error;

/// Errors that can occur during difference detection.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The two input images do not have the same dimensions.
    #[error(
        "Image dimensions do not match: {a_width}x{a_height} vs {b_width}x{b_height}"
    )]
    DimensionMismatch {
        a_width: u32,
        a_height: u32,
        b_width: u32,
        b_height: u32,
    },

    /// A pixel buffer length doesn't match its declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Compare two images and produce a highlighted difference image.
///
/// Pixels whose sum-of-absolute-RGB-differences exceeds
/// `options.threshold` are written as `options.highlight`; all other
/// pixels are copied verbatim from `a` (alpha included).
///
/// # Arguments
///
/// * `a` - First input image; unchanged regions pass through from here
/// * `b` - Second input image
/// * `options` - Threshold and highlight color
///
/// # Returns
///
/// A new `RasterImage` with the same dimensions as the inputs.
///
/// # Errors
///
/// Returns `DiffError::DimensionMismatch` if the inputs differ in width or
/// height, and `DiffError::InvalidPixelData` if either buffer length does
/// not match its declared dimensions. No partial output is produced.
///
/// # Example
///
/// ```
/// use difflens_core::{detect_changes, DiffOptions, RasterImage};
///
/// let a = RasterImage::new(1, 1, vec![0, 0, 0, 255]);
/// let b = RasterImage::new(1, 1, vec![200, 0, 0, 255]);
///
/// let diff = detect_changes(&a, &b, &DiffOptions::default()).unwrap();
/// assert_eq!(diff.pixels, vec![255, 0, 0, 255]); // highlighted
/// ```
pub fn detect_changes(
    a: &RasterImage,
    b: &RasterImage,
    options: &DiffOptions,
) -> Result<RasterImage, DiffError> {
    detect_changes_with_stats(a, b, options).map(|outcome| outcome.image)
}

/// Compare two images, also reporting how many pixels crossed the threshold.
///
/// Identical to [`detect_changes`] but gathers a [`DiffStats`] in the same
/// pass, so callers that display a change percentage don't need to rescan
/// the output.
pub fn detect_changes_with_stats(
    a: &RasterImage,
    b: &RasterImage,
    options: &DiffOptions,
) -> Result<DiffOutcome, DiffError> {
    if a.width != b.width || a.height != b.height {
        return Err(DiffError::DimensionMismatch {
            a_width: a.width,
            a_height: a.height,
            b_width: b.width,
            b_height: b.height,
        });
    }

    let expected_len = a.expected_byte_size();
    for input in [a, b] {
        if input.pixels.len() != expected_len {
            return Err(DiffError::InvalidPixelData {
                expected: expected_len,
                actual: input.pixels.len(),
            });
        }
    }

    let mut out = Vec::with_capacity(expected_len);
    let mut changed: u32 = 0;

    for (pa, pb) in a.pixels.chunks_exact(4).zip(b.pixels.chunks_exact(4)) {
        let diff = channel_distance(pa[0], pb[0])
            + channel_distance(pa[1], pb[1])
            + channel_distance(pa[2], pb[2]);

        if diff > options.threshold {
            out.extend_from_slice(&options.highlight);
            changed += 1;
        } else {
            out.extend_from_slice(pa);
        }
    }

    Ok(DiffOutcome {
        image: RasterImage::new(a.width, a.height, out),
        stats: DiffStats {
            changed,
            total: a.pixel_count(),
        },
    })
}

/// Absolute difference of a single channel pair.
#[inline]
fn channel_distance(a: u8, b: u8) -> u16 {
    (a as i16 - b as i16).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_identity_passes_through() {
        let img = solid_image(4, 4, [10, 20, 30, 200]);
        let result = detect_changes(&img, &img, &DiffOptions::default()).unwrap();

        assert_eq!(result.width, 4);
        assert_eq!(result.height, 4);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_identity_holds_for_zero_threshold() {
        // Zero-distance pixels are never highlighted: the comparison is
        // strictly greater-than.
        let img = solid_image(2, 2, [128, 128, 128, 255]);
        let result = detect_changes(&img, &img, &DiffOptions::with_threshold(0)).unwrap();
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_end_to_end_2x2_scenario() {
        // A and B identical except pixel 1, which differs by 765
        let a = RasterImage::new(
            2,
            2,
            vec![
                0, 0, 0, 255, //
                255, 255, 255, 255, //
                10, 10, 10, 255, //
                0, 0, 0, 255,
            ],
        );
        let b = RasterImage::new(
            2,
            2,
            vec![
                0, 0, 0, 255, //
                0, 0, 0, 255, //
                10, 10, 10, 255, //
                0, 0, 0, 255,
            ],
        );

        let result = detect_changes(&a, &b, &DiffOptions::with_threshold(30)).unwrap();

        assert_eq!(&result.pixels[0..4], &[0, 0, 0, 255]);
        assert_eq!(&result.pixels[4..8], &[255, 0, 0, 255]); // highlighted
        assert_eq!(&result.pixels[8..12], &[10, 10, 10, 255]);
        assert_eq!(&result.pixels[12..16], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_threshold_monotonicity() {
        // One pixel differs by exactly 100 in the red channel
        let a = solid_image(2, 2, [0, 0, 0, 255]);
        let mut b = a.clone();
        b.pixels[0] = 100;

        let low = detect_changes_with_stats(&a, &b, &DiffOptions::with_threshold(50)).unwrap();
        assert_eq!(low.stats.changed, 1);

        let high = detect_changes_with_stats(&a, &b, &DiffOptions::with_threshold(150)).unwrap();
        assert_eq!(high.stats.changed, 0);

        // Exactly at the boundary: diff == threshold is not a change
        let exact = detect_changes_with_stats(&a, &b, &DiffOptions::with_threshold(100)).unwrap();
        assert_eq!(exact.stats.changed, 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = solid_image(4, 4, [0, 0, 0, 255]);
        let b = solid_image(5, 5, [0, 0, 0, 255]);

        let result = detect_changes(&a, &b, &DiffOptions::default());
        assert!(matches!(
            result,
            Err(DiffError::DimensionMismatch {
                a_width: 4,
                a_height: 4,
                b_width: 5,
                b_height: 5,
            })
        ));
    }

    #[test]
    fn test_invalid_pixel_data() {
        let a = solid_image(2, 2, [0, 0, 0, 255]);
        let b = RasterImage {
            width: 2,
            height: 2,
            pixels: vec![0u8; 12], // one pixel short
        };

        let result = detect_changes(&a, &b, &DiffOptions::default());
        assert!(matches!(
            result,
            Err(DiffError::InvalidPixelData {
                expected: 16,
                actual: 12,
            })
        ));
    }

    #[test]
    fn test_symmetric_changed_positions() {
        let a = RasterImage::new(
            2,
            1,
            vec![
                0, 0, 0, 255, //
                50, 60, 70, 255,
            ],
        );
        let b = RasterImage::new(
            2,
            1,
            vec![
                0, 0, 0, 255, //
                90, 60, 70, 255,
            ],
        );
        let opts = DiffOptions::with_threshold(30);

        let ab = detect_changes_with_stats(&a, &b, &opts).unwrap();
        let ba = detect_changes_with_stats(&b, &a, &opts).unwrap();

        // Same positions flagged either way; pass-through pixels come from
        // the respective first argument
        assert_eq!(ab.stats.changed, ba.stats.changed);
        assert_eq!(&ab.image.pixels[4..8], &[255, 0, 0, 255]);
        assert_eq!(&ba.image.pixels[4..8], &[255, 0, 0, 255]);
        assert_eq!(&ab.image.pixels[0..4], &a.pixels[0..4]);
        assert_eq!(&ba.image.pixels[0..4], &b.pixels[0..4]);
    }

    #[test]
    fn test_threshold_at_or_above_max_highlights_nothing() {
        let a = solid_image(2, 2, [0, 0, 0, 255]);
        let b = solid_image(2, 2, [255, 255, 255, 255]);

        // Max possible distance is 765, so threshold 765 flags nothing
        let outcome = detect_changes_with_stats(&a, &b, &DiffOptions::with_threshold(765)).unwrap();
        assert_eq!(outcome.stats.changed, 0);
        assert_eq!(outcome.image.pixels, a.pixels);

        let outcome = detect_changes_with_stats(&a, &b, &DiffOptions::with_threshold(764)).unwrap();
        assert_eq!(outcome.stats.changed, 4);
    }

    #[test]
    fn test_alpha_excluded_from_distance() {
        let a = solid_image(1, 1, [100, 100, 100, 255]);
        let b = solid_image(1, 1, [100, 100, 100, 0]);

        // Only alpha differs, so no pixel is highlighted
        let result = detect_changes(&a, &b, &DiffOptions::with_threshold(0)).unwrap();
        assert_eq!(result.pixels, a.pixels);
    }

    #[test]
    fn test_alpha_preserved_on_pass_through() {
        let a = solid_image(1, 1, [10, 10, 10, 42]);
        let result = detect_changes(&a, &a, &DiffOptions::default()).unwrap();
        assert_eq!(result.pixels[3], 42);
    }

    #[test]
    fn test_custom_highlight_color() {
        let a = solid_image(1, 1, [0, 0, 0, 255]);
        let b = solid_image(1, 1, [255, 255, 255, 255]);

        let opts = DiffOptions {
            threshold: 30,
            highlight: [0, 255, 255, 255],
        };
        let result = detect_changes(&a, &b, &opts).unwrap();
        assert_eq!(result.pixels, vec![0, 255, 255, 255]);
    }

    #[test]
    fn test_stats_counts() {
        let a = solid_image(4, 4, [0, 0, 0, 255]);
        let b = solid_image(4, 4, [255, 255, 255, 255]);

        let outcome = detect_changes_with_stats(&a, &b, &DiffOptions::default()).unwrap();
        assert_eq!(outcome.stats.changed, 16);
        assert_eq!(outcome.stats.total, 16);
        assert_eq!(outcome.stats.changed_ratio(), 1.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
