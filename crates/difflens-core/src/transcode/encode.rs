//! Image encoding for thumbnails and export.
//!
//! This module encodes RGBA raster data using the `image` crate's codecs:
//! JPEG for the lossy path (with configurable quality) and PNG for the
//! lossless path. Implementing a codec from scratch is explicitly out of
//! scope; the contract here is the signature and the quality semantics.

use super::{OutputFormat, TranscodeError};
use crate::raster::RasterImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

/// Quality used when encoding generated thumbnails.
pub const THUMBNAIL_QUALITY: u8 = 80;

/// Encode an image to a byte blob in the requested format.
///
/// For `OutputFormat::Lossy` the output is JPEG and `quality` controls the
/// compression/fidelity trade-off monotonically (higher quality, larger
/// output, fewer artifacts). JPEG has no alpha channel, so the alpha plane
/// is dropped during encoding. For `OutputFormat::Lossless` the output is
/// PNG with alpha preserved and `quality` is ignored.
///
/// # Arguments
///
/// * `image` - The source image to encode
/// * `format` - Output encoding
/// * `quality` - Quality for the lossy path (0-100; 0 maps to the encoder
///   minimum of 1)
///
/// # Returns
///
/// The encoded bytes on success.
///
/// # Errors
///
/// * `TranscodeError::InvalidQuality` if `quality` exceeds 100 on the
///   lossy path
/// * `TranscodeError::InvalidDimensions` if either dimension is zero
/// * `TranscodeError::InvalidPixelData` if the buffer length doesn't match
///   the declared dimensions
/// * `TranscodeError::EncodingFailed` if the underlying codec fails
///
/// # Example
///
/// ```
/// use difflens_core::{encode, OutputFormat, RasterImage};
///
/// let image = RasterImage::new(100, 100, vec![128u8; 100 * 100 * 4]);
/// let jpeg = encode(&image, OutputFormat::Lossy, 90).unwrap();
///
/// // Verify JPEG magic bytes
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode(
    image: &RasterImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, TranscodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(TranscodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = image.expected_byte_size();
    if image.pixels.len() != expected_len {
        return Err(TranscodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    match format {
        OutputFormat::Lossy => encode_jpeg(image, quality),
        OutputFormat::Lossless => encode_png(image),
    }
}

/// Encode to JPEG, flattening RGBA to RGB.
fn encode_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>, TranscodeError> {
    if quality > 100 {
        return Err(TranscodeError::InvalidQuality(quality));
    }

    // The JPEG encoder's minimum quality is 1
    let quality = quality.max(1);

    // JPEG has no alpha channel; drop the alpha plane
    let mut rgb = Vec::with_capacity(image.pixel_count() as usize * 3);
    for pixel in image.pixels.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode to PNG with alpha preserved.
fn encode_png(image: &RasterImage) -> Result<Vec<u8>, TranscodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn gray_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[128, 128, 128, 255]);
        }
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_encode_lossy_basic() {
        let img = gray_image(100, 100);
        let jpeg = encode(&img, OutputFormat::Lossy, 90).unwrap();

        // Check JPEG SOI marker and EOI marker
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_lossless_basic() {
        let img = gray_image(100, 100);
        let png = encode(&img, OutputFormat::Lossless, 0).unwrap();

        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_quality_bounds() {
        let img = gray_image(10, 10);

        // 0 and 100 are both valid
        assert!(encode(&img, OutputFormat::Lossy, 0).is_ok());
        assert!(encode(&img, OutputFormat::Lossy, 100).is_ok());

        // Above 100 is rejected
        assert!(matches!(
            encode(&img, OutputFormat::Lossy, 101),
            Err(TranscodeError::InvalidQuality(101))
        ));
        assert!(matches!(
            encode(&img, OutputFormat::Lossy, 255),
            Err(TranscodeError::InvalidQuality(255))
        ));
    }

    #[test]
    fn test_encode_lossless_ignores_quality() {
        let img = gray_image(10, 10);

        let a = encode(&img, OutputFormat::Lossless, 0).unwrap();
        let b = encode(&img, OutputFormat::Lossless, 255).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_quality_affects_size() {
        // Gradient image so the quality difference is visible
        let width = 100u32;
        let height = 100u32;
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        let img = RasterImage::new(width, height, pixels);

        let low_q = encode(&img, OutputFormat::Lossy, 10).unwrap();
        let high_q = encode(&img, OutputFormat::Lossy, 95).unwrap();

        assert!(high_q.len() > low_q.len());
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let img = RasterImage::new(0, 100, vec![]);
        assert!(matches!(
            encode(&img, OutputFormat::Lossy, 90),
            Err(TranscodeError::InvalidDimensions { .. })
        ));

        let img = RasterImage::new(100, 0, vec![]);
        assert!(matches!(
            encode(&img, OutputFormat::Lossless, 90),
            Err(TranscodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_invalid_pixel_data() {
        let img = RasterImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 4], // one row short
        };
        assert!(matches!(
            encode(&img, OutputFormat::Lossy, 90),
            Err(TranscodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_single_pixel() {
        let img = RasterImage::new(1, 1, vec![255, 0, 0, 255]);

        let jpeg = encode(&img, OutputFormat::Lossy, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode(&img, OutputFormat::Lossless, 90).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_non_square() {
        let wide = gray_image(200, 50);
        assert!(encode(&wide, OutputFormat::Lossy, 90).is_ok());

        let tall = gray_image(50, 200);
        assert!(encode(&tall, OutputFormat::Lossy, 90).is_ok());
    }

    #[test]
    fn test_thumbnail_quality_in_range() {
        assert!(THUMBNAIL_QUALITY <= 100);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
