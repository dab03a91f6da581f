//! Core types for raster transcoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for transcoding operations.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// A target dimension is zero.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Lossy quality outside the 0-100 range.
    #[error("Invalid quality: {0} (expected 0-100)")]
    InvalidQuality(u8),

    /// The requested output format has no available encoder.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying codec failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Output encoding for the re-encode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JPEG encoding; quality controls the compression/fidelity trade-off.
    Lossy,
    /// PNG encoding; quality is ignored.
    Lossless,
}

impl OutputFormat {
    /// Parse the wire name used at the worker boundary.
    pub fn parse(name: &str) -> Result<Self, TranscodeError> {
        match name {
            "lossy" => Ok(OutputFormat::Lossy),
            "lossless" => Ok(OutputFormat::Lossless),
            other => Err(TranscodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Lossy => "image/jpeg",
            OutputFormat::Lossless => "image/png",
        }
    }
}
