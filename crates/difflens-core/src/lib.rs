//! Difflens Core - Image comparison library
//!
//! This crate provides the core image processing functionality for Difflens,
//! including pixel-level difference detection, thumbnail generation, and
//! quality-controlled re-encoding.

pub mod diff;
pub mod metrics;
pub mod raster;
pub mod transcode;

pub use diff::{detect_changes, detect_changes_with_stats, DiffError};
pub use raster::RasterImage;
pub use transcode::{encode, thumbnail, FilterType, OutputFormat, TranscodeError};

/// Sensitivity settings for the difference engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffOptions {
    /// Color distance threshold above which a pixel is marked as changed.
    /// The distance is the sum of absolute per-channel RGB differences,
    /// so the useful range is 0 to 765 (255 * 3).
    #[serde(default = "default_threshold")]
    pub threshold: u16,
    /// RGBA color written over pixels that exceed the threshold.
    #[serde(default = "default_highlight")]
    pub highlight: [u8; 4],
}

fn default_threshold() -> u16 {
    30
}

fn default_highlight() -> [u8; 4] {
    [255, 0, 0, 255]
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            highlight: default_highlight(),
        }
    }
}

impl DiffOptions {
    /// Create options with the default threshold and highlight color
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with a custom threshold and the default highlight color
    pub fn with_threshold(threshold: u16) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Summary of a difference scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffStats {
    /// Number of pixels that exceeded the threshold
    pub changed: u32,
    /// Total number of pixels scanned
    pub total: u32,
}

impl DiffStats {
    /// Fraction of pixels marked as changed (0.0 to 1.0)
    pub fn changed_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.changed as f64 / self.total as f64
    }

    /// Check whether any pixel crossed the threshold
    pub fn has_changes(&self) -> bool {
        self.changed > 0
    }
}

/// A difference image together with its scan summary
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    /// The highlighted difference image
    pub image: RasterImage,
    /// Changed/total pixel counts gathered during the scan
    pub stats: DiffStats,
}
