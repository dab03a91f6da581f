//! Raster transcoding pipeline for Difflens.
//!
//! This module provides functionality for:
//! - Resizing images for thumbnail and preview generation
//! - Encoding images to lossy (JPEG) or lossless (PNG) output
//!
//! # Architecture
//!
//! The transcoding pipeline is designed to be used from Web Workers via
//! WASM bindings. All operations are synchronous and single-threaded;
//! the caller schedules each job off the interactive thread.
//!
//! # Examples
//!
//! ```ignore
//! use difflens_core::transcode::{encode, thumbnail, OutputFormat};
//!
//! let thumb = thumbnail(&image, 150).unwrap();
//! let jpeg_bytes = encode(&thumb, OutputFormat::Lossy, 80).unwrap();
//! ```

mod encode;
mod resize;
mod types;

pub use encode::{encode, THUMBNAIL_QUALITY};
pub use resize::{resize, resize_to_edge, thumbnail};
pub use types::{FilterType, OutputFormat, TranscodeError};
