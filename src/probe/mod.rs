//! Media probing abstraction
//!
//! The prober is a swappable backend: the production implementation
//! shells out to ffprobe, tests substitute a stub. Whatever the backend,
//! failures never cross this boundary - a file that cannot be probed
//! simply gets no media info.

pub mod ffprobe;

pub use ffprobe::FfprobeProber;

use crate::cancel::CancellationToken;
use std::path::Path;

/// Video attributes extracted from a media file.
///
/// Fetched as an atomic unit: a record either carries the whole block or
/// none of it. Duration and frame rate are reported only when the probed
/// duration is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub width: u32,
    pub height: u32,
    pub codec_name: String,
    pub duration_secs: Option<f64>,
    pub frame_rate: Option<f64>,
}

/// Media probing backend
pub trait MediaProber: Send + Sync {
    /// Probe a file for video attributes.
    ///
    /// Returns `None` on any failure (unsupported format, tool crash,
    /// missing video stream, cancellation) - never an error.
    fn probe(&self, path: &Path, cancel: &CancellationToken) -> Option<MediaInfo>;

    /// Get the name of this prober (for logging)
    fn name(&self) -> &'static str;
}
