//! ffprobe-backed media prober
//!
//! Runs `ffprobe -print_format json -show_streams -show_format` once per
//! file and extracts the first video stream. The child process is polled
//! so an in-flight probe aborts promptly when the run is cancelled.

use crate::cancel::CancellationToken;
use crate::probe::{MediaInfo, MediaProber};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Interval between child process liveness/cancellation checks
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Media prober that shells out to ffprobe
pub struct FfprobeProber {
    binary: PathBuf,
}

impl FfprobeProber {
    /// Create a prober using the given ffprobe binary, or `ffprobe` from
    /// the search path when none is supplied.
    pub fn new(binary: Option<PathBuf>) -> Self {
        Self {
            binary: binary.unwrap_or_else(|| PathBuf::from("ffprobe")),
        }
    }
}

impl MediaProber for FfprobeProber {
    fn probe(&self, path: &Path, cancel: &CancellationToken) -> Option<MediaInfo> {
        let mut child = match Command::new(&self.binary)
            .arg("-v")
            .arg("quiet")
            .arg("-print_format")
            .arg("json")
            .arg("-show_streams")
            .arg("-show_format")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Failed to spawn {}: {}", self.binary.display(), e);
                return None;
            }
        };

        // Drain stdout on a separate thread so a large report cannot fill
        // the pipe and stall the child while we poll for exit.
        let mut stdout = child.stdout.take()?;
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let status = loop {
            if cancel.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                debug!("Probe cancelled for {}", path.display());
                return None;
            }
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    debug!("Failed to wait on ffprobe for {}: {}", path.display(), e);
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = reader.join();
                    return None;
                }
            }
        };

        let output = reader.join().ok()?.ok()?;

        if !status.success() {
            debug!("ffprobe failed for {} ({})", path.display(), status);
            return None;
        }

        let info = media_info_from_json(&output);
        if info.is_none() {
            debug!("No usable video stream in {}", path.display());
        }
        info
    }

    fn name(&self) -> &'static str {
        "ffprobe"
    }
}

// =============================================================================
// ffprobe JSON output schema (the fields we consume)
// =============================================================================

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
    avg_frame_rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Extract media info from raw ffprobe JSON output.
///
/// Requires a video stream with width, height and codec name; duration
/// and frame rate are kept only when the probed duration is strictly
/// greater than zero.
fn media_info_from_json(json: &[u8]) -> Option<MediaInfo> {
    let output: FfprobeOutput = serde_json::from_slice(json).ok()?;

    let video = output
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))?;

    let width = video.width?;
    let height = video.height?;
    let codec_name = video.codec_name.clone()?;

    // Stream duration when present, container duration otherwise
    let duration = video
        .duration
        .as_deref()
        .or(output.format.as_ref().and_then(|f| f.duration.as_deref()))
        .and_then(|d| d.parse::<f64>().ok());

    let (duration_secs, frame_rate) = match duration {
        Some(d) if d > 0.0 => (
            Some(d),
            video.avg_frame_rate.as_deref().and_then(parse_frame_rate),
        ),
        _ => (None, None),
    };

    Some(MediaInfo {
        width,
        height,
        codec_name,
        duration_secs,
        frame_rate,
    })
}

/// Parse an ffprobe rational frame rate such as "30000/1001"
fn parse_frame_rate(value: &str) -> Option<f64> {
    let (num, den) = value.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 || !num.is_finite() {
        return None;
    }
    let rate = num / den;
    (rate > 0.0).then_some(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(duration: &str) -> String {
        format!(
            r#"{{
                "streams": [
                    {{"codec_type": "audio", "codec_name": "aac"}},
                    {{
                        "codec_type": "video",
                        "codec_name": "prores",
                        "width": 1920,
                        "height": 1080,
                        "duration": "{duration}",
                        "avg_frame_rate": "30000/1001"
                    }}
                ],
                "format": {{"duration": "{duration}"}}
            }}"#
        )
    }

    #[test]
    fn test_extracts_first_video_stream() {
        let info = media_info_from_json(sample_json("12.5").as_bytes()).unwrap();
        assert_eq!(info.width, 1920);
        assert_eq!(info.height, 1080);
        assert_eq!(info.codec_name, "prores");
        assert_eq!(info.duration_secs, Some(12.5));
        let fps = info.frame_rate.unwrap();
        assert!((fps - 29.97).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_suppresses_duration_and_frame_rate() {
        let info = media_info_from_json(sample_json("0.0").as_bytes()).unwrap();
        assert_eq!(info.width, 1920);
        assert_eq!(info.codec_name, "prores");
        assert_eq!(info.duration_secs, None);
        assert_eq!(info.frame_rate, None);
    }

    #[test]
    fn test_no_video_stream_is_no_media_info() {
        let json = r#"{"streams": [{"codec_type": "audio", "codec_name": "aac"}]}"#;
        assert!(media_info_from_json(json.as_bytes()).is_none());
    }

    #[test]
    fn test_falls_back_to_container_duration() {
        let json = r#"{
            "streams": [{
                "codec_type": "video",
                "codec_name": "h264",
                "width": 1280,
                "height": 720,
                "avg_frame_rate": "25/1"
            }],
            "format": {"duration": "3.0"}
        }"#;
        let info = media_info_from_json(json.as_bytes()).unwrap();
        assert_eq!(info.duration_secs, Some(3.0));
        assert_eq!(info.frame_rate, Some(25.0));
    }

    #[test]
    fn test_invalid_json_is_no_media_info() {
        assert!(media_info_from_json(b"not json").is_none());
    }

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(parse_frame_rate("25/1"), Some(25.0));
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("30"), None);
        assert_eq!(parse_frame_rate("x/y"), None);
    }

    #[test]
    fn test_spawn_failure_degrades_to_none() {
        let prober = FfprobeProber::new(Some(PathBuf::from("/nonexistent/ffprobe-binary")));
        let cancel = CancellationToken::new();
        assert!(prober.probe(Path::new("/tmp/clip.mov"), &cancel).is_none());
    }
}
