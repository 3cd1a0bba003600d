//! Cue list conversion for lighting consoles
//!
//! Pulls `CUE <number>` tags out of a cue table and writes them as a
//! CSV cue list for import into an Eos-family console.

use crate::cue::number::DmxCueNumber;
use crate::cue::table::{CueTable, CueTableEntry};
use crate::error::{DisguiseToolError, Result};
use clap::ValueEnum;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, warn};

static CUE_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CUE ([0-9.]+)$").expect("valid regex"));

/// Output cue list format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CueListFormat {
    /// CSV importable by ETC Eos consoles
    EosCsv,
}

/// Which cue tags to carry over into the cue list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CueSelectMode {
    /// All cue tags
    All,
    /// Only cues in DMX XX.YY.ZZ format
    DmxOnly,
    /// Only cues in standard decimal format
    StandardOnly,
}

/// A cue extracted from the table, ready for console import
#[derive(Debug, Clone, PartialEq)]
pub struct LxCue {
    /// Cue number as it will appear on the console
    pub number: String,
    /// Numeric value used for ordering
    pub value: f64,
    /// True when the tag used the DMX XX.YY.ZZ format
    pub dmx_format: bool,
    pub label: Option<String>,
    pub timecode: Option<String>,
}

/// Extract the cues matching the select mode, ordered by cue number.
pub fn extract_cues(table: &CueTable, select_mode: CueSelectMode) -> Vec<LxCue> {
    let mut cues: Vec<LxCue> = table.entries.iter().filter_map(cue_from_entry).collect();

    cues.retain(|cue| match select_mode {
        CueSelectMode::All => true,
        CueSelectMode::DmxOnly => cue.dmx_format,
        CueSelectMode::StandardOnly => !cue.dmx_format,
    });
    cues.sort_by(|a, b| a.value.total_cmp(&b.value));

    info!(
        "Extracted {} cues from track '{}'",
        cues.len(),
        table.track_name
    );
    cues
}

fn cue_from_entry(entry: &CueTableEntry) -> Option<LxCue> {
    let tag = entry.tag.as_deref()?;
    let captures = CUE_EXPRESSION.captures(tag)?;
    let raw = &captures[1];

    if let Ok(dmx) = DmxCueNumber::parse(raw) {
        return Some(LxCue {
            number: dmx.to_string(),
            value: dmx.value(),
            dmx_format: true,
            label: entry.note.clone(),
            timecode: entry.tc_time.clone(),
        });
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(LxCue {
            number: raw.to_string(),
            value,
            dmx_format: false,
            label: entry.note.clone(),
            timecode: entry.tc_time.clone(),
        }),
        _ => {
            warn!("Ignoring unparseable cue tag '{tag}'");
            None
        }
    }
}

/// Write a cue list as Eos-importable CSV.
pub fn write_eos_csv(cues: &[LxCue], path: &Path) -> Result<()> {
    let output_error = |reason: String| DisguiseToolError::Output {
        path: path.to_path_buf(),
        reason,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| output_error(e.to_string()))?;
    writer
        .write_record(["Cue", "Label", "Timecode"])
        .map_err(|e| output_error(e.to_string()))?;
    for cue in cues {
        writer
            .write_record([
                cue.number.as_str(),
                cue.label.as_deref().unwrap_or_default(),
                cue.timecode.as_deref().unwrap_or_default(),
            ])
            .map_err(|e| output_error(e.to_string()))?;
    }
    writer.flush().map_err(DisguiseToolError::Io)?;

    info!("Wrote {} cues to {}", cues.len(), path.display());
    Ok(())
}
