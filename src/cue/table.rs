//! Disguise cue table file format
//!
//! A cue table export starts with a line `Cue table for <track name>`
//! followed by a tab-delimited table with a header row. Files are
//! written back with CRLF line endings, matching what disguise emits.

use crate::error::{DisguiseToolError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static HEADER_LINE_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Cue table for (.+)$").expect("valid regex"));

/// One row of a cue table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueTableEntry {
    #[serde(rename = "Beat")]
    pub beat: i32,
    #[serde(rename = "Tag")]
    pub tag: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Track_Time")]
    pub track_time: Option<String>,
    #[serde(rename = "TC_Time")]
    pub tc_time: Option<String>,
}

/// A parsed disguise cue table
#[derive(Debug, Clone, PartialEq)]
pub struct CueTable {
    pub track_name: String,
    pub entries: Vec<CueTableEntry>,
}

impl CueTable {
    /// Read and parse a cue table file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse cue table text.
    pub fn parse(content: &str) -> Result<Self> {
        if content.is_empty() {
            return Err(DisguiseToolError::CueTableFormat(
                "cue table file is empty".to_string(),
            ));
        }

        let (header_line, rest) = content.split_once('\n').unwrap_or((content, ""));
        let header_line = header_line.trim_end_matches('\r');

        let captures = HEADER_LINE_EXPRESSION.captures(header_line).ok_or_else(|| {
            DisguiseToolError::CueTableFormat(
                "first line should contain 'Cue table for [Track Name]'".to_string(),
            )
        })?;
        let track_name = captures[1].to_string();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(rest.as_bytes());
        let entries = reader
            .deserialize()
            .collect::<std::result::Result<Vec<CueTableEntry>, csv::Error>>()
            .map_err(|e| DisguiseToolError::CueTableFormat(e.to_string()))?;

        Ok(Self {
            track_name,
            entries,
        })
    }

    /// Write the table back out in disguise's own format.
    pub fn write(&self, path: &Path) -> Result<()> {
        let output_error = |reason: String| DisguiseToolError::Output {
            path: path.to_path_buf(),
            reason,
        };

        let mut table = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .terminator(csv::Terminator::CRLF)
                .from_writer(&mut table);
            for entry in &self.entries {
                writer
                    .serialize(entry)
                    .map_err(|e| output_error(e.to_string()))?;
            }
            writer.flush().map_err(|e| output_error(e.to_string()))?;
        }

        let mut content = format!("Cue table for {}\r\n", self.track_name).into_bytes();
        content.extend_from_slice(&table);
        std::fs::write(path, content).map_err(|e| DisguiseToolError::output_error(path, e))
    }
}
