//! CSV report writer
//!
//! One header row, one row per audit record, fixed column order. The
//! four media columns are emitted for every row (empty when absent) so
//! the schema stays rectangular.

use crate::audit::AuditRecord;
use crate::error::{DisguiseToolError, Result};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Report column headers, in output order
pub const HEADERS: [&str; 11] = [
    "ProjectPath",
    "FileName",
    "Extensions",
    "Creation Time",
    "Last Write Time",
    "Size (MB)",
    "Width",
    "Height",
    "Codec Name",
    "Duration",
    "Framerate",
];

/// Sortable timestamp rendering for the two time columns
const SORTABLE_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";

/// Build the timestamped report file name for an output stem
pub fn report_file_name(stem: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", stem, now.format("%Y%m%d_%H%M%S"))
}

/// Write the audit report to the given path.
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents a partial report if the write is interrupted.
pub fn write_report(records: &[AuditRecord], output_path: &Path) -> Result<()> {
    let temp_path = output_path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| DisguiseToolError::output_error(output_path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let result = write_rows(&mut writer, records, output_path);
    drop(writer);

    if let Err(e) = result {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    std::fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        DisguiseToolError::Output {
            path: output_path.to_path_buf(),
            reason: format!("Failed to finalize file: {e}"),
        }
    })?;

    info!(
        "Wrote {} records to {}",
        records.len(),
        output_path.display()
    );

    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[AuditRecord],
    output_path: &Path,
) -> Result<()> {
    let csv_error = |e: csv::Error| DisguiseToolError::Output {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    };

    writer.write_record(HEADERS).map_err(csv_error)?;
    for record in records {
        writer.write_record(record_row(record)).map_err(csv_error)?;
    }
    writer.flush().map_err(DisguiseToolError::Io)?;
    Ok(())
}

/// Render one record as report cells, in header order
fn record_row(record: &AuditRecord) -> [String; 11] {
    let (width, height, codec_name, duration, frame_rate) = match &record.media {
        Some(media) => (
            media.width.to_string(),
            media.height.to_string(),
            media.codec_name.clone(),
            media
                .duration_secs
                .map(|d| format!("{d:.3}"))
                .unwrap_or_default(),
            media
                .frame_rate
                .map(|f| format!("{f:.2}"))
                .unwrap_or_default(),
        ),
        None => Default::default(),
    };

    [
        record.project_path.clone(),
        record.file_name.clone(),
        record.extension.clone(),
        record.created.format(SORTABLE_TIMESTAMP).to_string(),
        record.modified.format(SORTABLE_TIMESTAMP).to_string(),
        format!("{:.2}", record.size_mb),
        width,
        height,
        codec_name,
        duration,
        frame_rate,
    ]
}
