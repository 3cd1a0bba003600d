//! Audit records and the per-file record builder

use crate::error::{DisguiseToolError, Result};
use crate::probe::MediaInfo;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

/// One row of the audit report: a single qualifying file.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    /// Project path as supplied in the request
    pub project_path: String,
    /// Path relative to the scan root, final extension stripped
    pub file_name: String,
    /// Extension without its leading dot; empty when the file has none
    pub extension: String,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    /// File length in binary megabytes (bytes / 1024^2)
    pub size_mb: f64,
    /// Video attributes, attached as an atomic block or absent
    pub media: Option<MediaInfo>,
}

impl AuditRecord {
    /// Produce the enriched replacement of this record with media info attached.
    pub fn with_media(mut self, media: MediaInfo) -> Self {
        self.media = Some(media);
        self
    }
}

/// Build the base audit record for one file.
///
/// Fails with a recoverable `FileAccess` when the file's metadata cannot
/// be read (permission denied, deleted mid-scan); the caller skips the
/// file and continues.
pub fn build_record(scan_root: &Path, project_path: &str, file_path: &Path) -> Result<AuditRecord> {
    let metadata = std::fs::metadata(file_path)
        .map_err(|e| DisguiseToolError::file_access(file_path, e.to_string()))?;

    let relative = file_path
        .strip_prefix(scan_root)
        .map_err(|e| DisguiseToolError::file_access(file_path, e.to_string()))?;

    let file_name = relative.with_extension("").to_string_lossy().into_owned();
    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_string();

    let modified = metadata
        .modified()
        .map_err(|e| DisguiseToolError::file_access(file_path, e.to_string()))?;
    // Creation time is unavailable on some filesystems; fall back to mtime
    let created = metadata.created().unwrap_or(modified);

    Ok(AuditRecord {
        project_path: project_path.to_string(),
        file_name,
        extension,
        created: to_local(created),
        modified: to_local(modified),
        size_mb: metadata.len() as f64 / 1024.0 / 1024.0,
        media: None,
    })
}

fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_is_relative_with_extension_stripped() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        let file = root.path().join("sub").join("image.png");
        fs::write(&file, b"png").unwrap();

        let record = build_record(root.path(), "/show/project", &file).unwrap();
        assert_eq!(record.file_name, Path::new("sub").join("image").to_string_lossy());
        assert_eq!(record.extension, "png");
        assert_eq!(record.project_path, "/show/project");
        assert!(record.media.is_none());
    }

    #[test]
    fn test_file_without_extension() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("README");
        fs::write(&file, b"hello").unwrap();

        let record = build_record(root.path(), "p", &file).unwrap();
        assert_eq!(record.file_name, "README");
        assert_eq!(record.extension, "");
    }

    #[test]
    fn test_size_in_binary_megabytes() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("half.bin");
        fs::write(&file, vec![0u8; 512 * 1024]).unwrap();

        let record = build_record(root.path(), "p", &file).unwrap();
        assert!((record.size_mb - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_is_recoverable_access_failure() {
        let root = TempDir::new().unwrap();
        let err = build_record(root.path(), "p", &root.path().join("gone.mov")).unwrap_err();
        assert!(matches!(err, DisguiseToolError::FileAccess { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_with_media_replaces_the_bare_record() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("clip.mov");
        fs::write(&file, b"mov").unwrap();

        let base = build_record(root.path(), "p", &file).unwrap();
        let enriched = base.clone().with_media(MediaInfo {
            width: 1920,
            height: 1080,
            codec_name: "prores".into(),
            duration_secs: Some(10.0),
            frame_rate: Some(25.0),
        });
        assert!(enriched.media.is_some());
        assert_eq!(enriched.file_name, base.file_name);
    }
}
