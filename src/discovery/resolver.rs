//! Scan-root resolution
//!
//! A disguise project keeps its media under an `objects` subdirectory;
//! raw mode scans the supplied path directly instead.

use crate::error::{DisguiseToolError, Result};
use std::path::{Path, PathBuf};

/// Subdirectory of a project that holds the media assets
pub const OBJECTS_DIR: &str = "objects";

/// Resolve the directory that will actually be walked for a project path.
///
/// In raw mode the project path itself is the scan root. Otherwise the
/// scan root is `<project>/objects`, and a missing `objects` directory is
/// reported separately from a missing project path so the operator gets
/// the raw-mode hint.
pub fn resolve_scan_root(project_path: &Path, raw_mode: bool) -> Result<PathBuf> {
    if raw_mode {
        if project_path.is_dir() {
            Ok(project_path.to_path_buf())
        } else {
            Err(DisguiseToolError::ProjectNotFound(
                project_path.to_path_buf(),
            ))
        }
    } else {
        if !project_path.is_dir() {
            return Err(DisguiseToolError::ProjectNotFound(
                project_path.to_path_buf(),
            ));
        }

        let objects = project_path.join(OBJECTS_DIR);
        if objects.is_dir() {
            Ok(objects)
        } else {
            Err(DisguiseToolError::ObjectsNotFound(objects))
        }
    }
}
