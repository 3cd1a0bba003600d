//! Unified error types for disguisetool
//!
//! Error strategy:
//! - Per-project errors (missing path, missing objects directory): Recoverable, skip and continue
//! - Per-file errors (metadata read): Recoverable, skip and continue
//! - Request validation and output errors: Fatal, abort the run
//!
//! Media probe failures never surface here at all: the probe adapter
//! degrades them to "no media info" at its boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for disguisetool operations
#[derive(Debug, Error)]
pub enum DisguiseToolError {
    // =========================================================================
    // Recoverable errors - skip project/file, continue run
    // =========================================================================
    #[error("Project path not found: '{0}'\n  Tip: Check the path exists and is accessible")]
    ProjectNotFound(PathBuf),

    #[error("Objects directory not found: '{0}'\n  Tip: Not a project directory? Consider --raw mode to scan the path itself")]
    ObjectsNotFound(PathBuf),

    #[error("Failed to read file '{path}': {reason}")]
    FileAccess { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal errors - abort the run
    // =========================================================================
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    Output { path: PathBuf, reason: String },

    // =========================================================================
    // Cue table / cue number errors
    // =========================================================================
    #[error("Cue table incorrectly formatted: {0}")]
    CueTableFormat(String),

    #[error("DMX cue number must be formatted as XX.YY.ZZ, got '{0}'")]
    CueNumberFormat(String),

    #[error("Cue number component '{component}' out of range: {value} (must be between 0 and {max})")]
    CueNumberOutOfRange {
        component: &'static str,
        value: u32,
        max: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for disguisetool operations
pub type Result<T> = std::result::Result<T, DisguiseToolError>;

impl DisguiseToolError {
    /// Returns true if this error is recoverable (skip the unit of work, continue the run)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DisguiseToolError::ProjectNotFound(_)
                | DisguiseToolError::ObjectsNotFound(_)
                | DisguiseToolError::FileAccess { .. }
        )
    }

    /// Create a file access error with context about the failing path
    pub fn file_access(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DisguiseToolError::FileAccess {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!(
                    "Permission denied. Check that you have write access to {}",
                    path.display()
                )
            }
            std::io::ErrorKind::NotFound => {
                format!(
                    "Directory does not exist: {}",
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            }
            _ => err.to_string(),
        };
        DisguiseToolError::Output { path, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_recoverable_split() {
        assert!(DisguiseToolError::ProjectNotFound(PathBuf::from("/x")).is_recoverable());
        assert!(DisguiseToolError::ObjectsNotFound(PathBuf::from("/x/objects")).is_recoverable());
        assert!(DisguiseToolError::file_access("/x/f.mov", "gone").is_recoverable());
        assert!(!DisguiseToolError::InvalidRequest("no projects".into()).is_recoverable());
        assert!(!DisguiseToolError::output_error(
            Path::new("/out.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
        )
        .is_recoverable());
    }
}
