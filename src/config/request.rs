//! Validated audit request
//!
//! The immutable input to one audit run. Built once from CLI arguments
//! (or by hand in tests) and read-only thereafter.

use crate::config::cli::AuditArgs;
use crate::error::{DisguiseToolError, Result};
use std::path::PathBuf;

/// Default bound on concurrently audited projects
pub const DEFAULT_MAX_PROJECTS: usize = 16;
/// Default bound on concurrently processed files per project
pub const DEFAULT_MAX_FILES: usize = 64;

/// Immutable parameters for one audit run
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Project roots to audit, in the order supplied
    pub projects: Vec<PathBuf>,
    /// Extension allow-list; empty admits all
    pub include: Vec<String>,
    /// Extension deny-list; overrides the allow-list
    pub exclude: Vec<String>,
    /// Base-name substring search terms; empty admits all
    pub search: Vec<String>,
    /// Output file name stem
    pub output_stem: String,
    /// Probe each file for video attributes
    pub media_info: bool,
    /// Explicit ffprobe binary location
    pub ffprobe_path: Option<PathBuf>,
    /// Concurrency bound, project level
    pub max_projects: usize,
    /// Concurrency bound, file level (per project)
    pub max_files: usize,
    /// Scan the project path itself instead of its objects subdirectory
    pub raw_mode: bool,
    /// Show the progress bar
    pub show_progress: bool,
}

impl AuditRequest {
    /// Build a validated request from CLI arguments
    pub fn from_args(args: &AuditArgs, quiet: bool) -> Result<Self> {
        let request = Self {
            projects: args.projects.clone(),
            include: normalize_extensions(&args.include),
            exclude: normalize_extensions(&args.exclude),
            search: args.search.clone(),
            output_stem: args.output.clone(),
            media_info: args.media_info,
            ffprobe_path: args.ffprobe_path.clone(),
            max_projects: args.max_projects,
            max_files: args.max_files,
            raw_mode: args.raw,
            show_progress: !quiet,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the request invariants: at least one project path, both
    /// concurrency bounds at least 1. Fatal, checked before any I/O.
    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(DisguiseToolError::InvalidRequest(
                "at least one project path is required".to_string(),
            ));
        }
        if self.max_projects == 0 {
            return Err(DisguiseToolError::InvalidRequest(
                "--max-projects must be at least 1".to_string(),
            ));
        }
        if self.max_files == 0 {
            return Err(DisguiseToolError::InvalidRequest(
                "--max-files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AuditRequest {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            search: Vec::new(),
            output_stem: "audit".to_string(),
            media_info: false,
            ffprobe_path: None,
            max_projects: DEFAULT_MAX_PROJECTS,
            max_files: DEFAULT_MAX_FILES,
            raw_mode: false,
            show_progress: false,
        }
    }
}

/// Strip a leading dot from user-supplied extensions (".mov" and "mov"
/// are both accepted); comparison stays case-preserving.
fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.strip_prefix('.').unwrap_or(e).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AuditRequest {
        AuditRequest {
            projects: vec![PathBuf::from("/show/project")],
            ..AuditRequest::default()
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_no_projects_rejected() {
        let request = AuditRequest::default();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, DisguiseToolError::InvalidRequest(_)));
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let mut request = valid_request();
        request.max_projects = 0;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.max_files = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_extension_normalization() {
        let normalized = normalize_extensions(&[".mov".to_string(), "png".to_string()]);
        assert_eq!(normalized, vec!["mov", "png"]);
    }
}
