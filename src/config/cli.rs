//! CLI argument parsing and configuration

use crate::cue::eos::{CueListFormat, CueSelectMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// disguisetool - utilities for disguise media server projects
///
/// Audits project media directories into a CSV report and converts
/// disguise cue table exports into lighting console cue lists.
#[derive(Parser, Debug)]
#[command(name = "disguisetool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress bars)
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a CSV report on the contents of project media directories
    Audit(AuditArgs),
    /// Convert a disguise cue table file to a cue list for a lighting console
    CueList(CueListArgs),
}

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Project directories to audit
    #[arg(required = true, value_name = "PROJECT")]
    pub projects: Vec<PathBuf>,

    /// Only include files with this extension (repeatable)
    #[arg(short, long, value_name = "EXT")]
    pub include: Vec<String>,

    /// Exclude files with this extension, overrides --include (repeatable)
    #[arg(short = 'x', long, value_name = "EXT")]
    pub exclude: Vec<String>,

    /// Only include files whose name contains this term (repeatable)
    #[arg(short, long, value_name = "TERM")]
    pub search: Vec<String>,

    /// Output file name stem; the report is written as <STEM>_<timestamp>.csv
    #[arg(short, long, value_name = "STEM", default_value = "audit")]
    pub output: String,

    /// Probe each file with ffprobe for video attributes
    #[arg(short = 'm', long, default_value = "false")]
    pub media_info: bool,

    /// Location of the ffprobe binary (defaults to the search path)
    #[arg(long, value_name = "PATH")]
    pub ffprobe_path: Option<PathBuf>,

    /// Maximum number of projects audited concurrently
    #[arg(long, value_name = "N", default_value_t = super::request::DEFAULT_MAX_PROJECTS)]
    pub max_projects: usize,

    /// Maximum number of files processed concurrently per project
    #[arg(long, value_name = "N", default_value_t = super::request::DEFAULT_MAX_FILES)]
    pub max_files: usize,

    /// Scan the given directories directly instead of their objects subdirectory
    #[arg(short, long, default_value = "false")]
    pub raw: bool,
}

#[derive(Args, Debug)]
pub struct CueListArgs {
    /// Disguise cue table file path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Cue list format
    #[arg(short, long, value_enum, default_value = "eos-csv")]
    pub format: CueListFormat,

    /// Cue select mode
    #[arg(short, long, value_enum, default_value = "all")]
    pub select: CueSelectMode,

    /// Output file path (defaults to <input stem>_cues.csv)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
