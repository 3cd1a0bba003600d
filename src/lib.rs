//! disguisetool - Utilities for disguise media server projects
//!
//! A command-line utility that audits the media contents of disguise
//! project directories into a CSV report, and converts disguise cue
//! table exports into cue lists for lighting consoles.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and the validated audit request
//! - `discovery`: scan-root resolution, file enumeration and filtering
//! - `probe`: media probing via ffprobe (with swappable backends)
//! - `audit`: the concurrent audit orchestrator and record builder
//! - `export`: CSV report output
//! - `cue`: cue table parsing and cue list conversion
//!
//! # Example
//!
//! ```no_run
//! use disguisetool::audit;
//! use disguisetool::cancel::CancellationToken;
//! use disguisetool::config::AuditRequest;
//!
//! let request = AuditRequest {
//!     projects: vec!["/shows/tour2026".into()],
//!     ..AuditRequest::default()
//! };
//! let outcome = audit::run(&request, &CancellationToken::new()).expect("Audit failed");
//! println!("Audited {} files", outcome.records.len());
//! ```

pub mod audit;
pub mod cancel;
pub mod config;
pub mod cue;
pub mod discovery;
pub mod error;
pub mod export;
pub mod probe;

// Re-export key types at crate root
pub use audit::{AuditOutcome, AuditRecord};
pub use error::{DisguiseToolError, Result};
pub use probe::MediaInfo;
