//! Configuration and CLI handling

pub mod cli;
pub mod request;

pub use cli::{AuditArgs, Cli, Command, CueListArgs};
pub use request::AuditRequest;
