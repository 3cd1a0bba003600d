//! Report export

pub mod csv;

pub use csv::{report_file_name, write_report};
