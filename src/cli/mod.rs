//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod report;

pub use report::{build_report, handle_report, ReportArgs};
