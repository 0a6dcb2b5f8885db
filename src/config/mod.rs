//! Configuration module for the cost splitter
//!
//! This module provides:
//! - Run options built from the command line, with validation
//! - Output and asset path resolution for the HTML report

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::{AssetSource, ReportOptions};
