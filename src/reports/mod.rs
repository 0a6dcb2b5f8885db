//! Reports module for the cost splitter
//!
//! Provides the read-only report view handed to every output writer.

pub mod split;

pub use split::{ExpenseLine, PersonBalance, ProjectSummary, SplitReport};
