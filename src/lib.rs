//! Cost Splitter - fair per-category splitting of shared project costs
//!
//! A group of people shares a project (a trip, a shared flat, an event).
//! Expenses are booked under categories and every person takes part in some
//! of the categories. Each category's total is divided evenly between its
//! participants and every person's balance is what they paid minus the
//! shares charged to them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run options and output path management
//! - `error`: Custom error types
//! - `models`: Core data models (persons, categories, expenses)
//! - `storage`: Input loading and atomic file output
//! - `services`: Project assembly and the allocation engine
//! - `reports`: Read-only report view of an allocated project
//! - `display`: Currency formatting and the console report
//! - `export`: HTML site and CSV export
//! - `cli`: Command line handling
//!
//! # Example
//!
//! ```rust,ignore
//! use cost_splitter::services::Project;
//! use cost_splitter::storage::read_project_input;
//!
//! let mut project = Project::from_input(read_project_input("trip.json")?)?;
//! let categories = project.allocate()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitterError, SplitterResult};
