//! File storage layer
//!
//! The cost splitter keeps nothing between runs: it reads one input document
//! and writes report files. This module holds both ends of that.

pub mod file_io;

pub use file_io::{read_project_input, write_text_atomic, InputFormat};
