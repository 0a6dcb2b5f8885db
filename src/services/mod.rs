//! Service layer for the cost splitter
//!
//! The service layer holds the business logic: assembling a validated project
//! from input and allocating each category's cost to its participants.

pub mod allocation;
pub mod project;

pub use allocation::allocate;
pub use project::Project;
