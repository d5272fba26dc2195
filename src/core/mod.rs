//! Core functionality for the clasp helper
//!
//! Contains the clasp invocation rules and the project directory layout.

pub mod clasp;
pub mod project;

pub use clasp::{ToolRunner, tool_args};
pub use project::ProjectLayout;
