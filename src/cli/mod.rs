//! Command-line interface module
//!
//! Provides argument parsing and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Args, Command, help_on_unknown, parse_args};
pub use commands::{dispatch, execute_command, show_help, write_help};
