//! # clasp helper
//!
//! Runs [clasp](https://github.com/google/clasp) for a project whose Google
//! Apps Script sources live in an `apps-script/` directory while the
//! `.clasp.json` link file sits at the project root.
//!
//! `push`, `pull`, `open`, `status` and `watch` hand straight through to
//! clasp. `create` and `clone` make sure `apps-script/` exists, force
//! `--rootDir ./apps-script`, and move the `.clasp.json` clasp leaves in
//! `apps-script/` up to the project root.
//!
//! ## Example
//!
//! ```no_run
//! use clasp_helper::{cli::{Command, execute_command}, config::Config};
//!
//! let config = Config::for_root("/path/to/project");
//! let code = execute_command(&config, Some(&Command::Status { extra: vec![] }))?;
//! std::process::exit(code);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr so clasp's own output on stdout is left alone.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
