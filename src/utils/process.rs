//! Process execution utilities
//!
//! Runs the external tool attached to the caller's terminal, with an explicit
//! working directory instead of changing the process-wide one.

use crate::error::{HelperError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info, instrument};

/// Exit code used when the child reports neither a code nor a signal
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a program in `cwd` with stdin/stdout/stderr inherited and wait for
    /// it to finish.
    ///
    /// A non-zero exit is not an error here: the exit code is returned as-is
    /// so callers can decide whether to propagate or reject it. Only a failure
    /// to start the program is reported as `Err`.
    #[instrument(skip(self))]
    pub fn run_in_dir(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32> {
        let cmd_str = render_command(program, args);

        if self.debug {
            debug!("Running command: {} (in {})", cmd_str, cwd.display());
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| HelperError::spawn(cmd_str.clone(), e))?;

        let code = exit_code(status);
        debug!("Command finished with exit code {}", code);
        Ok(code)
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        debug!("Checking if command exists: {}", command);

        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Render a program and its arguments for log and error messages
pub fn render_command(program: &Path, args: &[String]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Map an exit status to a shell-style exit code
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_EXIT_CODE
}
