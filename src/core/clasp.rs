//! clasp invocation rules
//!
//! Maps each helper command onto the argument list clasp is run with.

use crate::{cli::Command, error::Result, utils::ProcessRunner};
use std::path::Path;

/// clasp flag that sets the directory scripts are synced from/to
pub const ROOT_DIR_FLAG: &str = "--rootDir";

/// clasp flag that keeps `push` running and pushing on change
pub const WATCH_FLAG: &str = "--watch";

/// Runs the external tool and reports its exit code.
///
/// Implementations must attach the tool to the caller's terminal and wait for
/// it to finish; `Err` is reserved for failing to start it.
pub trait ToolRunner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32>;
}

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32> {
        self.run_in_dir(program, args, cwd)
    }
}

/// Arguments clasp is invoked with for `command`, or `None` when the command
/// does not run clasp.
///
/// For `create` and `clone` the caller's arguments are forwarded untouched and
/// `--rootDir <root_dir>` is appended last, so it takes precedence over any
/// `--rootDir` the caller passed.
pub fn tool_args(command: &Command, root_dir: &str) -> Option<Vec<String>> {
    let args = match command {
        Command::Push { .. } => vec!["push".to_string()],
        Command::Pull { .. } => vec!["pull".to_string()],
        Command::Open { .. } => vec!["open".to_string()],
        Command::Status { .. } => vec!["status".to_string()],
        Command::Watch { .. } => vec!["push".to_string(), WATCH_FLAG.to_string()],
        Command::Create { args } => with_root_dir("create", args, root_dir),
        Command::Clone { args } => with_root_dir("clone", args, root_dir),
        Command::Other(_) => return None,
    };
    Some(args)
}

fn with_root_dir(subcommand: &str, forwarded: &[String], root_dir: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(forwarded.len() + 3);
    args.push(subcommand.to_string());
    args.extend(forwarded.iter().cloned());
    args.push(ROOT_DIR_FLAG.to_string());
    args.push(root_dir.to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_simple_commands() {
        let root = "./apps-script";
        let cases = [
            (Command::Push { extra: vec![] }, vec!["push"]),
            (Command::Pull { extra: vec![] }, vec!["pull"]),
            (Command::Open { extra: vec![] }, vec!["open"]),
            (Command::Status { extra: vec![] }, vec!["status"]),
            (Command::Watch { extra: vec![] }, vec!["push", "--watch"]),
        ];
        for (command, expected) in cases {
            assert_eq!(tool_args(&command, root), Some(strings(&expected)));
        }
    }

    #[test]
    fn test_passthrough_extra_arguments_are_not_forwarded() {
        let command = Command::Push {
            extra: strings(&["--force"]),
        };
        assert_eq!(tool_args(&command, "./apps-script"), Some(strings(&["push"])));

        let command = Command::Watch {
            extra: strings(&["now"]),
        };
        assert_eq!(
            tool_args(&command, "./apps-script"),
            Some(strings(&["push", "--watch"]))
        );
    }

    #[test]
    fn test_clone_appends_root_dir() {
        let command = Command::Clone {
            args: strings(&["1AbCscriptId"]),
        };
        assert_eq!(
            tool_args(&command, "./apps-script"),
            Some(strings(&["clone", "1AbCscriptId", "--rootDir", "./apps-script"]))
        );
    }

    #[test]
    fn test_create_root_dir_overrides_caller() {
        let command = Command::Create {
            args: strings(&["--title", "Budget", "--rootDir", "elsewhere"]),
        };
        let args = tool_args(&command, "./apps-script").unwrap();

        assert_eq!(
            args,
            strings(&[
                "create",
                "--title",
                "Budget",
                "--rootDir",
                "elsewhere",
                "--rootDir",
                "./apps-script",
            ])
        );
        assert_eq!(&args[args.len() - 2..], &strings(&["--rootDir", "./apps-script"])[..]);
    }

    #[test]
    fn test_create_without_args() {
        let command = Command::Create { args: Vec::new() };
        assert_eq!(
            tool_args(&command, "./apps-script"),
            Some(strings(&["create", "--rootDir", "./apps-script"]))
        );
    }

    #[test]
    fn test_other_does_not_invoke() {
        let command = Command::Other(strings(&["bogus"]));
        assert_eq!(tool_args(&command, "./apps-script"), None);
    }
}
