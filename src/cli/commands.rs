//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{ProjectLayout, ToolRunner, tool_args},
    error::HelperError,
    utils::{ProcessRunner, process::render_command},
};
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Command names and descriptions shown by the help listing
const HELP_ENTRIES: [(&str, &str); 7] = [
    ("push", "Push changes to Google Apps Script"),
    ("pull", "Pull latest changes from Google Apps Script"),
    ("open", "Open project in Google Apps Script editor"),
    ("status", "Check project status"),
    ("watch", "Watch for changes and push automatically"),
    ("create", "Create new project (with optional args)"),
    ("clone", "Clone existing project (requires scriptId)"),
];

/// Execute the command with the real process runner
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: Option<&Command>) -> anyhow::Result<i32> {
    let runner = ProcessRunner::new(config.debug);
    dispatch(config, command, &runner)
}

/// Run `command` and return the exit status the program should end with.
///
/// `push`, `pull`, `open`, `status` and `watch` return clasp's exit code
/// unchanged. `create` and `clone` turn a non-zero exit into an error.
/// A missing or unknown command prints the help listing and returns 0.
pub fn dispatch<R: ToolRunner>(
    config: &Config,
    command: Option<&Command>,
    runner: &R,
) -> anyhow::Result<i32> {
    let Some(command) = command else {
        return show_help();
    };

    match command {
        Command::Push { .. } => passthrough(
            config,
            command,
            runner,
            "Pushing changes to Google Apps Script...",
        ),
        Command::Pull { .. } => passthrough(
            config,
            command,
            runner,
            "Pulling latest changes from Google Apps Script...",
        ),
        Command::Open { .. } => passthrough(
            config,
            command,
            runner,
            "Opening project in Google Apps Script editor...",
        ),
        Command::Status { .. } => passthrough(config, command, runner, "Checking project status..."),
        Command::Watch { .. } => passthrough(config, command, runner, "Watching for changes..."),
        Command::Create { .. } => {
            banner("Creating new Google Apps Script project...");
            link_project(config, command, runner).context("Failed to create project")?;
            println!("{}", "✓ Project created successfully".green());
            Ok(0)
        }
        Command::Clone { .. } => {
            banner("Cloning Google Apps Script project...");
            link_project(config, command, runner).context("Failed to clone project")?;
            println!("{}", "✓ Project cloned successfully".green());
            Ok(0)
        }
        Command::Other(argv) => {
            debug!("Unknown command {:?}, showing help", argv);
            show_help()
        }
    }
}

/// Print the command listing to stdout; showing help is never a failure
pub fn show_help() -> anyhow::Result<i32> {
    write_help(&mut io::stdout().lock())?;
    Ok(0)
}

/// Print the static command listing
pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Available commands:".yellow())?;
    for (name, description) in HELP_ENTRIES {
        let label = format!("- {:<8}", format!("{name}:"));
        writeln!(out, "{}{}", label.cyan(), description)?;
    }
    Ok(())
}

fn banner(message: &str) {
    println!("{}", message.blue());
}

/// Run clasp for a command without follow-up steps and hand back its exit code
fn passthrough<R: ToolRunner>(
    config: &Config,
    command: &Command,
    runner: &R,
    message: &str,
) -> anyhow::Result<i32> {
    banner(message);
    if !command.ignored_args().is_empty() {
        debug!(
            "Ignoring arguments to {}: {:?}",
            command.name(),
            command.ignored_args()
        );
    }
    let args = clasp_args(config, command)?;
    let code = runner.run(&config.clasp_bin, &args, &config.project_root)?;
    debug!("clasp {} exited with {}", command.name(), code);
    Ok(code)
}

/// `create`/`clone`: prepare the scripts directory, run clasp with the forced
/// `--rootDir`, then move the link file to the project root
#[instrument(skip(config, runner))]
fn link_project<R: ToolRunner>(
    config: &Config,
    command: &Command,
    runner: &R,
) -> anyhow::Result<()> {
    let layout = ProjectLayout::from_config(config);
    layout.ensure_scripts_dir()?;

    let args = clasp_args(config, command)?;
    let code = runner.run(&config.clasp_bin, &args, layout.root())?;
    if code != 0 {
        let cmd_str = render_command(&config.clasp_bin, &args);
        return Err(HelperError::process(cmd_str, Some(code)).into());
    }

    if layout.relocate_link_file()? {
        info!("Project linked via {}", layout.link_file_in_root().display());
    }
    Ok(())
}

fn clasp_args(config: &Config, command: &Command) -> anyhow::Result<Vec<String>> {
    tool_args(command, &config.root_dir_arg())
        .with_context(|| format!("'{}' does not run clasp", command.name()))
}
