//! Command-line argument parsing

use clap::{Parser, Subcommand, error::ErrorKind};
use std::path::PathBuf;

/// Project tools - run clasp against the project's apps-script directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "project-tools", disable_help_subcommand = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// clasp executable to run instead of the project's local install
    #[arg(long, value_name = "PATH")]
    pub clasp: Option<PathBuf>,

    /// Subcommand to execute; omitted or unknown shows the command list
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Arguments that only ask for the command list
    fn help_only() -> Self {
        Self {
            debug: false,
            project_root: None,
            clasp: None,
            command: None,
        }
    }

    /// Whether this invocation only prints the command list
    pub fn wants_help(&self) -> bool {
        matches!(self.command, None | Some(Command::Other(_)))
    }
}

/// Available commands.
///
/// `push`, `pull`, `open`, `status` and `watch` accept and ignore trailing
/// arguments; only `create` and `clone` forward theirs to clasp.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push changes to Google Apps Script
    #[command(disable_help_flag = true)]
    Push {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },

    /// Pull latest changes from Google Apps Script
    #[command(disable_help_flag = true)]
    Pull {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },

    /// Open project in Google Apps Script editor
    #[command(disable_help_flag = true)]
    Open {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },

    /// Check project status
    #[command(disable_help_flag = true)]
    Status {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },

    /// Watch for changes and push automatically
    #[command(disable_help_flag = true)]
    Watch {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },

    /// Create new project (with optional args)
    #[command(disable_help_flag = true)]
    Create {
        /// Arguments passed to `clasp create`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Clone existing project (requires scriptId)
    #[command(disable_help_flag = true)]
    Clone {
        /// Arguments passed to `clasp clone`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Anything else
    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl Command {
    /// Name the command was invoked as
    pub fn name(&self) -> &str {
        match self {
            Self::Push { .. } => "push",
            Self::Pull { .. } => "pull",
            Self::Open { .. } => "open",
            Self::Status { .. } => "status",
            Self::Watch { .. } => "watch",
            Self::Create { .. } => "create",
            Self::Clone { .. } => "clone",
            Self::Other(argv) => argv.first().map_or("", String::as_str),
        }
    }

    /// Trailing arguments a passthrough command was given and ignores
    pub fn ignored_args(&self) -> &[String] {
        match self {
            Self::Push { extra }
            | Self::Pull { extra }
            | Self::Open { extra }
            | Self::Status { extra }
            | Self::Watch { extra } => extra,
            Self::Create { .. } | Self::Clone { .. } | Self::Other(_) => &[],
        }
    }
}

/// Parse command line arguments.
///
/// An unknown leading flag falls back to the command list, like an unknown
/// command name does. `--help`, `--version` and malformed known flags exit
/// through clap.
pub fn parse_args() -> Args {
    help_on_unknown(Args::try_parse()).unwrap_or_else(|e| e.exit())
}

/// Turn "unknown argument" parse failures into a help-only invocation
pub fn help_on_unknown(parsed: Result<Args, clap::Error>) -> Result<Args, clap::Error> {
    match parsed {
        Err(e) if matches!(e.kind(), ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand) => {
            Ok(Args::help_only())
        }
        other => other,
    }
}
