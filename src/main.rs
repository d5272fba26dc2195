use clasp_helper::{cli, config::Config, setup_logging};
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_args();

    match run(&args) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> anyhow::Result<i32> {
    setup_logging(args.debug)?;

    // The command list needs no project, so skip config and .env loading
    if args.wants_help() {
        return cli::show_help();
    }

    let config = Config::from_args(args)?;

    cli::execute_command(&config, args.command.as_ref())
}
