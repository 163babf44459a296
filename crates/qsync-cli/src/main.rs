//! `qsync` - typed query-string state demo CLI.

use clap::Parser;

use qsync_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command};
use crate::commands::{run_link, run_session, run_set, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
    });
    let result = match &cli.command {
        Command::Show(args) => run_show(args),
        Command::Set(args) => run_set(args),
        Command::Link(args) => run_link(args),
        Command::Session(args) => run_session(args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
