//! CLI argument definitions for `qsync`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qsync",
    version,
    about = "Typed query-string state - decode, diff, and navigate",
    long_about = "Synchronize typed state with a URL query string.\n\n\
                  Declares fields with types and defaults, decodes the current query\n\
                  string into typed values, and computes minimal updates (defaults are\n\
                  never written to the URL)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a query string and print the typed state.
    Show(ShowArgs),

    /// Apply field updates and print the resulting query string.
    Set(SetArgs),

    /// Print the query string an update would navigate to, without navigating.
    Link(SetArgs),

    /// Run a scripted navigation session against an in-memory history.
    Session(SessionArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Current query string, with or without a leading '?'.
    #[arg(long = "query", value_name = "QS", default_value = "")]
    pub query: String,

    /// JSON schema file (uses the built-in demo schema when omitted).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SetArgs {
    /// Current query string, with or without a leading '?'.
    #[arg(long = "query", value_name = "QS", default_value = "")]
    pub query: String,

    /// JSON schema file (uses the built-in demo schema when omitted).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Overwrite the current history entry instead of pushing a new one.
    #[arg(long = "replace")]
    pub replace: bool,

    /// Field assignments: KEY=VALUE writes, KEY= clears (back to default),
    /// repeated KEY=V tokens build a list, KEY=[] sets a list explicitly empty.
    #[arg(value_name = "KEY=VALUE", required = true)]
    pub assignments: Vec<String>,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Initial query string.
    #[arg(long = "query", value_name = "QS", default_value = "")]
    pub query: String,

    /// JSON schema file (uses the built-in demo schema when omitted).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Script steps: "set KEY=VALUE ...", "replace KEY=VALUE ...", "back",
    /// "forward", "show".
    #[arg(value_name = "STEP", required = true)]
    pub steps: Vec<String>,
}
