//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nmmsn",
    version,
    about = "Natural medicinal material standard names",
    long_about = "Build bilingual standard names for natural medicinal materials.\n\n\
                  Reads a name-element record as JSON and writes the naming response,\n\
                  with the Latin-based name, the Chinese name and its pinyin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Settings file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Name a material from a JSON name-element record.
    Name(NameArgs),

    /// Parse name elements written as text, e.g. "root | 根 and rhizome | 根茎".
    Parse(ParseArgs),

    /// List the material categories.
    Categories,
}

#[derive(Parser)]
pub struct NameArgs {
    /// Request file; stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Indent the response JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Name elements in text form.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Put the elements in canonical order.
    #[arg(long = "canonical")]
    pub canonical: bool,

    /// Keep the written order of AND-joined terms (with --canonical).
    #[arg(long = "preserve-and-order", requires = "canonical")]
    pub preserve_and_order: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
