//! `nmmsn` command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use nmmsn_cli::commands::{
    EXIT_ERROR, EXIT_OK, categories_table, name_request, parse_expression, read_request,
    render_response,
};
use nmmsn_cli::logging::{LogConfig, LogFormat, init_logging};
use nmmsn_cli::settings::{Settings, load_settings};
use nmmsn_locale::PinyinTransliterator;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, NameArgs, ParseArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let settings = match &cli.config {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(error) => {
                eprintln!("error: {error:#}");
                std::process::exit(EXIT_ERROR);
            }
        },
        None => Settings::default(),
    };
    let exit_code = match &cli.command {
        Command::Name(args) => match run_name(args, &settings) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_ERROR
            }
        },
        Command::Parse(args) => match run_parse(args) {
            Ok(()) => EXIT_OK,
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_ERROR
            }
        },
        Command::Categories => {
            println!("{}", categories_table());
            EXIT_OK
        }
    };
    std::process::exit(exit_code);
}

fn run_name(args: &NameArgs, settings: &Settings) -> Result<i32> {
    let catalog = settings.catalog()?;
    let body = read_request(args.file.as_deref())?;
    let outcome = name_request(&body, &catalog, &PinyinTransliterator)?;
    println!(
        "{}",
        render_response(&outcome.response, args.pretty || settings.pretty)?
    );
    Ok(outcome.exit_code)
}

fn run_parse(args: &ParseArgs) -> Result<()> {
    println!(
        "{}",
        parse_expression(&args.text, args.canonical, args.preserve_and_order)?
    );
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
