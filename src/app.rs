// Declare modules
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod validator;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use self::analyzer::DependencyAnalyzer;
use self::cli::Cli;
use self::config::{resolve_config, LoadOutcome};
use self::error::AnalyzerError;
use self::formatter::OutputGenerator;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Analyzed,
    DefaultConfigCreated,
}

/// Sets up `env_logger`. `RUST_LOG` overrides the level picked from `-v`.
pub fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Failed to initialise logger")
}

/// Parses arguments, runs the pipeline and maps the result to an exit code.
pub fn run() -> ExitCode {
    // 1. Parse Args
    let cli = Cli::parse();

    // 2. Logging
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", err);
    }

    // 3. Load, validate, analyze
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_with(&cli, &mut out) {
        Ok(outcome) => {
            log::debug!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("Run failed: {:?}", err);
            eprintln!("Error: {}", err);
            let _ = writeln!(out, "{}", OutputGenerator::usage());
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration named by `cli`, validates it and runs the analysis
/// once, writing all regular output to `out`.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<RunOutcome, AnalyzerError> {
    writeln!(out, "{}", OutputGenerator::banner())?;
    writeln!(out, "Using configuration file: {}", cli.config.display())?;

    let record = match resolve_config(&cli.config, cli.parse_mode())? {
        LoadOutcome::Loaded(record) => record,
        LoadOutcome::DefaultCreated(path) => {
            let path = path.display().to_string();
            writeln!(out, "{}", OutputGenerator::default_created(&path))?;
            return Ok(RunOutcome::DefaultConfigCreated);
        }
    };

    write!(out, "{}", OutputGenerator::configuration_listing(&record)?)?;

    let analyzer = DependencyAnalyzer::new(record)?;
    analyzer.analyze(out)?;

    Ok(RunOutcome::Analyzed)
}
