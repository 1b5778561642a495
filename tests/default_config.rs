use std::env;

use clap::Parser;
use dependency_analyzer::app::cli::Cli;
use dependency_analyzer::app::config::DEFAULT_CONFIG_PATH;
use dependency_analyzer::app::{run_with, RunOutcome};
use tempfile::TempDir;

// Changes the working directory, so it stays the only test in this binary.
#[test]
fn missing_default_config_is_created_then_analyzed() {
    let dir = TempDir::new().unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let cli = Cli::try_parse_from(["dependency-analyzer"]).unwrap();

    let mut first = Vec::new();
    let created = run_with(&cli, &mut first);

    let mut second = Vec::new();
    let analyzed = run_with(&cli, &mut second);

    let file_exists = dir.path().join(DEFAULT_CONFIG_PATH).is_file();
    env::set_current_dir(previous).unwrap();

    assert_eq!(created.unwrap(), RunOutcome::DefaultConfigCreated);
    assert!(String::from_utf8(first)
        .unwrap()
        .contains("Created default configuration file: config.json"));
    assert!(file_exists);

    assert_eq!(analyzed.unwrap(), RunOutcome::Analyzed);
    assert!(String::from_utf8(second)
        .unwrap()
        .contains("packageName: example-package"));
}
