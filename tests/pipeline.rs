use std::fs;
use std::path::Path;

use clap::Parser;
use dependency_analyzer::app::cli::Cli;
use dependency_analyzer::app::config::load_from_path;
use dependency_analyzer::app::error::{AnalyzerError, ParseError, ValidationError};
use dependency_analyzer::app::scanner::ParseMode;
use dependency_analyzer::app::validator::validate;
use dependency_analyzer::app::{run_with, RunOutcome};
use tempfile::TempDir;

const REFERENCE: &str = r#"{"packageName":"demo","repositoryUrl":"https://x","repositoryMode":"local","outputImage":"out.png","asciiTreeOutput":true,"maxDepth":5}"#;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn cli_for(path: &Path, extra: &[&str]) -> Cli {
    let mut args = vec!["dependency-analyzer", path.to_str().unwrap()];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

fn run(path: &Path, extra: &[&str]) -> (Result<RunOutcome, AnalyzerError>, String) {
    let mut out = Vec::new();
    let result = run_with(&cli_for(path, extra), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn reference_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.json", REFERENCE);

    let record = load_from_path(&path, ParseMode::Strict).unwrap();
    validate(&record).unwrap();

    assert_eq!(record.package_name(), Some("demo"));
    assert_eq!(record.repository_url(), Some("https://x"));
    assert_eq!(record.repository_mode(), Some("local"));
    assert_eq!(record.output_image(), Some("out.png"));
    assert_eq!(record.ascii_tree_output(), Some(true));
    assert_eq!(record.max_depth(), Some(5));
}

#[test]
fn successful_run_prints_listing_and_status() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.json", REFERENCE);

    let (result, out) = run(&path, &[]);
    assert_eq!(result.unwrap(), RunOutcome::Analyzed);

    assert!(out.starts_with("Dependency Analyzer\n"));
    assert!(out.contains("Configuration parameters\n"));
    assert!(out.contains("repositoryMode: local\n"));
    assert!(out.contains("Starting dependency analysis for package: demo"));
    assert!(out.contains("Results will be saved to: out.png"));
    assert!(out.contains("ASCII dependency tree will be generated"));
}

#[test]
fn invalid_mode_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        &REFERENCE.replace("\"local\"", "\"invalid\""),
    );

    let (result, out) = run(&path, &[]);
    let err = result.unwrap_err();
    match &err {
        AnalyzerError::Validation(v) => assert_eq!(v.field(), "repositoryMode"),
        other => panic!("unexpected error: {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("repositoryMode"));
    assert!(msg.contains("local, remote, test"));
    assert!(!out.contains("Starting dependency analysis"));
}

#[test]
fn non_numeric_depth_fails_at_parse_time() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        &REFERENCE.replace("\"maxDepth\":5", "\"maxDepth\":\"deep\""),
    );

    let (result, _) = run(&path, &[]);
    assert!(matches!(
        result,
        Err(AnalyzerError::Parse(ParseError::MissingValue { key: "maxDepth" }))
    ));
}

#[test]
fn depth_out_of_range_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        &REFERENCE.replace("\"maxDepth\":5", "\"maxDepth\":101"),
    );

    let (result, _) = run(&path, &[]);
    assert!(matches!(
        result,
        Err(AnalyzerError::Validation(ValidationError::DepthTooLarge { value: 101, .. }))
    ));
}

#[test]
fn strict_flag_rejects_unbraced_content() {
    let dir = TempDir::new().unwrap();
    let unbraced = &REFERENCE[1..REFERENCE.len() - 1];
    let path = write_config(&dir, "config.json", unbraced);

    let (lenient, _) = run(&path, &[]);
    assert_eq!(lenient.unwrap(), RunOutcome::Analyzed);

    let (strict, _) = run(&path, &["--strict"]);
    assert!(matches!(
        strict,
        Err(AnalyzerError::Parse(ParseError::Structure))
    ));
}

#[test]
fn missing_custom_file_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my-config.json");

    let (result, _) = run(&path, &[]);
    let err = result.unwrap_err();
    assert!(matches!(err, AnalyzerError::FileAccess(_)));
    assert!(err.to_string().contains("my-config.json"));
}
