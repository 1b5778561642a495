use crate::app::error::{AnalyzerError, FileAccessError};
use crate::app::models::ConfigRecord;
use crate::app::scanner::{parse, ParseMode};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Result of resolving the configuration for a run.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(ConfigRecord),
    /// The default file did not exist and a sample was written in its place.
    DefaultCreated(PathBuf),
}

/// Reads the whole configuration file in one go.
///
/// The path must exist, be a regular file and be non-empty.
pub fn read_config_file(path: &Path) -> Result<String, FileAccessError> {
    if !path.exists() {
        return Err(FileAccessError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(FileAccessError::NotAFile(path.to_path_buf()));
    }

    let read_err = |source: io::Error| FileAccessError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_err)?;
    if metadata.len() == 0 {
        return Err(FileAccessError::Empty(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(read_err)?;
    log::debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Reads and parses a configuration file without validating its values.
pub fn load_from_path(path: &Path, mode: ParseMode) -> Result<ConfigRecord, AnalyzerError> {
    let content = read_config_file(path)?;
    let record = parse(&content, mode)?;
    Ok(record)
}

/// Loads the configuration at `path`, writing a sample file first if the
/// default path is missing.
pub fn resolve_config(path: &Path, mode: ParseMode) -> Result<LoadOutcome, AnalyzerError> {
    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        log::warn!("{:?} not found, writing a sample configuration", path);
        write_default_config(path)?;
        return Ok(LoadOutcome::DefaultCreated(path.to_path_buf()));
    }

    load_from_path(path, mode).map(LoadOutcome::Loaded)
}

/// Writes [`ConfigRecord::sample`] as pretty-printed JSON.
pub fn write_default_config(path: &Path) -> Result<(), FileAccessError> {
    let create_err = |source: io::Error| FileAccessError::Create {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_string_pretty(&ConfigRecord::sample())
        .map_err(|e| create_err(e.into()))?;
    json.push('\n');

    fs::write(path, json).map_err(create_err)?;
    Ok(())
}
