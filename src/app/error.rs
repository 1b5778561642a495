use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use crate::app::models::VALID_REPOSITORY_MODES;

/// Problems reaching or reading the configuration file.
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("configuration path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("configuration file is empty: {}", .0.display())]
    Empty(PathBuf),
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create default configuration file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A required key could not be extracted from the configuration text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse configuration: content must start with `{{` and end with `}}`")]
    Structure,
    #[error("failed to parse configuration: missing value for required key `{key}`")]
    MissingValue { key: &'static str },
    #[error("failed to parse configuration: value for key `{key}` must not be empty")]
    EmptyValue { key: &'static str },
    #[error("failed to parse configuration: invalid numeric format for key `{key}`")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to parse configuration: bad pattern for key `{key}`: {source}")]
    Pattern {
        key: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl ParseError {
    /// The configuration key the failure refers to, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ParseError::Structure => None,
            ParseError::MissingValue { key }
            | ParseError::EmptyValue { key }
            | ParseError::InvalidNumber { key, .. }
            | ParseError::Pattern { key, .. } => Some(*key),
        }
    }
}

/// A parsed value breaks one of the domain rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` must be set")]
    Missing { field: &'static str },
    #[error("`{field}` must not be blank")]
    Blank { field: &'static str },
    #[error(
        "invalid `repositoryMode` `{value}`; valid options: {}",
        VALID_REPOSITORY_MODES.join(", ")
    )]
    InvalidRepositoryMode { value: String },
    #[error("`maxDepth` must be a positive number (got {value})")]
    DepthNotPositive { value: i32 },
    #[error("`maxDepth` must not exceed {limit} (got {value})")]
    DepthTooLarge { value: i32, limit: i32 },
    #[error("`outputImage` must have a .png or .jpg extension (got `{value}`)")]
    InvalidImageExtension { value: String },
}

impl ValidationError {
    /// The configuration field the failure refers to.
    pub fn field(&self) -> &'static str {
        use crate::app::models::keys;

        match self {
            ValidationError::Missing { field } | ValidationError::Blank { field } => *field,
            ValidationError::InvalidRepositoryMode { .. } => keys::REPOSITORY_MODE,
            ValidationError::DepthNotPositive { .. } | ValidationError::DepthTooLarge { .. } => {
                keys::MAX_DEPTH
            }
            ValidationError::InvalidImageExtension { .. } => keys::OUTPUT_IMAGE,
        }
    }
}

/// Anything that ends a run early.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
