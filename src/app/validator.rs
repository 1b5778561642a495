use crate::app::error::ValidationError;
use crate::app::models::{
    keys, ConfigRecord, IMAGE_EXTENSIONS, MAX_DEPTH_LIMIT, VALID_REPOSITORY_MODES,
};

/// Checks a parsed record against the domain rules.
///
/// Fields are checked in a fixed order and the first violation is returned:
/// packageName, repositoryUrl, repositoryMode, maxDepth, outputImage,
/// asciiTreeOutput.
pub fn validate(record: &ConfigRecord) -> Result<(), ValidationError> {
    require_text(keys::PACKAGE_NAME, record.package_name())?;
    require_text(keys::REPOSITORY_URL, record.repository_url())?;
    validate_repository_mode(record.repository_mode())?;
    validate_max_depth(record.max_depth())?;
    validate_output_image(record.output_image())?;

    if record.ascii_tree_output().is_none() {
        return Err(ValidationError::Missing {
            field: keys::ASCII_TREE_OUTPUT,
        });
    }

    log::debug!("Configuration passed validation");
    Ok(())
}

fn require_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(value)
}

fn validate_repository_mode(mode: Option<&str>) -> Result<(), ValidationError> {
    let mode = mode.ok_or(ValidationError::Missing {
        field: keys::REPOSITORY_MODE,
    })?;

    if !VALID_REPOSITORY_MODES.contains(&mode) {
        return Err(ValidationError::InvalidRepositoryMode {
            value: mode.to_string(),
        });
    }
    Ok(())
}

fn validate_max_depth(depth: Option<i32>) -> Result<(), ValidationError> {
    let depth = depth.ok_or(ValidationError::Missing {
        field: keys::MAX_DEPTH,
    })?;

    if depth <= 0 {
        return Err(ValidationError::DepthNotPositive { value: depth });
    }
    if depth > MAX_DEPTH_LIMIT {
        return Err(ValidationError::DepthTooLarge {
            value: depth,
            limit: MAX_DEPTH_LIMIT,
        });
    }
    Ok(())
}

fn validate_output_image(image: Option<&str>) -> Result<(), ValidationError> {
    let image = require_text(keys::OUTPUT_IMAGE, image)?;
    let lowered = image.to_lowercase();

    if !IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        return Err(ValidationError::InvalidImageExtension {
            value: image.to_string(),
        });
    }
    Ok(())
}
