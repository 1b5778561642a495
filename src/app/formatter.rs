use crate::app::error::ValidationError;
use crate::app::models::{keys, ConfigRecord};

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn banner() -> &'static str {
        "Dependency Analyzer"
    }

    /// One `key: value` line per field. Fails on the first unset field.
    pub fn configuration_listing(record: &ConfigRecord) -> Result<String, ValidationError> {
        let entries = [
            (keys::PACKAGE_NAME, record.package_name().map(str::to_string)),
            (keys::REPOSITORY_URL, record.repository_url().map(str::to_string)),
            (keys::REPOSITORY_MODE, record.repository_mode().map(str::to_string)),
            (keys::OUTPUT_IMAGE, record.output_image().map(str::to_string)),
            (
                keys::ASCII_TREE_OUTPUT,
                record.ascii_tree_output().map(|v| v.to_string()),
            ),
            (keys::MAX_DEPTH, record.max_depth().map(|v| v.to_string())),
        ];

        let mut output = String::from("\nConfiguration parameters\n");
        for (field, value) in entries {
            let value = value.ok_or(ValidationError::Missing { field })?;
            output.push_str(&format!("{}: {}\n", field, value));
        }

        Ok(output)
    }

    pub fn default_created(path: &str) -> String {
        format!(
            "Created default configuration file: {path}\n\
             Please adjust the parameters in {path} and run the tool again"
        )
    }

    pub fn usage() -> &'static str {
        "\nUsage:\n  \
         dependency-analyzer [config-file]\n\
         \nExamples:\n  \
         dependency-analyzer                    # uses config.json\n  \
         dependency-analyzer my-config.json     # uses my-config.json\n\
         \nIf config.json does not exist, it is created with sample values."
    }
}
