use serde::Serialize;
use std::fmt;

/// Repository modes accepted by the validator, in the order they are reported.
pub const VALID_REPOSITORY_MODES: [&str; 3] = ["local", "remote", "test"];

/// Upper bound (inclusive) for `maxDepth`.
pub const MAX_DEPTH_LIMIT: i32 = 100;

/// Accepted output image extensions, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 2] = [".png", ".jpg"];

/// Keys as they appear in the configuration file.
pub mod keys {
    pub const PACKAGE_NAME: &str = "packageName";
    pub const REPOSITORY_URL: &str = "repositoryUrl";
    pub const REPOSITORY_MODE: &str = "repositoryMode";
    pub const OUTPUT_IMAGE: &str = "outputImage";
    pub const ASCII_TREE_OUTPUT: &str = "asciiTreeOutput";
    pub const MAX_DEPTH: &str = "maxDepth";
}

/// Parameters of a single analysis run, as read from the configuration file.
///
/// Every field is optional until the validator has accepted the record. The
/// record is assembled through [`ConfigRecordBuilder`] and is read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    package_name: Option<String>,
    repository_url: Option<String>,
    repository_mode: Option<String>,
    output_image: Option<String>,
    ascii_tree_output: Option<bool>,
    max_depth: Option<i32>,
}

impl ConfigRecord {
    pub fn builder() -> ConfigRecordBuilder {
        ConfigRecordBuilder::default()
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    pub fn repository_mode(&self) -> Option<&str> {
        self.repository_mode.as_deref()
    }

    pub fn output_image(&self) -> Option<&str> {
        self.output_image.as_deref()
    }

    pub fn ascii_tree_output(&self) -> Option<bool> {
        self.ascii_tree_output
    }

    pub fn max_depth(&self) -> Option<i32> {
        self.max_depth
    }

    /// A ready-to-edit record used when writing a fresh `config.json`.
    pub fn sample() -> Self {
        Self::builder()
            .package_name("example-package")
            .repository_url("https://github.com/example/example-package")
            .repository_mode("remote")
            .output_image("dependencies.png")
            .ascii_tree_output(true)
            .max_depth(5)
            .build()
    }
}

fn opt_or_null<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

impl fmt::Display for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config{{packageName='{}', repositoryUrl='{}', repositoryMode='{}', \
             outputImage='{}', asciiTreeOutput={}, maxDepth={}}}",
            opt_or_null(&self.package_name),
            opt_or_null(&self.repository_url),
            opt_or_null(&self.repository_mode),
            opt_or_null(&self.output_image),
            opt_or_null(&self.ascii_tree_output),
            opt_or_null(&self.max_depth),
        )
    }
}

/// Incremental construction of a [`ConfigRecord`] during extraction.
#[derive(Debug, Default)]
pub struct ConfigRecordBuilder {
    record: ConfigRecord,
}

impl ConfigRecordBuilder {
    pub fn package_name(mut self, value: impl Into<String>) -> Self {
        self.record.package_name = Some(value.into());
        self
    }

    pub fn repository_url(mut self, value: impl Into<String>) -> Self {
        self.record.repository_url = Some(value.into());
        self
    }

    pub fn repository_mode(mut self, value: impl Into<String>) -> Self {
        self.record.repository_mode = Some(value.into());
        self
    }

    pub fn output_image(mut self, value: impl Into<String>) -> Self {
        self.record.output_image = Some(value.into());
        self
    }

    pub fn ascii_tree_output(mut self, value: bool) -> Self {
        self.record.ascii_tree_output = Some(value);
        self
    }

    pub fn max_depth(mut self, value: i32) -> Self {
        self.record.max_depth = Some(value);
        self
    }

    pub fn build(self) -> ConfigRecord {
        self.record
    }
}
