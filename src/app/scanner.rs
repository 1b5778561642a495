use crate::app::error::ParseError;
use crate::app::models::{keys, ConfigRecord};
use regex::Regex;

/// How much structure the scanner insists on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Only the per-key patterns matter.
    #[default]
    Lenient,
    /// Content must be wrapped in `{ }` and string values must not be empty.
    Strict,
}

/// Extracts the six configuration values from a flat JSON-like text.
///
/// This is not a JSON parser. All whitespace is removed first (so `"my pkg"`
/// becomes `mypkg`), then every key is looked up on its own with a fixed
/// pattern, wherever it appears in the text. Nested objects, arrays, escaped
/// quotes and signed or fractional numbers are not understood: such input
/// either reports the key as missing or yields a truncated value.
pub struct Scanner {
    compact: String,
    mode: ParseMode,
}

impl Scanner {
    pub fn new(content: &str, mode: ParseMode) -> Result<Self, ParseError> {
        let compact = strip_whitespace(content);
        log::debug!(
            "Compacted configuration from {} to {} bytes",
            content.len(),
            compact.len()
        );

        let compact = match mode {
            ParseMode::Lenient => compact,
            ParseMode::Strict => strip_outer_braces(&compact)?.to_string(),
        };

        Ok(Self { compact, mode })
    }

    /// Extracts the fields in a fixed order, stopping at the first failure.
    pub fn scan(&self) -> Result<ConfigRecord, ParseError> {
        let record = ConfigRecord::builder()
            .package_name(self.string_value(keys::PACKAGE_NAME)?)
            .repository_url(self.string_value(keys::REPOSITORY_URL)?)
            .repository_mode(self.string_value(keys::REPOSITORY_MODE)?)
            .output_image(self.string_value(keys::OUTPUT_IMAGE)?)
            .ascii_tree_output(self.bool_value(keys::ASCII_TREE_OUTPUT)?)
            .max_depth(self.int_value(keys::MAX_DEPTH)?)
            .build();

        log::debug!("Scanned configuration: {}", record);
        Ok(record)
    }

    fn capture(&self, key: &'static str, value_pattern: &str) -> Result<Option<&str>, ParseError> {
        let pattern = format!("\"{}\":{}", regex::escape(key), value_pattern);
        let re = Regex::new(&pattern).map_err(|source| ParseError::Pattern { key, source })?;

        Ok(re
            .captures(&self.compact)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()))
    }

    fn string_value(&self, key: &'static str) -> Result<String, ParseError> {
        let value = self
            .capture(key, "\"([^\"]*)\"")?
            .ok_or(ParseError::MissingValue { key })?;

        if self.mode == ParseMode::Strict && value.is_empty() {
            return Err(ParseError::EmptyValue { key });
        }

        Ok(value.to_string())
    }

    fn bool_value(&self, key: &'static str) -> Result<bool, ParseError> {
        let value = self
            .capture(key, "(true|false)")?
            .ok_or(ParseError::MissingValue { key })?;

        Ok(value == "true")
    }

    fn int_value(&self, key: &'static str) -> Result<i32, ParseError> {
        let digits = self
            .capture(key, "([0-9]+)")?
            .ok_or(ParseError::MissingValue { key })?;

        digits
            .parse::<i32>()
            .map_err(|source| ParseError::InvalidNumber { key, source })
    }
}

/// Parses configuration text into a record.
pub fn parse(content: &str, mode: ParseMode) -> Result<ConfigRecord, ParseError> {
    Scanner::new(content, mode)?.scan()
}

// Space, tab, line feed, vertical tab, form feed and carriage return.
fn is_config_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn strip_whitespace(content: &str) -> String {
    content.chars().filter(|c| !is_config_whitespace(*c)).collect()
}

fn strip_outer_braces(compact: &str) -> Result<&str, ParseError> {
    if compact.len() < 2 || !compact.starts_with('{') || !compact.ends_with('}') {
        return Err(ParseError::Structure);
    }
    Ok(&compact[1..compact.len() - 1])
}
