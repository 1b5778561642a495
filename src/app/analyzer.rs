use crate::app::error::ValidationError;
use crate::app::models::ConfigRecord;
use crate::app::validator::validate;
use std::io::{self, Write};

/// Placeholder for the dependency analysis.
///
/// Owns a record that has passed validation; construction is the only place
/// the validator runs.
pub struct DependencyAnalyzer {
    config: ConfigRecord,
}

impl DependencyAnalyzer {
    pub fn new(config: ConfigRecord) -> Result<Self, ValidationError> {
        validate(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConfigRecord {
        &self.config
    }

    /// Writes the status lines of a run. No dependency graph is built yet.
    pub fn analyze<W: Write>(&self, out: &mut W) -> io::Result<()> {
        // Validation guarantees every field is set.
        let package = self.config.package_name().unwrap_or_default();
        let mode = self.config.repository_mode().unwrap_or_default();
        let depth = self.config.max_depth().unwrap_or_default();
        let image = self.config.output_image().unwrap_or_default();

        log::info!("Analyzing {} ({} mode, depth {})", package, mode, depth);

        writeln!(out, "Starting dependency analysis for package: {}", package)?;
        writeln!(out, "Repository mode: {}", mode)?;
        writeln!(out, "Maximum analysis depth: {}", depth)?;
        writeln!(out, "Analysis completed successfully!")?;
        writeln!(out, "Results will be saved to: {}", image)?;

        if self.config.ascii_tree_output() == Some(true) {
            writeln!(out, "ASCII dependency tree will be generated")?;
        }

        Ok(())
    }
}
