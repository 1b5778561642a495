use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::app::config::DEFAULT_CONFIG_PATH;
use crate::app::scanner::ParseMode;

#[derive(Parser, Debug)]
#[command(
    name = "dependency-analyzer",
    author,
    version,
    about = "Load and validate a dependency analysis configuration"
)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Require surrounding braces and non-empty string values
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}
