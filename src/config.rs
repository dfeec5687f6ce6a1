//! Runtime configuration for the vanity address generator.

use std::path::PathBuf;

use clap::Parser;

const PATTERN_HELP: &str = "\
Pattern syntax:
  \"123*\"      address starts with \"123\"
  \"*123\"      address ends with \"123\"
  \"*123*\"     address contains \"123\"
  \"123*321\"   address starts with \"123\" and ends with \"321\"
  \"*123*456*\" address contains \"123\" followed by \"456\"
  \"#\"         any digit (0-9)
  \"@\"         any hex letter (a-f)
  \"###*\"      starts with any 3 digits
  Multiple patterns can be given comma-separated:
  \"123*,*456,*789*\" matches any of the three

Examples:
  genaddr --pattern \"123*\"
  genaddr --pattern \"dead*beef\"
  genaddr --pattern \"*cafe*,*babe*\" --workers 8 --continue --output results.txt";

/// Ethereum vanity address generator with wildcard pattern matching
#[derive(Parser, Debug, Clone)]
#[command(name = "genaddr", version, about, after_help = PATTERN_HELP)]
pub struct Config {
    /// Comma-separated wildcard patterns to match against the address body
    #[arg(short, long)]
    pub pattern: String,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// Continue searching after finding a match
    #[arg(short = 'c', long = "continue")]
    pub continue_search: bool,

    /// Append found addresses to this file (created if absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Validates everything that is not the pattern text itself; pattern
    /// compilation reports its own errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.pattern.trim().is_empty() {
            return Err(ConfigError::MissingPattern);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("the --pattern flag is required and cannot be empty")]
    MissingPattern,
}
