//! Configuration file handling

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::rewrite::BuiltinTable;

/// Rule file used when neither the command line nor the config names one
pub const DEFAULT_RULES_PATH: &str = "rules.txt";

/// First value of the default range
pub const DEFAULT_START: u64 = 0;

/// End (exclusive) of the default range
pub const DEFAULT_END: u64 = 10_000;

/// User configuration stored in a JSON file
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct TellerConfig {
    /// Rule table file
    pub rules_path: PathBuf,
    /// Built-in table to use instead of `rules_path`
    pub builtin: Option<BuiltinTable>,
    /// First value converted by `range` (inclusive)
    pub start: u64,
    /// Last value converted by `range` (exclusive)
    pub end: u64,
}

impl TellerConfig {
    /// Load configuration from an optional path; no path means defaults
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let Some(path) = custom_path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        rules_path: Option<PathBuf>,
        builtin: Option<BuiltinTable>,
        start: Option<u64>,
        end: Option<u64>,
    ) -> Self {
        // An explicit rule file on the command line beats a configured built-in.
        let builtin = match (&rules_path, builtin) {
            (_, Some(table)) => Some(table),
            (Some(_), None) => None,
            (None, None) => self.builtin,
        };

        Self {
            rules_path: rules_path.unwrap_or_else(|| self.rules_path.clone()),
            builtin,
            start: start.unwrap_or(self.start),
            end: end.unwrap_or(self.end),
        }
    }

    /// Check that the range is well formed
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            bail!(
                "Range start {} is greater than range end {}",
                self.start,
                self.end
            );
        }
        Ok(())
    }
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
            builtin: None,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}
