use crate::extract::DEFAULT_PREFIX;
use crate::filter::UrlFilterConfig;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "backend/data/campus-main.js";

/// Configuration for an extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Path of the text file to scan ("-" for stdin)
    #[serde(default = "default_input")]
    pub input: String,

    /// URL prefix to scan for
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Regex patterns for URLs to keep
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for URLs to drop
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            prefix: default_prefix(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Include/exclude patterns as a filter configuration
    pub fn filter(&self) -> UrlFilterConfig {
        UrlFilterConfig {
            include_patterns: self.include_patterns.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}
