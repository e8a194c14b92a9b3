use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for filtering extracted URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    /// Regex patterns for URLs to keep (if empty, all URLs are kept unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for URLs to drop (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl UrlFilterConfig {
    /// True when no patterns are configured and every URL passes
    pub fn is_empty(&self) -> bool {
        self.include_patterns.is_empty() && self.exclude_patterns.is_empty()
    }
}

/// Include/exclude filter applied to extracted URLs
#[derive(Debug, Default)]
pub struct UrlFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &UrlFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = compile_all(&config.include_patterns)?;
        let exclude_regexes = compile_all(&config.exclude_patterns)?;

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a URL should be kept
    pub fn allows(&self, url: &str) -> bool {
        if self.exclude_regexes.iter().any(|regex| regex.is_match(url)) {
            ::log::debug!("Excluded by pattern: {}", url);
            return false;
        }

        if !self.include_regexes.is_empty()
            && !self.include_regexes.iter().any(|regex| regex.is_match(url))
        {
            ::log::debug!("Not matched by any include pattern: {}", url);
            return false;
        }

        true
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|pattern| Regex::new(pattern)).collect()
}
