// Re-export modules
pub mod config;
pub mod extract;
pub mod filter;
pub mod output;
pub mod results;

// Re-export commonly used types for convenience
pub use extract::{DEFAULT_PREFIX, Extractor, extract_urls};
pub use results::{ExtractionReport, UrlSet};

use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

/// Where the text to scan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Local file, read in full as UTF-8
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Interpret a command-line argument ("-" means stdin)
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Human readable name used in logs and reports
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Load the entire input as text
    pub fn read_to_string(&self) -> Result<String, Box<dyn Error>> {
        match self {
            InputSource::File(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                Ok(text)
            }
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

/// Main builder for a single extraction run
pub struct Extraction {
    source: InputSource,
    prefix: String,
    filter: filter::UrlFilterConfig,
}

impl Extraction {
    /// Create a new Extraction builder reading from the given source
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            prefix: DEFAULT_PREFIX.to_string(),
            filter: filter::UrlFilterConfig::default(),
        }
    }

    /// Set the URL prefix to scan for
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set include/exclude patterns for extracted URLs
    pub fn with_filter(mut self, filter: filter::UrlFilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Apply prefix and filter settings from a configuration
    ///
    /// The input path and output format in the configuration are left to the
    /// caller, since the source is fixed when the builder is created.
    pub fn with_config(self, config: &config::ExtractorConfig) -> Self {
        self.with_prefix(config.prefix.clone())
            .with_filter(config.filter())
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = config::ExtractorConfig::from_file(path)?;
        Ok(self.with_config(&config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn Error>> {
        let config = config::ExtractorConfig::from_json(config_str)?;
        Ok(self.with_config(&config))
    }

    /// Read the source and extract its URLs
    pub fn run(self) -> Result<ExtractionReport, Box<dyn Error>> {
        ::log::info!("Reading {}", self.source.describe());
        let text = self.source.read_to_string()?;
        ::log::debug!("Loaded {} bytes", text.len());
        self.run_on_text(&text)
    }

    /// Extract URLs from text that has already been loaded
    pub fn run_on_text(&self, text: &str) -> Result<ExtractionReport, Box<dyn Error>> {
        let extractor = Extractor::new(&self.prefix)?;
        let url_filter = filter::UrlFilter::new(&self.filter)?;

        let matches = extractor.find_all(text);
        let total_matches = matches.len();

        let mut urls: UrlSet = matches.into_iter().collect();
        if !self.filter.is_empty() {
            let before = urls.len();
            urls.retain(|url| url_filter.allows(url));
            ::log::debug!("Filter removed {} URLs", before - urls.len());
        }

        ::log::info!(
            "Extracted {} unique URLs from {} matches",
            urls.len(),
            total_matches
        );

        Ok(ExtractionReport::new(
            self.source.describe(),
            self.prefix.clone(),
            total_matches,
            urls,
        ))
    }
}
