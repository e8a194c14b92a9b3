use campus_urls::config::ExtractorConfig;
use campus_urls::output::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "campus-urls")]
#[command(about = "Lists the unique campus map URLs found in a text file")]
#[command(version)]
pub struct Args {
    /// Text file to scan ("-" reads standard input)
    pub input: Option<String>,

    /// URL prefix to look for
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Keep only URLs matching this regex (repeatable)
    #[arg(short, long = "include")]
    pub include: Vec<String>,

    /// Drop URLs matching this regex (repeatable, wins over --include)
    #[arg(short, long = "exclude")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Merge command-line values over a base configuration
    pub fn apply_to(&self, mut config: ExtractorConfig) -> ExtractorConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if !self.include.is_empty() {
            config.include_patterns = self.include.clone();
        }
        if !self.exclude.is_empty() {
            config.exclude_patterns = self.exclude.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}
