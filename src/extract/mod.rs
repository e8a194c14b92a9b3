use crate::results::UrlSet;
use regex::Regex;

#[cfg(test)]
mod tests;

/// URL prefix scanned for when none is configured
pub const DEFAULT_PREFIX: &str = "https://campusmap.ufl.edu/";

/// Characters allowed after the prefix: anything but whitespace, quotes and backslash
const URL_TAIL: &str = r#"[^\s"'\\]+"#;

/// Scans flat text for URLs beginning with a fixed prefix
///
/// The input is never parsed structurally. A URL ends at the first
/// whitespace, quote or backslash, so both quoted string literals and bare
/// URLs in running text are picked up.
#[derive(Debug, Clone)]
pub struct Extractor {
    prefix: String,
    pattern: Regex,
    exact: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX).expect("Default extraction pattern should be valid")
    }
}

impl Extractor {
    /// Create an extractor for the given prefix (matched literally)
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let body = format!("{}{}", regex::escape(prefix), URL_TAIL);
        let pattern = Regex::new(&body)?;
        let exact = Regex::new(&format!("^(?:{})$", body))?;

        ::log::debug!("Compiled extraction pattern: {}", pattern.as_str());

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
            exact,
        })
    }

    /// Prefix this extractor scans for
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the regex source used for scanning
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// All non-overlapping matches in order of appearance, duplicates included
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Unique matches in ascending order
    pub fn extract(&self, text: &str) -> UrlSet {
        let matches = self.find_all(text);
        ::log::debug!("Found {} raw matches", matches.len());
        matches.into_iter().collect()
    }

    /// Whether the whole candidate string is a single URL of this pattern
    pub fn is_match_exact(&self, candidate: &str) -> bool {
        self.exact.is_match(candidate)
    }
}

/// Extract sorted unique URLs with the default prefix
pub fn extract_urls(text: &str) -> Vec<String> {
    Extractor::default().extract(text).into_vec()
}
