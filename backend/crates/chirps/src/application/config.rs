//! Application Configuration
//!
//! Content rules for the chirps application layer.

use std::collections::HashSet;

/// Default maximum chirp length in bytes
pub const DEFAULT_MAX_CHIRP_LENGTH: usize = 140;

/// Words masked out of chirps unless overridden
pub const DEFAULT_DENYLIST: &[&str] = &["kerfuffle", "sharbert", "fornax"];

/// Chirps application configuration
#[derive(Debug, Clone)]
pub struct ChirpConfig {
    /// Maximum body length, checked before masking
    pub max_length: usize,
    /// Lowercase words to mask
    pub denylist: HashSet<String>,
}

impl Default for ChirpConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_CHIRP_LENGTH,
            denylist: DEFAULT_DENYLIST.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ChirpConfig {
    /// Replace the denylist
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn with_denylist<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let denylist = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { denylist, ..self }
    }

    /// Parse a comma-separated denylist such as `"kerfuffle,sharbert"`
    pub fn with_denylist_csv(self, csv: &str) -> Self {
        self.with_denylist(csv.split(','))
    }
}
