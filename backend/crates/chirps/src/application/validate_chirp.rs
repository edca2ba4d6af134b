//! Validate Chirp Use Case
//!
//! Runs the content rules without storing anything.

use std::sync::Arc;

use crate::application::config::ChirpConfig;
use crate::domain::services::clean_body;
use crate::error::ChirpResult;

pub struct ValidateChirpUseCase {
    config: Arc<ChirpConfig>,
}

impl ValidateChirpUseCase {
    pub fn new(config: Arc<ChirpConfig>) -> Self {
        Self { config }
    }

    /// Return the cleaned body, or `TooLong`
    pub fn execute(&self, body: &str) -> ChirpResult<String> {
        let cleaned = clean_body(body, self.config.max_length, &self.config.denylist)?;
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChirpError;

    #[test]
    fn test_execute() {
        let use_case = ValidateChirpUseCase::new(Arc::new(ChirpConfig::default()));

        let cleaned = use_case
            .execute("I hear Mastodon is better than Chirpy. sharbert I need to migrate")
            .unwrap();
        assert_eq!(
            cleaned,
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
        assert!(matches!(
            use_case.execute(&"x".repeat(141)),
            Err(ChirpError::TooLong { max: 140, actual: 141 })
        ));
    }
}
