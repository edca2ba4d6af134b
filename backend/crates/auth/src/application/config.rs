//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;

/// Lifetime of a login token when the client does not ask for one
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Token lifetime used when the request gives none (or an unusable one)
    pub default_token_ttl: Duration,
    /// Longest lifetime a client may request
    pub max_token_ttl: Duration,
}

impl AuthConfig {
    /// Config signing with `jwt_secret` and the default token lifetimes
    ///
    /// There is no `Default`: every config names its secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            default_token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            max_token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(platform::crypto::random_secret(32))
    }

    /// Resolve the lifetime of a login token
    ///
    /// Missing, non-positive, or too-large requests fall back to the default.
    pub fn token_ttl(&self, requested_secs: Option<i64>) -> Duration {
        match requested_secs {
            Some(secs) if secs > 0 && secs <= self.max_token_ttl.num_seconds() => {
                Duration::seconds(secs)
            }
            _ => self.default_token_ttl,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("default_token_ttl", &self.default_token_ttl)
            .field("max_token_ttl", &self.max_token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl() {
        let config = AuthConfig::new("secret");
        let default = Duration::seconds(3600);

        assert_eq!(config.token_ttl(None), default);
        assert_eq!(config.token_ttl(Some(0)), default);
        assert_eq!(config.token_ttl(Some(-5)), default);
        assert_eq!(config.token_ttl(Some(3601)), default);
        assert_eq!(config.token_ttl(Some(1)), Duration::seconds(1));
        assert_eq!(config.token_ttl(Some(3600)), default);
        assert_eq!(config.token_ttl(Some(60)), Duration::seconds(60));
    }

    #[test]
    fn test_development_secret_is_random() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert!(!a.jwt_secret.is_empty());
        assert_ne!(a.jwt_secret, b.jwt_secret);
    }

    #[test]
    fn test_new_keeps_secret_and_default_lifetimes() {
        let config = AuthConfig::new("hunter2");
        assert_eq!(config.jwt_secret, "hunter2");
        assert_eq!(config.default_token_ttl, Duration::seconds(3600));
        assert_eq!(config.max_token_ttl, Duration::seconds(3600));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", AuthConfig::new("hunter2"));
        assert!(!debug.contains("hunter2"));
    }
}
