//! Session Tokens
//!
//! Stateless, signed, time-bounded access tokens (JWT, HS256).
//!
//! A token carries the issuer, the subject user id, the issue time and the
//! expiry. It is valid only while the signature verifies against the
//! server secret and the current time is strictly before `exp`. There is
//! no revocation list; expiry is the only way a token stops working.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Issuer stamped into every token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Token issuance/validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signing failed inside the JWT library
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    /// Wrong secret, tampered token, or unexpected algorithm
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    /// Not a token, or its claims are unusable
    #[error("Token is malformed")]
    Malformed,

    /// Correctly signed, but minted by someone else
    #[error("Token issuer is not accepted")]
    InvalidIssuer,
}

/// Registered claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub iss: String,
    /// Subject user id (hyphenated UUID)
    pub sub: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

/// Issue a token for `subject`, valid for `ttl` from now
///
/// A zero or negative `ttl` produces a token that is already expired. A
/// positive one yields an `exp` at or just after `now + ttl`.
pub fn issue_token(subject: Uuid, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| TokenError::SigningFailed("expiry out of range".to_string()))?;

    // A positive ttl rounds up to the next whole second, so the token is
    // never cut short by truncation.
    let mut exp = expires_at.timestamp();
    if ttl > Duration::zero() && expires_at.timestamp_subsec_nanos() > 0 {
        exp += 1;
    }

    let claims = SessionClaims {
        iss: TOKEN_ISSUER.to_string(),
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::SigningFailed(e.to_string()))
}

/// Validate a token and recover its subject
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    let claims = decode_claims(token, secret)?;

    // `now >= exp` is expired, so a zero ttl never validates.
    if Utc::now().timestamp() >= claims.exp {
        return Err(TokenError::Expired);
    }

    Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)
}

/// Verify the signature and issuer and return the raw claims
///
/// Expiry is not checked here; see [`validate_token`].
pub fn decode_claims(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = false;
    validation.set_issuer(&[TOKEN_ISSUER]);
    // `exp` may be negative, which the library would report as missing.
    validation.set_required_spec_claims(&["iss", "sub"]);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
            TokenError::InvalidSignature
        }
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        JwtErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
        _ => TokenError::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_validate() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET, Duration::hours(1)).unwrap();

        assert_eq!(validate_token(&token, SECRET), Ok(user_id));
    }

    #[test]
    fn test_claims_shape() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET, Duration::minutes(5)).unwrap();
        let claims = decode_claims(&token, SECRET).unwrap();

        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.sub, user_id.to_string());
        // Whole-second ttl, plus at most one second of rounding
        assert!((300..=301).contains(&(claims.exp - claims.iat)));
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let token = issue_token(Uuid::new_v4(), SECRET, -Duration::hours(1)).unwrap();
        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_far_past_ttl_is_expired() {
        let ttl = -Duration::days(365 * 100);
        let token = issue_token(Uuid::new_v4(), SECRET, ttl).unwrap();

        assert!(decode_claims(&token, SECRET).unwrap().exp < 0);
        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_subsecond_ttl_is_valid_at_once() {
        for _ in 0..20 {
            let user_id = Uuid::new_v4();
            let token = issue_token(user_id, SECRET, Duration::milliseconds(900)).unwrap();

            let claims = decode_claims(&token, SECRET).unwrap();
            assert!((1..=2).contains(&(claims.exp - claims.iat)));
            assert_eq!(validate_token(&token, SECRET), Ok(user_id));
        }
    }

    #[test]
    fn test_subsecond_negative_ttl_is_expired() {
        let token = issue_token(Uuid::new_v4(), SECRET, -Duration::milliseconds(500)).unwrap();
        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let token = issue_token(Uuid::new_v4(), SECRET, Duration::zero()).unwrap();
        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret() {
        let token = issue_token(Uuid::new_v4(), "right-secret", Duration::hours(1)).unwrap();
        assert_eq!(
            validate_token(&token, "wrong-secret"),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_secret_wins_over_expiry() {
        let token = issue_token(Uuid::new_v4(), "right-secret", -Duration::hours(1)).unwrap();
        assert_eq!(
            validate_token(&token, "wrong-secret"),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload() {
        let victim = issue_token(Uuid::new_v4(), SECRET, Duration::hours(1)).unwrap();
        let forged = issue_token(Uuid::new_v4(), "attacker", Duration::hours(1)).unwrap();

        // Attacker's payload under the victim's header and signature.
        let victim_parts: Vec<&str> = victim.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!(
            "{}.{}.{}",
            victim_parts[0], forged_parts[1], victim_parts[2]
        );

        assert_eq!(
            validate_token(&spliced, SECRET),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(validate_token("", SECRET), Err(TokenError::Malformed));
        assert_eq!(
            validate_token("not-a-token", SECRET),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_foreign_issuer() {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            iss: "someone-else".to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            validate_token(&token, SECRET),
            Err(TokenError::InvalidIssuer)
        );
    }

    #[test]
    fn test_subject_must_be_uuid() {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "user-42".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_missing_expiry_is_malformed() {
        let now = Utc::now().timestamp();
        let claims = serde_json::json!({
            "iss": TOKEN_ISSUER,
            "sub": Uuid::new_v4().to_string(),
            "iat": now,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_missing_subject_is_malformed() {
        let now = Utc::now().timestamp();
        let claims = serde_json::json!({ "iss": TOKEN_ISSUER, "iat": now, "exp": now + 3600 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(validate_token(&token, SECRET), Err(TokenError::Malformed));
    }
}
