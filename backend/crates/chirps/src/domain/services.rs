//! Domain Services
//!
//! Pure content rules for chirp bodies.

use std::collections::HashSet;

use thiserror::Error;

/// Replacement for a denylisted word
pub const MASK: &str = "****";

/// Content rule violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Chirp is too long ({actual} > {max} bytes)")]
    TooLong { max: usize, actual: usize },
}

/// Check the length limit, then mask denylisted words
///
/// The length is the UTF-8 byte length. Over-length text is rejected
/// before any masking happens.
///
/// Words are the pieces between single spaces. A word is masked when its
/// lowercase form is exactly a denylist entry, so punctuation attached to
/// a word keeps it unmasked and runs of spaces survive unchanged.
pub fn clean_body(
    text: &str,
    max_length: usize,
    denylist: &HashSet<String>,
) -> Result<String, ContentError> {
    if text.len() > max_length {
        return Err(ContentError::TooLong {
            max: max_length,
            actual: text.len(),
        });
    }

    let cleaned = text
        .split(' ')
        .map(|word| {
            if denylist.contains(&word.to_lowercase()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denylist() -> HashSet<String> {
        ["kerfuffle", "sharbert", "fornax"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_masks_denylisted_word() {
        let cleaned = clean_body(
            "This is a kerfuffle opinion I need to share",
            140,
            &denylist(),
        );
        assert_eq!(
            cleaned,
            Ok("This is a **** opinion I need to share".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        let cleaned = clean_body("Fornax FORNAX fOrNaX", 140, &denylist());
        assert_eq!(cleaned, Ok("**** **** ****".to_string()));
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let cleaned = clean_body("what a kerfuffle! Sharbert.", 140, &denylist());
        assert_eq!(cleaned, Ok("what a kerfuffle! Sharbert.".to_string()));
    }

    #[test]
    fn test_substrings_are_kept() {
        let cleaned = clean_body("kerfufflesharbert fornaxes", 140, &denylist());
        assert_eq!(cleaned, Ok("kerfufflesharbert fornaxes".to_string()));
    }

    #[test]
    fn test_spacing_is_preserved() {
        let cleaned = clean_body("  sharbert  fornax ", 140, &denylist());
        assert_eq!(cleaned, Ok("  ****  **** ".to_string()));
    }

    #[test]
    fn test_tabs_do_not_split() {
        let cleaned = clean_body("fornax\tsharbert", 140, &denylist());
        assert_eq!(cleaned, Ok("fornax\tsharbert".to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(clean_body("", 140, &denylist()), Ok(String::new()));
    }

    #[test]
    fn test_length_boundary() {
        let at_limit = "a".repeat(140);
        assert_eq!(clean_body(&at_limit, 140, &denylist()), Ok(at_limit.clone()));

        let over = "a".repeat(141);
        assert_eq!(
            clean_body(&over, 140, &denylist()),
            Err(ContentError::TooLong {
                max: 140,
                actual: 141
            })
        );
    }

    #[test]
    fn test_length_checked_before_masking() {
        // Masking would shorten this to under the limit, but it is still rejected.
        let text = format!("{} {}", "kerfuffle", "a".repeat(4));
        assert_eq!(text.len(), 14);
        assert!(matches!(
            clean_body(&text, 10, &denylist()),
            Err(ContentError::TooLong { .. })
        ));
    }

    #[test]
    fn test_length_is_bytes() {
        // 47 three-byte characters = 141 bytes
        let text = "あ".repeat(47);
        assert!(clean_body(&text, 140, &denylist()).is_err());
    }
}
