//! Tenant slug rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::MAX_FIELD_LENGTH;
use crate::error::{DomainError, DomainResult};

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("slug pattern is valid"));

/// Normalize a tenant slug for storage and lookup.
///
/// Surrounding whitespace is trimmed and the slug is lower-cased, so
/// `"Acme-Corp"` and `"acme-corp"` name the same tenant.
///
/// # Errors
/// Returns a validation error if the slug is empty, longer than
/// [`MAX_FIELD_LENGTH`] or contains anything other than ASCII letters,
/// digits, `-` and `_`.
pub fn normalize_slug(raw: &str) -> DomainResult<String> {
    let slug = raw.trim().to_lowercase();

    if slug.is_empty() {
        return Err(DomainError::validation("Slug is required"));
    }
    if slug.chars().count() > MAX_FIELD_LENGTH {
        return Err(DomainError::validation(format!(
            "Slug must be at most {} characters",
            MAX_FIELD_LENGTH
        )));
    }
    if !SLUG_PATTERN.is_match(&slug) {
        return Err(DomainError::validation(
            "Slug may only contain letters, digits, '-' and '_'",
        ));
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_slug() {
        assert_eq!(normalize_slug("Acme-Corp").unwrap(), "acme-corp");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_slug("  acme_corp \t").unwrap(), "acme_corp");
    }

    #[test]
    fn test_case_variants_normalize_equal() {
        assert_eq!(
            normalize_slug("ACME").unwrap(),
            normalize_slug("aCmE").unwrap()
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(normalize_slug("   ").is_err());
    }

    #[test]
    fn test_rejects_unsafe_characters() {
        assert!(normalize_slug("acme corp").is_err());
        assert!(normalize_slug("acme/corp").is_err());
        assert!(normalize_slug("acmé").is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(normalize_slug(&"a".repeat(MAX_FIELD_LENGTH)).is_ok());
        assert!(normalize_slug(&"a".repeat(MAX_FIELD_LENGTH + 1)).is_err());
    }
}
