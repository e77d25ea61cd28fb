//! Slug generation and validation for catalog entities.
//!
//! Slugs are the path segments of the storefront URLs (`/{artist}/{album}/`),
//! so they are restricted to lowercase ASCII alphanumerics and hyphens.

use crate::error::CoreError;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 100;

/// Artist slugs that would be shadowed by fixed top-level routes.
pub const RESERVED_ARTIST_SLUGS: &[&str] = &["api", "health"];

/// Generate a URL-safe slug from a display name.
///
/// Lowercases, replaces every non-alphanumeric character with a hyphen,
/// collapses runs of hyphens and trims them from both ends. Non-ASCII
/// characters are treated as separators.
pub fn generate_slug(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_hyphen = true;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }
    result.truncate(MAX_SLUG_LEN);
    while result.ends_with('-') {
        result.pop();
    }
    result
}

/// Validate a slug (non-empty, bounded, lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(CoreError::Validation(
            "Slug must not start or end with a hyphen".into(),
        ));
    }
    Ok(())
}

/// Validate an artist slug: a regular slug that is not reserved.
pub fn validate_artist_slug(slug: &str) -> Result<(), CoreError> {
    validate_slug(slug)?;
    if RESERVED_ARTIST_SLUGS.contains(&slug) {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' is reserved"
        )));
    }
    Ok(())
}
