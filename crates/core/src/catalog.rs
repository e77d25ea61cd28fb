//! Field validation for catalog and customer records.
//!
//! Repositories call these before touching the database so that malformed
//! input surfaces as `CoreError::Validation` rather than a constraint error.

use crate::error::CoreError;
use crate::money::Money;

pub const MAX_MEDIA_TYPE_NAME_LEN: usize = 100;
pub const MAX_MEMBER_NAME_LEN: usize = 255;
pub const MAX_GENRE_NAME_LEN: usize = 50;
pub const MAX_ARTIST_NAME_LEN: usize = 255;
pub const MAX_ALBUM_NAME_LEN: usize = 255;
pub const MAX_CUSTOMER_NAME_LEN: usize = 255;

/// Validate a display name: non-blank and at most `max_len` characters.
pub fn validate_name(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate a unit price (zero is allowed, e.g. promotional items).
pub fn validate_price(price: Money) -> Result<(), CoreError> {
    if price.is_negative() {
        return Err(CoreError::Validation(format!(
            "Price must not be negative, got {price}"
        )));
    }
    Ok(())
}

/// Validate a stock count.
pub fn validate_stock(stock: i32) -> Result<(), CoreError> {
    if stock < 0 {
        return Err(CoreError::Validation(format!(
            "Stock must not be negative, got {stock}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn name_valid() {
        assert!(validate_name("Genre name", "Jazz", MAX_GENRE_NAME_LEN).is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        assert_matches!(
            validate_name("Genre name", "   ", MAX_GENRE_NAME_LEN),
            Err(CoreError::Validation(msg)) if msg == "Genre name must not be empty"
        );
    }

    #[test]
    fn long_name_rejected() {
        let long = "x".repeat(MAX_GENRE_NAME_LEN + 1);
        assert!(validate_name("Genre name", &long, MAX_GENRE_NAME_LEN).is_err());
    }

    #[test]
    fn name_length_counts_characters() {
        let cyrillic = "ж".repeat(MAX_GENRE_NAME_LEN);
        assert!(validate_name("Genre name", &cyrillic, MAX_GENRE_NAME_LEN).is_ok());
    }

    #[test]
    fn price_bounds() {
        assert!(validate_price(Money::ZERO).is_ok());
        assert!(validate_price(Money::from_cents(1999)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn stock_bounds() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
