//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]{2,49}$").unwrap();
    static ref SQL_IDENTIFIER_RE: Regex = Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").unwrap();
}

/// Validates an account username: 3-50 characters, letters, digits, `_`, `.`
/// or `-`, starting with a letter or digit.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        let mut err = ValidationError::new("username_format");
        err.message = Some(
            "Username must be 3-50 characters of letters, digits, '_', '.' or '-'".into(),
        );
        Err(err)
    }
}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Returns true for a lowercase, unquoted Postgres identifier.
///
/// Used for configuration values that end up in DDL or `search_path`, where
/// bind parameters are not available.
pub fn is_sql_identifier(value: &str) -> bool {
    SQL_IDENTIFIER_RE.is_match(value)
}
