//! Credential hashing for realtor, owner and buyer accounts.
//!
//! Passwords are never stored in clear text. Every `password` column holds a
//! PHC string produced by Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Shortest password accepted on account creation.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest password accepted; keeps hashing cost bounded.
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Failed to verify password: {0}")]
    Verify(String),

    #[error("Stored credential is not a valid PHC string")]
    MalformedHash,
}

// 19 MiB, two passes, single lane.
const MEMORY_KIB: u32 = 19_456;
const PASSES: u32 = 2;
const LANES: u32 = 1;
const HASH_LEN: usize = 32;

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_KIB, PASSES, LANES, Some(HASH_LEN))
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a clear-text password into a self-describing PHC string.
///
/// ```
/// let stored = shared::password::hash_password("hunter2hunter2").unwrap();
/// assert!(shared::password::is_password_hash(&stored));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Checks a clear-text password against a stored PHC string.
///
/// The parameters embedded in `stored` win over the defaults used for new
/// hashes, so credentials hashed with older settings keep verifying.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}

/// Returns true when `value` parses as an Argon2 PHC string.
pub fn is_password_hash(value: &str) -> bool {
    PasswordHash::new(value)
        .map(|phc| phc.algorithm.as_str().starts_with("argon2"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_uses_argon2id_with_configured_cost() {
        let stored = hash_password("correct horse battery").unwrap();
        assert!(stored.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("realtor-secret").unwrap();
        let b = hash_password("realtor-secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_accepts_only_the_original_password() {
        let stored = hash_password("owner-pass-1").unwrap();
        assert!(verify_password("owner-pass-1", &stored).unwrap());
        assert!(!verify_password("owner-pass-2", &stored).unwrap());
    }

    #[test]
    fn verify_rejects_plain_text_column_values() {
        let result = verify_password("secret", "secret");
        assert!(matches!(result, Err(PasswordError::MalformedHash)));
    }

    #[test]
    fn detects_hashed_and_plain_values() {
        let stored = hash_password("buyer-pass").unwrap();
        assert!(is_password_hash(&stored));
        assert!(!is_password_hash("buyer-pass"));
        assert!(!is_password_hash(""));
    }

    #[test]
    fn unicode_passwords_round_trip() {
        let password = "пароль-密码-2024";
        let stored = hash_password(password).unwrap();
        assert!(verify_password(password, &stored).unwrap());
    }
}
