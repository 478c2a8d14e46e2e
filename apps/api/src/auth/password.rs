//! Password hashing and strength checks.

use anyhow::anyhow;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

const MIN_LENGTH: usize = 8;

pub fn hash_password(password: &str) -> Result<String, anyhow::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Minimum 8 characters and at least three of: lowercase, uppercase,
/// digit, symbol.
pub fn validate_strength(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ]
    .iter()
    .filter(|&&present| present)
    .count();
    if classes < 3 {
        return Err("Password needs at least three of: lowercase, uppercase, digit, symbol");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("Tr1cky-pass").unwrap();
        assert!(verify_password("Tr1cky-pass", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_strength_rejects_short() {
        assert!(validate_strength("Ab1!").is_err());
    }

    #[test]
    fn test_strength_rejects_single_class() {
        assert!(validate_strength("aaaaaaaaaa").is_err());
        assert!(validate_strength("aaaaaaaa1").is_err());
    }

    #[test]
    fn test_strength_accepts_three_classes() {
        assert!(validate_strength("Abcdef12").is_ok());
        assert!(validate_strength("abcdef1!").is_ok());
    }
}
