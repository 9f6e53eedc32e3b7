//! Password value object - salted password hashing.
//!
//! The application-wide salt is mixed into the hashed input as a pepper,
//! and Argon2id adds its own random per-hash salt. Both must match for a
//! password to verify.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password keyed with the application salt.
    ///
    /// # Errors
    /// Returns a validation error if the password length is out of policy.
    pub fn new(plain_text: &str, salt: &str) -> AppResult<Self> {
        let length = plain_text.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(AppError::validation(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(plain_text, salt)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str, salt: &str) -> bool {
        Self::verify_hash(plain_text, salt, &self.hash).unwrap_or(false)
    }

    /// Hash without applying the length policy.
    pub(crate) fn hash(plain_text: &str, salt: &str) -> AppResult<String> {
        let per_hash_salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(&Self::peppered(plain_text, salt), &per_hash_salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, salt: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(&Self::peppered(plain_text, salt), &parsed)
            .is_ok())
    }

    fn peppered(plain_text: &str, salt: &str) -> Vec<u8> {
        let mut input = Vec::with_capacity(plain_text.len() + salt.len());
        input.extend_from_slice(plain_text.as_bytes());
        input.extend_from_slice(salt.as_bytes());
        input
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "test-salt";

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("secret1", SALT).unwrap();

        assert!(password.verify("secret1", SALT));
        assert!(!password.verify("secret2", SALT));
    }

    #[test]
    fn test_wrong_salt_fails() {
        let password = Password::new("secret1", SALT).unwrap();

        assert!(!password.verify("secret1", "other-salt"));
    }

    #[test]
    fn test_password_from_hash() {
        let password = Password::new("secret1", SALT).unwrap();
        let restored = Password::from_hash(password.as_str().to_string());

        assert!(restored.verify("secret1", SALT));
    }

    #[test]
    fn test_same_password_different_hashes() {
        let pass1 = Password::new("secret1", SALT).unwrap();
        let pass2 = Password::new("secret1", SALT).unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify("secret1", SALT));
        assert!(pass2.verify("secret1", SALT));
    }

    #[test]
    fn test_length_policy() {
        assert!(Password::new("short", SALT).is_err());
        assert!(Password::new("waytoolongpassword", SALT).is_err());
        assert!(Password::new("123456", SALT).is_ok());
        assert!(Password::new("123456789012", SALT).is_ok());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("secret1", SALT));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("secret1", SALT).unwrap();
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
