//! Password value object - Domain layer password handling.
//!
//! Argon2id with a per-hash random salt. A hashing failure aborts the process.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use crate::config::{HASH_MEMORY_COST_KIB, HASH_PARALLELISM, HASH_TIME_COST};

/// Returned by [`Password::verify`] for a wrong candidate or an unreadable hash.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("login or password is incorrect")]
pub struct PasswordMismatch;

/// Hashed password.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password.
    ///
    /// Length rules are enforced by request validation, not here.
    ///
    /// # Aborts
    /// Aborts the process if the hashing primitive fails.
    pub fn hash(plain_text: &str) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let hash = match Self::argon2().hash_password(plain_text.as_bytes(), &salt) {
            Ok(hash) => hash.to_string(),
            Err(e) => fatal("password hashing failed", &e),
        };
        Self { hash }
    }

    /// Wrap an existing hash (from the store).
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

    /// Check a candidate password against this hash.
    ///
    /// An unparsable stored hash is reported as a plain mismatch.
    pub fn verify(&self, candidate: &str) -> Result<(), PasswordMismatch> {
        let parsed = PasswordHash::new(&self.hash).map_err(|e| {
            tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
            PasswordMismatch
        })?;

        Self::argon2()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|_| PasswordMismatch)
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        let params = match Params::new(HASH_MEMORY_COST_KIB, HASH_TIME_COST, HASH_PARALLELISM, None)
        {
            Ok(params) => params,
            Err(e) => fatal("invalid password hashing parameters", &e),
        };
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

fn fatal(context: &str, err: &dyn std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}; aborting");
    std::process::abort()
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

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "secret1";
        let password = Password::hash(plain);

        assert!(password.verify(plain).is_ok());
        assert_eq!(password.verify("secret2"), Err(PasswordMismatch));
    }

    #[test]
    fn test_hash_is_never_plaintext() {
        let password = Password::hash("secret1");
        assert_ne!(password.as_str(), "secret1");
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = Password::hash(plain).into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain).is_ok());
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::hash(plain);
        let pass2 = Password::hash(plain);

        assert_ne!(pass1, pass2);
        assert!(pass1.verify(plain).is_ok());
        assert!(pass2.verify(plain).is_ok());
    }

    #[test]
    fn test_garbage_hash_is_a_generic_mismatch() {
        let stored = Password::from_hash("not-a-hash".to_string());
        let err = stored.verify("anything").unwrap_err();
        assert_eq!(err.to_string(), "login or password is incorrect");
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::hash("secret1");
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
