//! Credential hashing capability
//!
//! The credential store resolves accounts by `(email, password_hash)`, so the
//! hash must be deterministic for identical input and salt. The production
//! adapter is a salted SHA-256 digest; the salt comes from configuration.

use crate::{config::AppConfig, error::AppError};
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};

/// Turns a plaintext password into a stable, comparable digest.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AppError>;
}

/// Salted SHA-256 digest, hex-encoded.
pub struct Sha256PasswordHasher {
    salt: String,
}

impl Sha256PasswordHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.security.password_salt.expose_secret().clone())
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(password.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let hasher = Sha256PasswordHasher::new("pepper");

        let first = hasher.hash("hunter2hunter2").unwrap();
        let second = hasher.hash("hunter2hunter2").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn hash_is_hex_sha256() {
        let hasher = Sha256PasswordHasher::new("pepper");
        let hash = hasher.hash("hunter2hunter2").unwrap();

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_passwords_differ() {
        let hasher = Sha256PasswordHasher::new("pepper");

        assert_ne!(
            hasher.hash("password-one").unwrap(),
            hasher.hash("password-two").unwrap()
        );
    }

    #[test]
    fn different_salts_differ() {
        let a = Sha256PasswordHasher::new("salt-a");
        let b = Sha256PasswordHasher::new("salt-b");

        assert_ne!(
            a.hash("same-password").unwrap(),
            b.hash("same-password").unwrap()
        );
    }
}
