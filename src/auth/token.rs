//! Access-token signing and verification
//!
//! Tokens are compact HS256 JWTs carrying a stringified integer identity in
//! `sub`. Validity is purely signature plus expiry; nothing is persisted.

use crate::{config::AppConfig, error::AppError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verification failure, one variant per rejection cause so each can be
/// logged distinctly. The HTTP layer maps all of them to 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("unexpected signing algorithm")]
    AlgorithmMismatch,

    #[error("signature mismatch")]
    SignatureMismatch,

    #[error("token expired")]
    Expired,

    #[error("subject is not a valid identity")]
    InvalidSubject,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Stateless token signer. The secret is injected at construction and never
/// changes afterwards.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: u64,
}

impl TokenSigner {
    pub fn new(secret: &[u8], access_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl_secs,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.token_secret.expose_secret();

        if secret.len() < 32 {
            return Err(AppError::Config(
                "token secret too short (min 32 chars)".to_string(),
            ));
        }

        Ok(Self::new(
            secret.as_bytes(),
            config.security.access_token_ttl_secs,
        ))
    }

    pub fn access_ttl_secs(&self) -> u64 {
        self.access_ttl_secs
    }

    /// Mint an access token for `subject` issued at `now`, expiring after the
    /// configured window.
    pub fn mint(&self, subject: i64, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_ttl_secs as i64)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode access token");
            AppError::Internal
        })
    }

    /// Verify a token and return the subject identity.
    ///
    /// Rejects tokens signed with any algorithm other than HS256 before
    /// touching the signature, so an attacker cannot downgrade the check.
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if header.alg != Algorithm::HS256 {
            return Err(TokenError::AlgorithmMismatch);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                _ => TokenError::Malformed,
            }
        })?;

        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::InvalidSubject)
    }
}
