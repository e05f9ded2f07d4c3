//! Account and session lifecycle: sign-up, sign-in, token refresh, parsing
//!
//! Holds no mutable state of its own; every handle it owns is shared and safe
//! under arbitrary concurrent invocation.

use crate::{
    auth::{password::PasswordHasher, token::TokenSigner},
    config::AppConfig,
    error::AppError,
    models::{
        audit::AuditEvent,
        session::{RefreshSession, TokenPair},
        user::{NewUser, SignInRequest, SignUpRequest},
    },
    repository::{AuditSink, SessionStore, UserStore},
};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;
use validator::Validate;

pub struct SessionService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
    audit: Arc<dyn AuditSink>,
    signer: TokenSigner,
    refresh_ttl: Duration,
}

impl SessionService {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
        audit: Arc<dyn AuditSink>,
        signer: TokenSigner,
        config: &AppConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            audit,
            signer,
            refresh_ttl: Duration::seconds(config.security.refresh_token_ttl_secs as i64),
        }
    }

    /// Register a new account.
    ///
    /// The identity is re-read from the credential store after the insert so
    /// that the canonical id comes from the store of record. The audit
    /// notification is best-effort: a failure is logged and swallowed.
    pub async fn sign_up(&self, req: SignUpRequest) -> Result<(), AppError> {
        req.validate()?;

        let password_hash = self.hasher.hash(&req.password)?;

        let user = NewUser {
            name: req.name,
            email: req.email,
            password_hash,
            registered_at: Utc::now(),
        };
        self.users.create(&user).await?;

        let user = self
            .users
            .get_by_credentials(&user.email, &user.password_hash)
            .await?
            .ok_or(AppError::Internal)?;

        let event = AuditEvent::user_registered(user.id, Utc::now());
        if let Err(err) = self.audit.notify(event).await {
            tracing::error!(
                user_id = user.id,
                error = %err,
                "Failed to publish registration audit event"
            );
        }

        Ok(())
    }

    /// Authenticate credentials and issue a fresh token pair.
    pub async fn sign_in(&self, req: SignInRequest) -> Result<TokenPair, AppError> {
        req.validate()?;

        let password_hash = self.hasher.hash(&req.password)?;

        let user = self
            .users
            .get_by_credentials(&req.email, &password_hash)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.issue_token_pair(user.id, Utc::now()).await
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The presented token is not invalidated here; it stays usable until its
    /// own expiry.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let session = self
            .sessions
            .get(refresh_token)
            .await?
            .ok_or(AppError::SessionNotFound)?;

        let now = Utc::now();
        if session.expires_at < now {
            return Err(AppError::RefreshTokenExpired);
        }

        self.issue_token_pair(session.user_id, now).await
    }

    /// Resolve the identity carried by an access token. Stateless.
    pub fn parse_token(&self, token: &str) -> Result<i64, AppError> {
        Ok(self.signer.verify(token)?)
    }

    /// Mint an access token and persist a new refresh session.
    ///
    /// A store failure fails the whole call; the minted access token is
    /// discarded, so no partial state reaches the caller.
    async fn issue_token_pair(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, AppError> {
        let access_token = self.signer.mint(user_id, now)?;
        let refresh_token = new_refresh_token();

        self.sessions
            .create(&RefreshSession {
                user_id,
                token: refresh_token.clone(),
                expires_at: now + self.refresh_ttl,
            })
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.signer.access_ttl_secs(),
        })
    }
}

/// 32 bytes from the OS entropy source, hex-encoded.
fn new_refresh_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
