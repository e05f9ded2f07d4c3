//! Refresh session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted refresh token. Rows are created and read, never updated;
/// rotation supersedes a token by inserting a new row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RefreshSession {
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Access/refresh token pair returned by sign-in and refresh
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: u64,
}
