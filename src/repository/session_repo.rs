//! Postgres session store

use crate::{error::AppError, models::session::RefreshSession, repository::SessionStore};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgSessionStore {
    db: PgPool,
}

impl PgSessionStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, session: &RefreshSession) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id)
        .bind(session.expires_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<RefreshSession>, AppError> {
        let session = sqlx::query_as::<_, RefreshSession>(
            r#"
            SELECT user_id, token, expires_at
            FROM refresh_sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }
}
