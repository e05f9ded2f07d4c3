//! Postgres credential store

use crate::{
    error::AppError,
    models::user::{NewUser, User},
    repository::UserStore,
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: &NewUser) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, registered_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.registered_at)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::DuplicateEmail;
                }
            }
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn get_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, registered_at
            FROM users
            WHERE email = $1 AND password_hash = $2
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }
}
