//! Postgres audit sink

use crate::{error::AppError, models::audit::AuditEvent, repository::AuditSink};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgAuditSink {
    db: PgPool,
}

impl PgAuditSink {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    async fn notify(&self, event: AuditEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO audit_events (action, entity, entity_id, occurred_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(event.action.as_str())
        .bind(event.entity.as_str())
        .bind(event.entity_id)
        .bind(event.occurred_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
