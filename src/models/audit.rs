//! Audit trail models

use chrono::{DateTime, Utc};

/// Audited action type
#[derive(Debug, Clone, Copy)]
pub enum AuditAction {
    Register,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Register => "user.register",
        }
    }
}

/// Audited entity type
#[derive(Debug, Clone, Copy)]
pub enum AuditEntity {
    User,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEntity::User => "user",
        }
    }
}

/// Notification sent to the audit sink, best-effort.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: i64,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Event recorded when a new account is registered.
    pub fn user_registered(user_id: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            action: AuditAction::Register,
            entity: AuditEntity::User,
            entity_id: user_id,
            occurred_at,
        }
    }
}
