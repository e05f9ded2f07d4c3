//! Store contracts and their Postgres adapters
//!
//! Each collaborator the services depend on is a capability trait with
//! exactly one production adapter, so the services can be exercised against
//! in-memory fakes in tests.

pub mod audit_repo;
pub mod employee_repo;
pub mod session_repo;
pub mod user_repo;

pub use audit_repo::PgAuditSink;
pub use employee_repo::PgEmployeeStore;
pub use session_repo::PgSessionStore;
pub use user_repo::PgUserStore;

use crate::{
    error::AppError,
    models::{
        audit::AuditEvent,
        employee::{Employee, NewEmployee, UpdateEmployeeRequest},
        session::RefreshSession,
        user::{NewUser, User},
    },
};
use async_trait::async_trait;

/// Credential store: user identities and their password hashes.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account. Fails with [`AppError::DuplicateEmail`] when
    /// the email is already registered.
    async fn create(&self, user: &NewUser) -> Result<(), AppError>;

    /// Resolve an account by login key and credential digest.
    async fn get_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, AppError>;
}

/// Session store: one row per issued refresh token, created and read only.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: &RefreshSession) -> Result<(), AppError>;

    async fn get(&self, token: &str) -> Result<Option<RefreshSession>, AppError>;
}

/// Employee record store.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    async fn update(
        &self,
        id: i64,
        changes: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>, AppError>;

    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

/// Best-effort audit notification sink. Callers invoke it fire-and-forget;
/// a failure must never abort the calling operation.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn notify(&self, event: AuditEvent) -> Result<(), AppError>;
}
