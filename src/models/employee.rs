//! Employee record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birthday: DateTime<Utc>,
    pub utility: i32,
}

/// Insert payload for a new record. The store assigns the identity.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub birthday: DateTime<Utc>,
    pub utility: i32,
}

/// Create request. Birthday defaults to the current time when omitted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 128, message = "name must be 1-128 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 128, message = "surname must be 1-128 characters"))]
    pub surname: String,
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default)]
    pub utility: i32,
}

/// Partial update request; absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthday: Option<DateTime<Utc>>,
    pub utility: Option<i32>,
}
