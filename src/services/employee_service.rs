//! Employee record orchestration

use crate::{
    error::AppError,
    models::employee::{CreateEmployeeRequest, Employee, NewEmployee, UpdateEmployeeRequest},
    repository::EmployeeStore,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Create a record; birthday defaults to the current time when omitted.
    pub async fn create(&self, req: CreateEmployeeRequest) -> Result<Employee, AppError> {
        req.validate()?;

        let employee = NewEmployee {
            name: req.name,
            surname: req.surname,
            birthday: req.birthday.unwrap_or_else(Utc::now),
            utility: req.utility,
        };

        self.store.create(&employee).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.store.list().await
    }

    pub async fn update(
        &self,
        id: i64,
        changes: UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        self.store
            .update(id, &changes)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::EmployeeNotFound);
        }

        Ok(())
    }
}
