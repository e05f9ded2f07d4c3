//! Postgres employee store

use crate::{
    error::AppError,
    models::employee::{Employee, NewEmployee, UpdateEmployeeRequest},
    repository::EmployeeStore,
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgEmployeeStore {
    db: PgPool,
}

impl PgEmployeeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, surname, birthday, utility)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, birthday, utility
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.surname)
        .bind(employee.birthday)
        .bind(employee.utility)
        .fetch_one(&self.db)
        .await?;

        Ok(employee)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, surname, birthday, utility FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, surname, birthday, utility FROM employees ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(employees)
    }

    async fn update(
        &self,
        id: i64,
        changes: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                birthday = COALESCE($4, birthday),
                utility = COALESCE($5, utility)
            WHERE id = $1
            RETURNING id, name, surname, birthday, utility
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.surname)
        .bind(changes.birthday)
        .bind(changes.utility)
        .fetch_optional(&self.db)
        .await?;

        Ok(employee)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
