//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, NewEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Store failures come back as `AppError`; a violated email unique index
/// surfaces as `AppError::DuplicateEmail`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// List all employees in insertion (id) order
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    /// Insert a new employee, letting the store assign the id
    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Re-persist every mutable field of an existing employee
    async fn update(&self, employee: Employee) -> AppResult<Employee>;

    /// Delete employee by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Count stored employees
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(employee.first_name),
            last_name: ActiveValue::Set(employee.last_name),
            email: ActiveValue::Set(employee.email),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: ActiveValue::Unchanged(employee.id),
            first_name: ActiveValue::Set(employee.first_name),
            last_name: ActiveValue::Set(employee.last_name),
            email: ActiveValue::Set(employee.email),
        };

        // RecordNotUpdated (row vanished since lookup) converts to NotFound
        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        EmployeeEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
