//! Employee service - Handles employee-related business logic.
//!
//! Sole holder of the business rules: email uniqueness on create and update,
//! full-overwrite merging, and turning absence into `NotFound` for writes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, NewEmployee};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create a new employee, rejecting an email that is already taken
    async fn create(&self, candidate: NewEmployee) -> AppResult<Employee>;

    /// List all employees
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Look up an employee; absence is a valid outcome, not an error
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Overwrite every mutable field of an existing employee
    async fn update(&self, id: i64, payload: NewEmployee) -> AppResult<Employee>;

    /// Delete an existing employee, returning its last stored state
    async fn delete(&self, id: i64) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn create(&self, candidate: NewEmployee) -> AppResult<Employee> {
        if self.repo.find_by_email(&candidate.email).await?.is_some() {
            tracing::warn!(email = %candidate.email, "Rejected create: email already taken");
            return Err(AppError::DuplicateEmail);
        }

        // A concurrent create can still slip past the check above; the unique
        // index then fails the insert with DuplicateEmail.
        let employee = self.repo.insert(candidate).await?;
        tracing::info!(id = employee.id, "Employee created");

        Ok(employee)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    async fn update(&self, id: i64, payload: NewEmployee) -> AppResult<Employee> {
        let mut employee = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if let Some(owner) = self.repo.find_by_email(&payload.email).await? {
            if owner.id != id {
                tracing::warn!(id, owner = owner.id, "Rejected update: email already taken");
                return Err(AppError::DuplicateEmail);
            }
        }

        employee.apply(payload);
        let employee = self.repo.update(employee).await?;
        tracing::info!(id, "Employee updated");

        Ok(employee)
    }

    async fn delete(&self, id: i64) -> AppResult<Employee> {
        let snapshot = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(id, "Employee deleted");

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockEmployeeRepository;
    use mockall::predicate::eq;

    fn william() -> Employee {
        Employee {
            id: 1,
            first_name: "William".to_string(),
            last_name: "Feliciano".to_string(),
            email: "wfeliciano@gmail.com".to_string(),
        }
    }

    fn service(repo: MockEmployeeRepository) -> EmployeeManager {
        EmployeeManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_persists_when_email_is_free() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .with(eq("wfeliciano@gmail.com"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert().times(1).returning(|candidate| {
            Ok(Employee {
                id: 1,
                first_name: candidate.first_name,
                last_name: candidate.last_name,
                email: candidate.email,
            })
        });

        let created = service(repo)
            .create(NewEmployee::new("William", "Feliciano", "wfeliciano@gmail.com"))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.first_name, "William");
    }

    #[tokio::test]
    async fn test_create_rejects_taken_email_without_insert() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(william())));
        repo.expect_insert().never();

        let result = service(repo)
            .create(NewEmployee::new("Bill", "Other", "wfeliciano@gmail.com"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_create_surfaces_store_level_conflict() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|_| Err(AppError::DuplicateEmail));

        let result = service(repo)
            .create(NewEmployee::new("William", "Feliciano", "wfeliciano@gmail.com"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_list_returns_all() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![william()]));

        let employees = service(repo).list().await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].first_name, "William");
    }

    #[tokio::test]
    async fn test_list_empty_is_not_an_error() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let employees = service(repo).list().await.unwrap();

        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_present_and_absent() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(william())));
        repo.expect_find_by_id()
            .with(eq(2))
            .returning(|_| Ok(None));
        let service = service(repo);

        assert_eq!(service.get_by_id(1).await.unwrap(), Some(william()));
        assert_eq!(service.get_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_merges_all_fields() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(william())));
        repo.expect_find_by_email()
            .with(eq("w@x.com"))
            .returning(|_| Ok(None));
        repo.expect_update()
            .withf(|e| e.id == 1 && e.first_name == "Will" && e.email == "w@x.com")
            .times(1)
            .returning(Ok);

        let updated = service(repo)
            .update(1, NewEmployee::new("Will", "Felici", "w@x.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.first_name, "Will");
        assert_eq!(updated.last_name, "Felici");
        assert_eq!(updated.email, "w@x.com");
    }

    #[tokio::test]
    async fn test_update_may_keep_own_email() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(william())));
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(william())));
        repo.expect_update().times(1).returning(Ok);

        let updated = service(repo)
            .update(1, NewEmployee::new("Will", "Feliciano", "wfeliciano@gmail.com"))
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Will");
    }

    #[tokio::test]
    async fn test_update_rejects_email_owned_by_another_employee() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(william())));
        repo.expect_find_by_email().returning(|email| {
            Ok(Some(Employee {
                id: 2,
                first_name: "John".to_string(),
                last_name: "Cena".to_string(),
                email: email.to_string(),
            }))
        });
        repo.expect_update().never();

        let result = service(repo)
            .update(1, NewEmployee::new("Will", "Felici", "cena@gmail.com"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_update_missing_employee_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));
        repo.expect_update().never();

        let result = service(repo)
            .update(999, NewEmployee::new("Will", "Felici", "w@x.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(william())));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let deleted = service(repo).delete(1).await.unwrap();

        assert_eq!(deleted.first_name, "William");
    }

    #[tokio::test]
    async fn test_delete_missing_employee_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let result = service(repo).delete(999).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_of_concurrently_removed_row_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(william())));
        repo.expect_delete_by_id().returning(|_| Ok(false));

        let result = service(repo).delete(1).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
