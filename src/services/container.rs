//! Service Container - Centralized service access.
//!
//! Wires repositories into services once at startup and hands out shared
//! trait objects to the API layer.

use std::sync::Arc;

use super::{EmployeeManager, EmployeeService};
use crate::infra::{EmployeeRepository, EmployeeStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    employee_service: Arc<dyn EmployeeService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(employee_service: Arc<dyn EmployeeService>) -> Self {
        Self { employee_service }
    }

    /// Create service container from a repository
    pub fn from_repository(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self::new(Arc::new(EmployeeManager::new(repo)))
    }

    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::from_repository(Arc::new(EmployeeStore::new(db)))
    }
}

impl ServiceContainer for Services {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }
}
