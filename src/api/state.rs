//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{EmployeeService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Services are wired through the ServiceContainer.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self::new(container.employees(), database)
    }

    /// Create new application state with manually injected services.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }
}
