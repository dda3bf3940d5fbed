//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use crate::domain::{Employee, NewEmployee};

/// OpenAPI documentation for the Employee API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee API",
        version = "0.1.0",
        description = "CRUD service for employee records with unique emails",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        employee_handler::create_employee,
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
    ),
    components(
        schemas(Employee, NewEmployee)
    ),
    tags(
        (name = "Employees", description = "Employee management operations")
    )
)]
pub struct ApiDoc;
