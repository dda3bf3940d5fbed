//! Employee handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Employee, NewEmployee};
use crate::errors::AppResult;

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Malformed request body"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.employee_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees, possibly none", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "No such employee (empty body)")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let response = match state.employee_service.get_by_id(id).await? {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// Replace an employee's fields
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already taken by another employee")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<NewEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.update(id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted employee as it was before deletion", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.delete(id).await?;
    Ok(Json(employee))
}
