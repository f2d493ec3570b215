use axum::{
    Json, Router,
    extract::{FromRequestParts, Path, Query, State},
    http::{StatusCode, request::Parts},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::employees::create_employee::CreateEmployee;
use crate::application::use_cases::employees::delete_employee::DeleteEmployee;
use crate::application::use_cases::employees::list_employees::ListEmployees;
use crate::application::use_cases::employees::update_employee::UpdateEmployee;
use crate::bootstrap::app_context::AppContext;
use crate::domain::employees::employee as domain;
use crate::domain::employees::employee::{
    EmployeeField, EmployeeUpdate, FieldFilter, FilterValue, ListQuery, NewEmployee, SortKey,
};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub job_history: Option<String>,
    pub salary: f64,
    pub years_of_experience: i32,
}

impl From<domain::Employee> for EmployeeResponse {
    fn from(e: domain::Employee) -> Self {
        EmployeeResponse {
            id: e.id,
            name: e.name,
            title: e.title,
            job_history: e.job_history,
            salary: e.salary,
            years_of_experience: e.years_of_experience,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub job_history: Option<String>,
    pub salary: f64,
    pub years_of_experience: i32,
}

/// Closed update payload: unknown keys are a deserialization error, never a
/// silent no-op.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub job_history: Option<String>,
    pub salary: Option<f64>,
    pub years_of_experience: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    pub top: Option<i64>,
    /// Comma-separated sort keys, `-` prefix for descending, e.g.
    /// `-salary,name`.
    pub order_by: Option<String>,
    pub title: Option<String>,
}

/// Query extractor for listings. Axum's bare `Query` rejects bad input with
/// 400 and wrapping it in `Option` would swallow the rejection entirely, so a
/// non-numeric `top` must pass through here to surface as a 422 schema
/// violation instead of a silent default listing.
pub struct ListParams(pub ListEmployeesQuery);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ListParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListEmployeesQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(domain::EmployeeError::Validation(e.body_text())))?;
        Ok(Self(params))
    }
}

fn parse_order_by(raw: Option<&str>) -> Result<Vec<SortKey>, domain::EmployeeError> {
    let Some(raw) = raw else {
        return Ok(domain::default_order());
    };
    let keys = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SortKey::parse)
        .collect::<Result<Vec<_>, _>>()?;
    if keys.is_empty() {
        return Ok(domain::default_order());
    }
    Ok(keys)
}

#[utoipa::path(get, path = "/api/employees", tag = "Employees",
    params(
        ("top" = Option<i64>, Query, description = "Maximum rows to return (default 10, must be > 0)"),
        ("order_by" = Option<String>, Query, description = "Comma-separated sort keys, '-' prefix for descending (default '-salary')"),
        ("title" = Option<String>, Query, description = "Exact-match title filter")
    ),
    responses(
        (status = 200, body = [EmployeeResponse]),
        (status = 422, description = "Invalid query parameter")
    ))]
pub async fn list_employees(
    State(ctx): State<AppContext>,
    ListParams(params): ListParams,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let order_by = parse_order_by(params.order_by.as_deref())?;
    let mut filters = Vec::new();
    if let Some(title) = params.title.filter(|t| !t.is_empty()) {
        filters.push(FieldFilter {
            field: EmployeeField::Title,
            value: FilterValue::Text(title),
        });
    }
    let query = ListQuery {
        limit: params.top.unwrap_or(10),
        order_by,
        filters,
    };

    let repo = ctx.employee_repo();
    let uc = ListEmployees {
        repo: repo.as_ref(),
    };
    let employees = uc.execute(query).await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/employees", tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, body = EmployeeResponse),
        (status = 422, description = "Schema violation")
    ))]
pub async fn create_employee(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let repo = ctx.employee_repo();
    let uc = CreateEmployee {
        repo: repo.as_ref(),
    };
    let employee = uc
        .execute(NewEmployee {
            name: req.name,
            title: req.title,
            job_history: req.job_history,
            salary: req.salary,
            years_of_experience: req.years_of_experience,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

#[utoipa::path(put, path = "/api/employees/{id}", tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, body = EmployeeResponse),
        (status = 400, description = "No fields provided"),
        (status = 404, description = "Unknown id"),
        (status = 422, description = "Out-of-range field")
    ))]
pub async fn update_employee(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let repo = ctx.employee_repo();
    let uc = UpdateEmployee {
        repo: repo.as_ref(),
    };
    let employee = uc
        .execute(
            id,
            EmployeeUpdate {
                name: req.name,
                title: req.title,
                job_history: req.job_history,
                salary: req.salary,
                years_of_experience: req.years_of_experience,
            },
        )
        .await?;
    Ok(Json(employee.into()))
}

#[utoipa::path(delete, path = "/api/employees/{id}", tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ))]
pub async fn delete_employee(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.employee_repo();
    let uc = DeleteEmployee {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            put(update_employee).delete(delete_employee),
        )
        .with_state(ctx)
}
