//! API Handlers
//!
//! HTTP request handlers for the student endpoints. Each one validates its
//! input, makes a single call into the `StudentService` and wraps the result
//! in a JSON envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{info, instrument};

use crate::api::auth::Reviewer;
use crate::api::extract::JsonBody;
use crate::error::{Result, StudentError};
use crate::models::{
    CreateStudentRequest, HealthResponse, SetStatusRequest, StudentDataResponse,
    StudentDetailResponse, StudentFilter, StudentListResponse, UpdateStudentRequest,
};
use crate::service::{StatusChange, StudentService};
use crate::store::InMemoryStudentService;

const ID_REQUIRED: &str = "Student ID is required";
const NOT_FOUND: &str = "Student not found";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service layer the handlers delegate to
    pub service: Arc<dyn StudentService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: Arc<dyn StudentService>) -> Self {
        Self { service }
    }

    /// Creates an AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStudentService::new()))
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(StudentError::Validation(ID_REQUIRED.to_string()));
    }
    Ok(())
}

fn not_found() -> StudentError {
    StudentError::NotFound(NOT_FOUND.to_string())
}

/// Handler for GET /students
///
/// The query string is handed to the service untouched.
#[instrument(skip(state))]
pub async fn list_students_handler(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<Json<StudentListResponse>> {
    let students = state
        .service
        .list_students(&filter)
        .await
        .map_err(|e| StudentError::from_service(e, "Unable to fetch students"))?;

    Ok(Json(StudentListResponse::new(students)))
}

/// Handler for POST /students
#[instrument(skip(state, req))]
pub async fn create_student_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentDataResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(StudentError::Validation(error_msg));
    }

    let student = state
        .service
        .create_student(req.fields)
        .await
        .map_err(|e| StudentError::from_service(e, "Unable to add student"))?;

    info!(id = %student.id, "Student added");
    Ok((StatusCode::CREATED, Json(StudentDataResponse::new(student))))
}

/// Handler for PATCH/PUT /students/:id
#[instrument(skip(state, req))]
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateStudentRequest>,
) -> Result<Json<StudentDataResponse>> {
    require_id(&id)?;

    let student = state
        .service
        .update_student(&id, req.fields)
        .await
        .map_err(|e| StudentError::from_service(e, "Unable to update student"))?
        .ok_or_else(not_found)?;

    Ok(Json(StudentDataResponse::new(student)))
}

/// Handler for GET /students/:id
#[instrument(skip(state))]
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentDetailResponse>> {
    require_id(&id)?;

    let student = state
        .service
        .get_student_by_id(&id)
        .await
        .map_err(|e| StudentError::from_service(e, "Unable to fetch student"))?
        .ok_or_else(not_found)?;

    Ok(Json(StudentDetailResponse::new(student)))
}

/// Handler for PATCH /students/:id/status
///
/// Requires the `Reviewer` extension set by `auth::require_reviewer`.
#[instrument(skip(state, req))]
pub async fn set_student_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(reviewer): Extension<Reviewer>,
    JsonBody(req): JsonBody<SetStatusRequest>,
) -> Result<Json<StudentDataResponse>> {
    require_id(&id)?;
    let status = req
        .status()
        .ok_or_else(|| StudentError::Validation("Status must be a boolean value".to_string()))?;

    let change = StatusChange {
        user_id: id,
        reviewer_id: reviewer.id,
        status,
    };
    let student = state
        .service
        .set_student_status(change)
        .await
        .map_err(|e| StudentError::from_service(e, "Unable to update student status"))?
        .ok_or_else(not_found)?;

    info!(id = %student.id, status, "Student status set");
    Ok(Json(StudentDataResponse::new(student)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
