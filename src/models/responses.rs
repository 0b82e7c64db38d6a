//! Response DTOs for the student registry API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::Student;

/// Response body for GET /students
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResponse {
    pub success: bool,
    pub students: Vec<Student>,
}

impl StudentListResponse {
    /// Creates a new StudentListResponse
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            success: true,
            students,
        }
    }
}

/// Response body for create, update and status operations
#[derive(Debug, Clone, Serialize)]
pub struct StudentDataResponse {
    pub success: bool,
    pub data: Student,
}

impl StudentDataResponse {
    /// Creates a new StudentDataResponse
    pub fn new(data: Student) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response body for GET /students/:id
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetailResponse {
    pub success: bool,
    pub student: Student,
}

impl StudentDetailResponse {
    /// Creates a new StudentDetailResponse
    pub fn new(student: Student) -> Self {
        Self {
            success: true,
            student,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
