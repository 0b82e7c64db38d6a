//! Service Layer Interface
//!
//! The persistence/business-logic boundary the handlers delegate to.
//! `store::InMemoryStudentService` is the bundled implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Student, StudentData, StudentFilter};

/// Failure reported by a service implementation.
///
/// Both parts are optional; the handler fills in a status of 500 and an
/// operation-specific message when they are missing.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("service error (status {status:?}): {message:?}")]
pub struct ServiceError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ServiceError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
        }
    }
}

/// Convenience Result type for service implementations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// A request to change a student's status, recording who reviewed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// Id of the student record being changed
    pub user_id: String,
    /// Id of the authenticated caller performing the review
    pub reviewer_id: String,
    pub status: bool,
}

/// Operations the student handlers need from the service layer.
///
/// `Ok(None)` from the lookup/update operations means the record does not
/// exist.
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn list_students(&self, filter: &StudentFilter) -> ServiceResult<Vec<Student>>;

    async fn create_student(&self, data: StudentData) -> ServiceResult<Student>;

    async fn update_student(&self, id: &str, data: StudentData) -> ServiceResult<Option<Student>>;

    async fn get_student_by_id(&self, id: &str) -> ServiceResult<Option<Student>>;

    async fn set_student_status(&self, change: StatusChange) -> ServiceResult<Option<Student>>;
}
