//! Request and Response models for the student registry API
//!
//! The student record itself plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::{
    CreateStudentRequest, SetStatusRequest, StudentData, StudentFilter, UpdateStudentRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, StudentDataResponse, StudentDetailResponse,
    StudentListResponse,
};
pub use student::Student;
