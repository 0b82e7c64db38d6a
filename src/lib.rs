//! Student Registry - HTTP service for student records
//!
//! Lists, creates, updates and fetches students, and lets an authenticated
//! reviewer approve or deactivate them.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::StudentError;
pub use service::{ServiceError, StatusChange, StudentService};
pub use store::InMemoryStudentService;
