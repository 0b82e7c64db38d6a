//! Store Module
//!
//! In-memory implementation of the student service layer.

mod memory;


// Re-export public types
pub use memory::InMemoryStudentService;

// == Public Constants ==
/// Message returned when creating a student with an email already in use
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered";

/// Message returned when `name` or `email` is not a JSON string
pub const INVALID_TEXT_FIELD_MESSAGE: &str = "Name and email must be strings";
