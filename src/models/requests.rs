//! Request DTOs for the student registry API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw student fields as received in a create or update body.
pub type StudentData = Map<String, Value>;

/// Raw query-string mapping for the list operation, passed through as-is.
pub type StudentFilter = HashMap<String, String>;

/// Returns whether a JSON value counts as "present" for required fields.
///
/// `null`, `false`, `0` and `""` count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Request body for POST /students
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CreateStudentRequest {
    pub fields: StudentData,
}

impl CreateStudentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let present = |key: &str| self.fields.get(key).is_some_and(is_truthy);
        if !present("name") || !present("email") {
            return Some("Name and email are required fields".to_string());
        }
        None
    }
}

/// Request body for PATCH/PUT /students/:id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UpdateStudentRequest {
    pub fields: StudentData,
}

/// Request body for PATCH /students/:id/status
///
/// `status` is kept as a raw value so non-boolean input can be rejected
/// with a proper message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetStatusRequest {
    #[serde(default)]
    pub status: Value,
}

impl SetStatusRequest {
    /// The requested status, if it is a strict JSON boolean.
    pub fn status(&self) -> Option<bool> {
        self.status.as_bool()
    }
}
