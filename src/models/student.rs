//! Student record as exchanged with the service layer and clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student record.
///
/// Only `id`, `name`, `email`, `status` and `reviewedBy` are interpreted;
/// any other fields are carried in `extra` and echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Approved/active flag, only changed through a status change
    #[serde(default)]
    pub status: bool,
    /// Reviewer who last changed `status`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    /// Creates an inactive, unreviewed student.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status: false,
            reviewed_by: None,
            extra: Map::new(),
        }
    }
}
