//! In-Memory Student Store
//!
//! HashMap-backed `StudentService` used by the server binary and the tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::models::{Student, StudentData, StudentFilter};
use crate::service::{ServiceError, ServiceResult, StatusChange, StudentService};
use crate::store::{DUPLICATE_EMAIL_MESSAGE, INVALID_TEXT_FIELD_MESSAGE};

/// Fields only the store or a status change may set.
const RESERVED_FIELDS: [&str; 3] = ["id", "status", "reviewedBy"];

// == In-Memory Student Service ==
/// Student records keyed by id.
#[derive(Debug)]
pub struct InMemoryStudentService {
    /// Records keyed by id
    students: RwLock<HashMap<String, Student>>,
    /// Last id handed out
    next_id: AtomicU64,
}

impl InMemoryStudentService {
    // == Constructor ==
    /// Creates an empty store. Ids start at "1".
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }

    fn allocate_id(&self) -> String {
        (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

impl Default for InMemoryStudentService {
    fn default() -> Self {
        Self::new()
    }
}

// == Helpers ==
/// Reads a text field from a payload. Absent is `None`; any value other
/// than a JSON string, `null` included, is rejected with 400.
fn text_field<'a>(data: &'a StudentData, key: &str) -> ServiceResult<Option<&'a str>> {
    match data.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ServiceError::new(400, INVALID_TEXT_FIELD_MESSAGE)),
    }
}

/// Checks the text fields of a payload before anything is written.
fn check_text_fields(data: &StudentData) -> ServiceResult<()> {
    text_field(data, "name")?;
    text_field(data, "email")?;
    Ok(())
}

fn matches_filter(student: &Student, filter: &StudentFilter) -> bool {
    filter.iter().all(|(key, expected)| match key.as_str() {
        "name" => student.name == *expected,
        "email" => student.email == *expected,
        "status" => student.status.to_string() == *expected,
        _ => true,
    })
}

fn email_taken(students: &HashMap<String, Student>, email: &str, except_id: Option<&str>) -> bool {
    students
        .values()
        .any(|s| s.email.eq_ignore_ascii_case(email) && Some(s.id.as_str()) != except_id)
}

fn duplicate_email() -> ServiceError {
    ServiceError::new(409, DUPLICATE_EMAIL_MESSAGE)
}

/// Applies `data` to `student`, leaving reserved fields alone.
///
/// Callers run `check_text_fields` first.
fn merge_fields(student: &mut Student, data: StudentData) {
    for (key, value) in data {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match key.as_str() {
            "name" | "email" => {
                if let Value::String(text) = value {
                    if key == "name" {
                        student.name = text;
                    } else {
                        student.email = text;
                    }
                }
            }
            _ => {
                student.extra.insert(key, value);
            }
        }
    }
}

// == StudentService Implementation ==
#[async_trait]
impl StudentService for InMemoryStudentService {
    #[instrument(skip(self))]
    async fn list_students(&self, filter: &StudentFilter) -> ServiceResult<Vec<Student>> {
        let students = self.students.read().await;
        let mut found: Vec<Student> = students
            .values()
            .filter(|s| matches_filter(s, filter))
            .cloned()
            .collect();
        found.sort_by_key(|s| s.id.parse::<u64>().unwrap_or(u64::MAX));

        debug!("Listed {} of {} students", found.len(), students.len());
        Ok(found)
    }

    #[instrument(skip(self, data))]
    async fn create_student(&self, data: StudentData) -> ServiceResult<Student> {
        check_text_fields(&data)?;
        let email = text_field(&data, "email")?.unwrap_or_default();

        let mut students = self.students.write().await;
        if email_taken(&students, email, None) {
            return Err(duplicate_email());
        }

        let mut student = Student::new(self.allocate_id(), String::new(), String::new());
        merge_fields(&mut student, data);
        students.insert(student.id.clone(), student.clone());

        info!(id = %student.id, "Student created");
        Ok(student)
    }

    #[instrument(skip(self, data))]
    async fn update_student(&self, id: &str, data: StudentData) -> ServiceResult<Option<Student>> {
        let mut students = self.students.write().await;

        if !students.contains_key(id) {
            return Ok(None);
        }
        check_text_fields(&data)?;
        if let Some(email) = text_field(&data, "email")? {
            if email_taken(&students, email, Some(id)) {
                return Err(duplicate_email());
            }
        }

        let Some(student) = students.get_mut(id) else {
            return Ok(None);
        };
        merge_fields(student, data);

        info!(id, "Student updated");
        Ok(Some(student.clone()))
    }

    #[instrument(skip(self))]
    async fn get_student_by_id(&self, id: &str) -> ServiceResult<Option<Student>> {
        Ok(self.students.read().await.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn set_student_status(&self, change: StatusChange) -> ServiceResult<Option<Student>> {
        let mut students = self.students.write().await;

        let Some(student) = students.get_mut(&change.user_id) else {
            return Ok(None);
        };
        student.status = change.status;
        student.reviewed_by = Some(change.reviewer_id);

        info!(
            id = %student.id,
            status = student.status,
            reviewer = ?student.reviewed_by,
            "Student status changed"
        );
        Ok(Some(student.clone()))
    }
}
