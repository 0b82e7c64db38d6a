//! API Module
//!
//! HTTP handlers, caller-identity middleware and routing for the student
//! registry REST API.
//!
//! # Endpoints
//! - `GET /students` - List students, filtered by the query string
//! - `POST /students` - Add a student
//! - `GET /students/:id` - Fetch one student
//! - `PATCH|PUT /students/:id` - Update a student's fields
//! - `PATCH /students/:id/status` - Approve or deactivate a student
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use auth::{require_reviewer, Reviewer, USER_ID_HEADER};
pub use extract::JsonBody;
pub use handlers::*;
pub use routes::create_router;
