//! Caller Identity Middleware
//!
//! Trusts the `x-user-id` header set by the upstream authentication layer
//! and exposes it to handlers as a `Reviewer` extension.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::error::StudentError;

/// Header carrying the authenticated caller's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller performing a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub id: String,
}

/// Rejects requests without a caller identity with 401, otherwise inserts
/// the `Reviewer` into the request extensions.
pub async fn require_reviewer(
    mut request: Request,
    next: Next,
) -> Result<Response, StudentError> {
    let reviewer_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StudentError::Unauthorized("Authentication required".to_string()))?;

    debug!(reviewer = %reviewer_id, "Caller identified");
    request.extensions_mut().insert(Reviewer { id: reviewer_id });

    Ok(next.run(request).await)
}
