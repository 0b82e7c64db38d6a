//! Request Body Extractor
//!
//! Lenient JSON body extractor for the student endpoints. An empty body or a
//! JSON value that is not an object is read as `{}`, so the handlers' own
//! field checks decide the response. Malformed JSON becomes a 400 in the
//! usual error envelope instead of axum's plain-text rejection.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::StudentError;

/// Message for bodies that are present but not valid JSON
pub const MALFORMED_BODY: &str = "Request body must be valid JSON";

/// JSON body, read leniently. See the module docs.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

/// Parses raw body bytes into an object, treating empty and non-object
/// bodies as `{}`.
pub fn body_object(bytes: &[u8]) -> Result<Map<String, Value>, StudentError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            debug!("Non-object JSON body ignored: {}", other);
            Ok(Map::new())
        }
        Err(e) => {
            debug!("Malformed JSON body: {}", e);
            Err(StudentError::Validation(MALFORMED_BODY.to_string()))
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = StudentError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| StudentError::Validation(e.body_text()))?;

        let object = body_object(&bytes)?;
        serde_json::from_value(Value::Object(object))
            .map(JsonBody)
            .map_err(|e| StudentError::Validation(e.to_string()))
    }
}
