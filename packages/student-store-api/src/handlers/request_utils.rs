//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::body::{Bytes, Incoming};
use hyper::Response;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::Value;
use tokio::time;

use crate::router::RouterError;
use student_store_core::{ErrorKind, StoreError};

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout(
    body: Incoming,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, body.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses a JSON request body. An empty body is read as `{}`.
pub fn parse_json_body(body: &[u8]) -> Result<Value, RouterError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))
}

/// Extracts and percent-decodes the `id` path parameter.
pub fn student_id(params: &MatchitParams<'_, '_>) -> Result<String, RouterError> {
    let raw = params
        .get("id")
        .ok_or_else(|| RouterError::BadRequest("Missing student ID".to_string()))?;
    percent_decode_str(raw)
        .decode_utf8()
        .map(|id| id.into_owned())
        .map_err(|e| RouterError::BadRequest(format!("Invalid student ID '{}': {}", raw, e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e.kind() {
        ErrorKind::Validation => match e.violations() {
            Some(violations) => RouterError::Validation {
                message: e.to_string(),
                details: serde_json::to_value(violations).unwrap_or(Value::Null),
            },
            None => RouterError::BadRequest(e.to_string()),
        },
        ErrorKind::NotFound | ErrorKind::EmptyResource => RouterError::NotFound(e.to_string()),
        ErrorKind::Internal => RouterError::InternalError(format!("Store error: {}", e)),
    }
}

/// Serializes `data` inside the success envelope and builds the response.
pub fn json_response<T: Serialize>(status: u16, data: T) -> Result<Response<Bytes>, RouterError> {
    let api_response = super::response::success_response(data);
    let json = serde_json::to_vec(&api_response)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Helper to build empty HTTP response (for 204 No Content)
pub fn build_empty_response(status: u16) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}
