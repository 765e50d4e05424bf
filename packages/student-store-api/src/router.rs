//! Matchit routing configuration.

use std::sync::Arc;

use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use matchit::Router as MatchitRouter;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::handlers;
use crate::handlers::request_utils::{build_response, read_request_body_with_timeout, MatchitParams};
use student_store_core::StudentStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Student store instance
    pub store: Arc<StudentStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a router serving the student routes under the configured base path.
    ///
    /// # Errors
    /// Returns `matchit::InsertError` if the base path produces conflicting
    /// or malformed routes.
    pub fn new(store: Arc<StudentStore>, config: Arc<ApiConfig>) -> Result<Self, matchit::InsertError> {
        let base = config.normalized_base_path();
        let mut router = MatchitRouter::new();

        // Collection endpoints
        router.insert(route_path(&base, ""), RouteHandler::Students)?;

        // Record endpoints
        router.insert(route_path(&base, "/{id}"), RouteHandler::Student)?;

        // Subject sub-resource endpoints
        router.insert(route_path(&base, "/{id}/subjects"), RouteHandler::Subjects)?;

        Ok(Self {
            inner: router,
            state: AppState { store, config },
        })
    }

    /// Returns the shared application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reads the request body and routes the request to its handler.
    ///
    /// # Arguments
    /// * `req` - HTTP request
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route(&self, req: Request<Incoming>) -> Result<Response<Bytes>, RouterError> {
        let (parts, body) = req.into_parts();
        let body =
            read_request_body_with_timeout(body, self.state.config.request_timeout_ms).await?;
        self.dispatch(&parts.method, parts.uri.path(), &body)
    }

    /// Routes an already-read request.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Request path, without query string
    /// * `body` - Raw request body
    pub fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: &[u8],
    ) -> Result<Response<Bytes>, RouterError> {
        let path = normalize_path(path);

        match self.inner.at(path) {
            Ok(matched) => matched
                .value
                .handle(method, body, &matched.params, &self.state),
            Err(_) => {
                // Return 404 for unmatched routes
                let error_response = handlers::error_response(
                    404,
                    "Not Found".to_string(),
                    Some(Value::String(format!("No route found for {}", path))),
                );
                let body = serde_json::to_vec(&error_response).map_err(|e| {
                    RouterError::InternalError(format!("Failed to serialize error response: {}", e))
                })?;
                build_response(404, body)
            }
        }
    }
}

fn route_path(base: &str, suffix: &str) -> String {
    match (base.is_empty(), suffix.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => suffix.to_string(),
        _ => format!("{}{}", base, suffix),
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Route handler function.
enum RouteHandler {
    Students,
    Student,
    Subjects,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    fn handle(
        &self,
        method: &Method,
        body: &[u8],
        params: &MatchitParams<'_, '_>,
        state: &AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        match (self, method) {
            (RouteHandler::Students, &Method::GET) => handlers::list_students(state),
            (RouteHandler::Students, &Method::POST) => handlers::create_student(body, state),
            (RouteHandler::Student, &Method::GET) => handlers::read_student(params, state),
            (RouteHandler::Student, &Method::PUT) => {
                handlers::update_student(body, params, state)
            }
            (RouteHandler::Student, &Method::DELETE) => handlers::delete_student(params, state),
            (RouteHandler::Subjects, &Method::POST) => {
                handlers::append_subject(body, params, state)
            }
            (RouteHandler::Subjects, &Method::GET) => handlers::list_subjects(params, state),
            _ => Err(RouterError::MethodNotAllowed),
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
    /// Schema violations, reported in the error details
    Validation { message: String, details: Value },
}

impl RouterError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RouterError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RouterError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RouterError::Timeout => StatusCode::REQUEST_TIMEOUT,
            RouterError::BadRequest(_) | RouterError::Validation { .. } => StatusCode::BAD_REQUEST,
            RouterError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RouterError::Validation { message, .. } => write!(f, "Validation Failed: {}", message),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let (message, details) = match err {
            RouterError::MethodNotAllowed => ("Method Not Allowed".to_string(), None),
            RouterError::Timeout => ("Request Timeout".to_string(), None),
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg) => (msg, None),
            RouterError::Validation { message, details } => (message, Some(details)),
        };

        let error_response = handlers::error_response(status.as_u16(), message, details);
        // Fallback for when serializing the error itself fails.
        let body = serde_json::to_vec(&error_response)
            .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\",\"details\":null}}}}", e).into_bytes());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut response = Response::new(Bytes::from_static(b"Internal Server Error"));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            })
    }
}
