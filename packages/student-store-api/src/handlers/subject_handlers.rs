//! Subject sub-resource handlers.

use hyper::{body::Bytes, Response};

use crate::router::{AppState, RouterError};

use super::request_utils::{
    json_response, map_store_error_to_router_error, parse_json_body, student_id, MatchitParams,
};
use super::response::{AppendSubjectResponse, SubjectListResponse};

/// Appends a subject to a student.
///
/// # Endpoint
/// `POST /api/students/{id}/subjects`
///
/// # Request Body
/// ```json
/// { "name": "math", "grade": 5.5 }
/// ```
///
/// # Response
/// - **200 OK**: Confirmation message and the full subject list
///
/// # Errors
/// - **400 Bad Request**: `name` or `grade` missing or of the wrong type
/// - **404 Not Found**: Unknown id
pub fn append_subject(
    body: &[u8],
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = student_id(params)?;
    let payload = parse_json_body(body)?;
    let subjects = state
        .store
        .append_subject(&id, payload)
        .map_err(map_store_error_to_router_error)?;

    json_response(
        200,
        AppendSubjectResponse {
            message: "Subject added successfully",
            subjects,
        },
    )
}

/// Lists a student's subjects.
///
/// # Endpoint
/// `GET /api/students/{id}/subjects`
///
/// # Errors
/// - **404 Not Found**: Unknown id, or no subjects registered
pub fn list_subjects(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = student_id(params)?;
    let subjects = state
        .store
        .subjects(&id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, SubjectListResponse { subjects })
}
