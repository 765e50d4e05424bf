//! Student CRUD handlers.

use hyper::{body::Bytes, Response};

use crate::config::CreateResponse;
use crate::router::{AppState, RouterError};

use super::request_utils::{
    build_empty_response, json_response, map_store_error_to_router_error, parse_json_body,
    student_id, MatchitParams,
};
use super::response::UpdateStudentResponse;

/// Lists every student.
///
/// # Endpoint
/// `GET /api/students`
///
/// # Response
/// - **200 OK**
/// ```json
/// {
///   "success": true,
///   "data": { "count": 1, "students": [{ "id": "k3j9x0a1b2c3d4e5", "name": "Juan", ... }] }
/// }
/// ```
pub fn list_students(state: &AppState) -> Result<Response<Bytes>, RouterError> {
    let list = state.store.list().map_err(map_store_error_to_router_error)?;
    json_response(200, list)
}

/// Creates a new student.
///
/// # Endpoint
/// `POST /api/students`
///
/// # Request Body
/// ```json
/// {
///   "name": "Juan",
///   "surname": "Perez",
///   "personalId": 123456,
///   "email": "a@b.com"
/// }
/// ```
///
/// # Response
/// - **201 Created**: The stored record with its generated `id`, `createdAt`
///   and empty `subjects`, or the whole collection when the API is configured
///   with `CreateResponse::Collection`
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON, schema violations (listed in
///   `error.details`), or `subjects` present in the body
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/api/students \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Juan", "surname": "Perez", "personalId": 123456, "email": "a@b.com"}'
/// ```
pub fn create_student(body: &[u8], state: &AppState) -> Result<Response<Bytes>, RouterError> {
    let payload = parse_json_body(body)?;
    let student = state
        .store
        .create(payload)
        .map_err(map_store_error_to_router_error)?;

    match state.config.create_response {
        CreateResponse::Record => json_response(201, student),
        CreateResponse::Collection => {
            let list = state.store.list().map_err(map_store_error_to_router_error)?;
            json_response(201, list)
        }
    }
}

/// Reads a student by id.
///
/// # Endpoint
/// `GET /api/students/{id}`
///
/// # Errors
/// - **404 Not Found**: Unknown id
pub fn read_student(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = student_id(params)?;
    let student = state
        .store
        .get(&id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, student)
}

/// Merges the body over a stored student.
///
/// # Endpoint
/// `PUT /api/students/{id}`
///
/// # Request Body
/// Any subset of `name`, `surname`, `personalId`, `email`. `id`,
/// `createdAt` and `subjects` are ignored.
///
/// # Response
/// - **200 OK**: Confirmation message and the updated record
///
/// # Errors
/// - **400 Bad Request**: No updatable field in the body
/// - **404 Not Found**: Unknown id
pub fn update_student(
    body: &[u8],
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = student_id(params)?;
    let payload = parse_json_body(body)?;
    let student = state
        .store
        .update(&id, payload)
        .map_err(map_store_error_to_router_error)?;

    json_response(
        200,
        UpdateStudentResponse {
            message: "Student updated successfully",
            student,
        },
    )
}

/// Deletes a student.
///
/// # Endpoint
/// `DELETE /api/students/{id}`
///
/// # Response
/// - **204 No Content**
///
/// # Errors
/// - **404 Not Found**: Unknown id
pub fn delete_student(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = student_id(params)?;
    state
        .store
        .delete(&id)
        .map_err(map_store_error_to_router_error)?;
    build_empty_response(204)
}
