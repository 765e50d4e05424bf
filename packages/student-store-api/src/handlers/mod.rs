//! HTTP endpoint implementations for students and their subjects.

pub mod request_utils;
pub mod response;
mod student_handlers;
mod subject_handlers;

pub use response::{error_response, success_response};
pub use student_handlers::{
    create_student, delete_student, list_students, read_student, update_student,
};
pub use subject_handlers::{append_subject, list_subjects};
