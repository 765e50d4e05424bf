//! The three payload schemas used by the student store.

use super::{FieldSpec, Schema};

const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::non_empty_string("name"),
    FieldSpec::non_empty_string("surname"),
    FieldSpec::number("personalId"),
    FieldSpec::string("email"),
];

const SUBJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::non_empty_string("name"),
    FieldSpec::number("grade"),
];

/// Full student payload accepted by create.
pub const CREATE_SCHEMA: Schema = Schema {
    name: "student.create",
    fields: STUDENT_FIELDS,
    required: &["name", "surname", "personalId", "email"],
    additional_properties: false,
    min_properties: 0,
};

/// Partial student payload accepted by update.
pub const UPDATE_SCHEMA: Schema = Schema {
    name: "student.update",
    fields: STUDENT_FIELDS,
    required: &[],
    additional_properties: false,
    min_properties: 1,
};

/// Subject payload accepted by subject append.
pub const SUBJECT_SCHEMA: Schema = Schema {
    name: "subject.append",
    fields: SUBJECT_FIELDS,
    required: &["name", "grade"],
    additional_properties: true,
    min_properties: 0,
};
