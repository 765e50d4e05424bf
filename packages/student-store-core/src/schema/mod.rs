//! Payload schema descriptions and their validator.
//!
//! A schema is a plain value listing the known fields with their types,
//! which of them are required, whether unknown keys are tolerated and how
//! many keys a payload must carry at least. `Schema::validate` checks a JSON
//! payload against it and returns every violation found.

mod definitions;
mod validation;

use serde::Serialize;
use serde_json::Value;

pub use definitions::{CREATE_SCHEMA, SUBJECT_SCHEMA, UPDATE_SCHEMA};

/// Key of the store-assigned identifier.
pub const ID_KEY: &str = "id";
/// Key of the store-assigned creation timestamp.
pub const CREATED_AT_KEY: &str = "createdAt";
/// Key of the subject sub-resource.
pub const SUBJECTS_KEY: &str = "subjects";

/// JSON type accepted by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    /// Name used in violation messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }

    /// Returns true if `value` has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
        }
    }
}

/// A known field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,
    /// Accepted type
    pub ty: FieldType,
    /// Minimum character count for string values
    pub min_length: Option<usize>,
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::String,
            min_length: None,
        }
    }

    pub const fn non_empty_string(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::String,
            min_length: Some(1),
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Number,
            min_length: None,
        }
    }
}

/// Validation contract for one payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Schema name, reported in errors
    pub name: &'static str,
    /// Known fields
    pub fields: &'static [FieldSpec],
    /// Keys that must be present
    pub required: &'static [&'static str],
    /// Whether keys outside `fields` are accepted
    pub additional_properties: bool,
    /// Minimum number of keys in the payload
    pub min_properties: usize,
}

impl Schema {
    /// Looks up a known field by key.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == key)
    }

    /// Returns true if `key` names a known field.
    pub fn knows(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Validates `payload` against this schema.
    ///
    /// # Returns
    /// `Ok(())` when the payload conforms, otherwise every violation found.
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<SchemaViolation>> {
        let violations = validation::collect_violations(self, payload);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One reason a payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer to the offending location (`""` for the payload itself)
    pub path: String,
    /// Schema rule that failed
    pub keyword: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl SchemaViolation {
    pub(crate) fn new(path: impl Into<String>, keyword: &'static str, message: String) -> Self {
        Self {
            path: path.into(),
            keyword,
            message,
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} {}", self.path, self.message)
        }
    }
}
