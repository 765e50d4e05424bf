//! Validation of JSON payloads against a `Schema`.

use serde_json::{Map, Value};

use super::{FieldSpec, Schema, SchemaViolation};

/// Collects every violation of `schema` in `payload`.
///
/// # Arguments
/// * `schema` - Schema to check against
/// * `payload` - JSON payload
///
/// # Returns
/// Violations in check order: object shape, key count, required keys,
/// then per-key type/length/unknown-key checks in key order.
pub(crate) fn collect_violations(schema: &Schema, payload: &Value) -> Vec<SchemaViolation> {
    let Some(object) = payload.as_object() else {
        return vec![SchemaViolation::new(
            "",
            "type",
            format!("must be object, got {}", json_type_name(payload)),
        )];
    };

    let mut violations = Vec::new();

    if object.len() < schema.min_properties {
        violations.push(SchemaViolation::new(
            "",
            "minProperties",
            format!(
                "must NOT have fewer than {} properties",
                schema.min_properties
            ),
        ));
    }

    for required in schema.required {
        if !object.contains_key(*required) {
            violations.push(SchemaViolation::new(
                pointer(required),
                "required",
                format!("must have required property '{}'", required),
            ));
        }
    }

    check_fields(schema, object, &mut violations);

    violations
}

fn check_fields(schema: &Schema, object: &Map<String, Value>, violations: &mut Vec<SchemaViolation>) {
    for (key, value) in object {
        match schema.field(key) {
            Some(spec) => check_value(spec, value, violations),
            None if !schema.additional_properties => violations.push(SchemaViolation::new(
                pointer(key),
                "additionalProperties",
                format!("must NOT have additional property '{}'", key),
            )),
            None => {}
        }
    }
}

fn check_value(spec: &FieldSpec, value: &Value, violations: &mut Vec<SchemaViolation>) {
    if !spec.ty.matches(value) {
        violations.push(SchemaViolation::new(
            pointer(spec.name),
            "type",
            format!("must be {}, got {}", spec.ty.name(), json_type_name(value)),
        ));
        return;
    }

    if let (Some(min), Some(s)) = (spec.min_length, value.as_str()) {
        if s.chars().count() < min {
            violations.push(SchemaViolation::new(
                pointer(spec.name),
                "minLength",
                format!("must NOT have fewer than {} characters", min),
            ));
        }
    }
}

fn pointer(key: &str) -> String {
    // RFC 6901 escaping
    format!("/{}", key.replace('~', "~0").replace('/', "~1"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
