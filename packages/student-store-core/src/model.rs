//! Student and subject record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored student record.
///
/// `id`, `created_at` and `subjects` are owned by the store; every other
/// attribute comes from the create/update payloads and is kept as JSON so
/// updates can be merged key by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Opaque identifier assigned at creation
    pub id: String,
    /// Payload attributes (`name`, `surname`, `personalId`, `email`, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,
    /// Subjects in insertion order
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Student {
    /// Returns a string attribute by key.
    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Returns the student's name.
    pub fn name(&self) -> Option<&str> {
        self.str_attr("name")
    }

    /// Returns the student's surname.
    pub fn surname(&self) -> Option<&str> {
        self.str_attr("surname")
    }

    /// Returns the student's email address.
    pub fn email(&self) -> Option<&str> {
        self.str_attr("email")
    }

    /// Returns the student's personal id number.
    pub fn personal_id(&self) -> Option<f64> {
        self.attributes.get("personalId").and_then(Value::as_f64)
    }
}

/// A subject and the grade obtained in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub grade: f64,
}

/// Snapshot of the whole collection.
///
/// `count` is derived from the records at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentList {
    count: usize,
    students: Vec<Student>,
}

impl StudentList {
    pub(crate) fn new(students: Vec<Student>) -> Self {
        Self {
            count: students.len(),
            students,
        }
    }

    /// Number of students in the snapshot.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Consumes the snapshot, returning the records.
    pub fn into_students(self) -> Vec<Student> {
        self.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_serializes_flat_camel_case() {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), json!("Juan"));
        attributes.insert("personalId".to_string(), json!(123456));
        let student = Student {
            id: "abc123def456ghi7".to_string(),
            attributes,
            created_at: Utc::now(),
            subjects: vec![Subject {
                name: "math".to_string(),
                grade: 5.5,
            }],
        };

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["id"], "abc123def456ghi7");
        assert_eq!(value["name"], "Juan");
        assert_eq!(value["personalId"], 123456);
        assert!(value["createdAt"].is_string());
        assert_eq!(value["subjects"], json!([{"name": "math", "grade": 5.5}]));
        assert_eq!(student.name(), Some("Juan"));
        assert_eq!(student.personal_id(), Some(123456.0));
        assert_eq!(student.email(), None);
    }

    #[test]
    fn test_student_list_count_is_derived() {
        let list = StudentList::new(Vec::new());
        assert_eq!(list.count(), 0);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"count": 0, "students": []})
        );
    }
}
