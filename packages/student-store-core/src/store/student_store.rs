//! In-memory student collection.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde_json::{Map, Value};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::id::generate_id;
use crate::model::{Student, StudentList, Subject};
use crate::schema::{
    Schema, SchemaViolation, CREATED_AT_KEY, CREATE_SCHEMA, ID_KEY, SUBJECTS_KEY, SUBJECT_SCHEMA,
    UPDATE_SCHEMA,
};

/// Sole owner of the student collection.
///
/// Every operation holds the collection lock for its whole duration, so ids
/// stay unique and `count` stays consistent under concurrent callers.
#[derive(Debug)]
pub struct StudentStore {
    /// Records in insertion order
    students: RwLock<Vec<Student>>,
    /// Store configuration
    config: StoreConfig,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl StudentStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            students: RwLock::new(Vec::with_capacity(config.initial_capacity)),
            config,
        }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the number of stored students.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Returns every stored student together with the collection size.
    pub fn list(&self) -> Result<StudentList, StoreError> {
        Ok(StudentList::new(self.read()?.clone()))
    }

    /// Validates and stores a new student.
    ///
    /// # Arguments
    /// * `payload` - JSON object matching the create schema
    ///
    /// # Returns
    /// The stored record including its generated `id` and `createdAt`.
    ///
    /// # Errors
    /// `SubjectsNotAllowed` if the payload carries `subjects`, `Validation`
    /// for any other schema violation. The collection is left unchanged.
    pub fn create(&self, payload: Value) -> Result<Student, StoreError> {
        if payload
            .as_object()
            .is_some_and(|obj| obj.contains_key(SUBJECTS_KEY))
        {
            return Err(StoreError::SubjectsNotAllowed);
        }
        validate(&CREATE_SCHEMA, &payload)?;
        let attributes = into_object(payload);

        let mut students = self.write()?;
        let id = self.unused_id(&students);
        let student = Student {
            id,
            attributes,
            created_at: Utc::now(),
            subjects: Vec::new(),
        };
        students.push(student.clone());

        tracing::debug!(student_id = %student.id, count = students.len(), "student created");
        Ok(student)
    }

    /// Returns the student with the given id.
    pub fn get(&self, id: &str) -> Result<Student, StoreError> {
        self.read()?
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Removes the student with the given id.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut students = self.write()?;
        let index = position(&students, id)?;
        students.remove(index);

        tracing::debug!(student_id = %id, count = students.len(), "student deleted");
        Ok(())
    }

    /// Merges `payload` over the stored attributes of a student.
    ///
    /// `id`, `createdAt` and `subjects` are dropped from the payload before
    /// anything else. The remaining keys must include at least one known
    /// student field; only key names are checked unless strict update
    /// validation is enabled, in which case the update schema is enforced.
    ///
    /// # Returns
    /// The updated record.
    pub fn update(&self, id: &str, payload: Value) -> Result<Student, StoreError> {
        let mut changes = match payload {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        changes.remove(ID_KEY);
        changes.remove(CREATED_AT_KEY);
        changes.remove(SUBJECTS_KEY);

        if !changes.keys().any(|key| UPDATE_SCHEMA.knows(key)) {
            return Err(StoreError::NoValidField);
        }
        if self.config.strict_update_validation {
            validate(&UPDATE_SCHEMA, &Value::Object(changes.clone()))?;
        }

        let mut students = self.write()?;
        let index = position(&students, id)?;
        let student = &mut students[index];
        let keys: Vec<String> = changes.keys().cloned().collect();
        student.attributes.extend(changes);

        tracing::debug!(student_id = %id, fields = ?keys, "student updated");
        Ok(student.clone())
    }

    /// Appends a subject to a student's subject list.
    ///
    /// # Returns
    /// The full subject list after the append, in insertion order.
    pub fn append_subject(&self, id: &str, payload: Value) -> Result<Vec<Subject>, StoreError> {
        validate(&SUBJECT_SCHEMA, &payload)?;
        let subject = subject_from_payload(payload)?;

        let mut students = self.write()?;
        let index = position(&students, id)?;
        let student = &mut students[index];
        student.subjects.push(subject);

        tracing::debug!(
            student_id = %id,
            subjects = student.subjects.len(),
            "subject appended"
        );
        Ok(student.subjects.clone())
    }

    /// Returns a student's subjects.
    ///
    /// # Errors
    /// `NotFound` for an unknown id; `NoSubjects` when the list is empty and
    /// `empty_subjects_as_error` is set.
    pub fn subjects(&self, id: &str) -> Result<Vec<Subject>, StoreError> {
        let students = self.read()?;
        let index = position(&students, id)?;
        let subjects = &students[index].subjects;
        if subjects.is_empty() && self.config.empty_subjects_as_error {
            return Err(StoreError::NoSubjects { id: id.to_string() });
        }
        Ok(subjects.clone())
    }

    fn unused_id(&self, students: &[Student]) -> String {
        let len = self.config.effective_id_length();
        loop {
            let id = generate_id(len);
            if !students.iter().any(|s| s.id == id) {
                return id;
            }
            tracing::warn!(student_id = %id, "generated id collided, retrying");
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Student>>, StoreError> {
        self.students.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Student>>, StoreError> {
        self.students.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn position(students: &[Student], id: &str) -> Result<usize, StoreError> {
    students
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| StoreError::not_found(id))
}

fn validate(schema: &Schema, payload: &Value) -> Result<(), StoreError> {
    schema
        .validate(payload)
        .map_err(|violations| StoreError::Validation {
            schema: schema.name,
            violations,
        })
}

fn into_object(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn subject_from_payload(payload: Value) -> Result<Subject, StoreError> {
    serde_json::from_value(payload).map_err(|e| StoreError::Validation {
        schema: SUBJECT_SCHEMA.name,
        violations: vec![SchemaViolation::new("", "type", e.to_string())],
    })
}
