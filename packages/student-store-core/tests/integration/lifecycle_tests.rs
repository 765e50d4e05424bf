//! Lifecycle workflow tests: create → subjects → update → delete.

use chrono::Utc;
use serde_json::json;

use student_store_core::{ErrorKind, StoreConfig, StudentStore, Subject};

/// Create, append a subject, delete, then confirm the record is gone.
#[test]
fn test_student_lifecycle() {
    let store = StudentStore::new(StoreConfig::default());
    let before = Utc::now();

    let student = store
        .create(json!({
            "name": "Juan",
            "surname": "Perez",
            "personalId": 123456,
            "email": "a@b.com"
        }))
        .unwrap();
    assert!(!student.id.is_empty());
    assert!(student.created_at >= before);
    assert!(student.subjects.is_empty());

    let subjects = store
        .append_subject(&student.id, json!({"name": "math", "grade": 5.5}))
        .unwrap();
    assert_eq!(
        subjects,
        vec![Subject {
            name: "math".to_string(),
            grade: 5.5
        }]
    );

    store.delete(&student.id).unwrap();
    assert_eq!(
        store.get(&student.id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(store.list().unwrap().count(), 0);
}

/// Updates keep identity, later deletes never free an id for reuse.
#[test]
fn test_update_and_delete_many() {
    let store = StudentStore::default();
    let mut ids = Vec::new();
    for i in 0..20 {
        let student = store
            .create(json!({
                "name": format!("Name {}", i),
                "surname": "Surname",
                "personalId": i,
                "email": format!("{}@school.test", i)
            }))
            .unwrap();
        ids.push((student.id, student.created_at));
    }

    for (id, created_at) in &ids {
        let updated = store
            .update(id, json!({"surname": "Changed", "createdAt": "2000-01-01T00:00:00Z"}))
            .unwrap();
        assert_eq!(&updated.id, id);
        assert_eq!(&updated.created_at, created_at);
        assert_eq!(updated.surname(), Some("Changed"));
    }

    for (id, _) in ids.iter().step_by(2) {
        store.delete(id).unwrap();
    }
    assert_eq!(store.count().unwrap(), 10);

    let fresh = store
        .create(json!({
            "name": "Late",
            "surname": "Arrival",
            "personalId": 99,
            "email": "late@school.test"
        }))
        .unwrap();
    assert!(ids.iter().all(|(id, _)| *id != fresh.id));
    assert_eq!(store.count().unwrap(), 11);
}
