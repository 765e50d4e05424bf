//! Serialized record and collection shapes.

use serde_json::json;

use student_store_core::{StoreError, StudentStore};

#[test]
fn test_record_and_list_shape() {
    let store = StudentStore::default();
    let student = store
        .create(json!({
            "name": "Juan",
            "surname": "Perez",
            "personalId": 123456,
            "email": "a@b.com"
        }))
        .unwrap();

    let value = serde_json::to_value(&student).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["createdAt", "email", "id", "name", "personalId", "subjects", "surname"]
    );
    assert_eq!(value["subjects"], json!([]));

    let list = serde_json::to_value(store.list().unwrap()).unwrap();
    assert_eq!(list["count"], 1);
    assert_eq!(list["students"][0]["id"], json!(student.id));
}

#[test]
fn test_validation_error_shape() {
    let store = StudentStore::default();
    let err = store.create(json!({"name": "Juan"})).unwrap_err();

    let StoreError::Validation { schema, violations } = &err else {
        panic!("expected validation error, got {:?}", err);
    };
    assert_eq!(*schema, "student.create");
    let value = serde_json::to_value(violations).unwrap();
    assert_eq!(
        value[0],
        json!({
            "path": "/surname",
            "keyword": "required",
            "message": "must have required property 'surname'"
        })
    );
    assert_eq!(
        err.to_string(),
        "Payload does not match schema 'student.create' (3 violation(s))"
    );
}
