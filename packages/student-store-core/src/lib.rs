//! Schema-validated in-memory student record store.
//!
//! Provides the record model, payload schemas and their validator,
//! identifier generation, and the `StudentStore` that owns the collection.

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::{ErrorKind, StoreError};
pub use model::{Student, StudentList, Subject};
pub use store::StudentStore;
