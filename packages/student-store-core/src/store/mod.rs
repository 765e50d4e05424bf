//! Student collection ownership, identity and merge rules.

mod student_store;

pub use student_store::StudentStore;
