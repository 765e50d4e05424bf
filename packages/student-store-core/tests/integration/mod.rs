//! Integration test suite for the student store.
//!
//! 1. Record lifecycle through the public API
//! 2. Serialized shapes consumed by transport adapters

pub mod lifecycle_tests;
pub mod serialization_tests;
