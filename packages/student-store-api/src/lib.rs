//! REST API server for the student store.
//!
//! Provides HTTP endpoints for student CRUD and the nested subject
//! sub-resource, request routing and response envelopes.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
