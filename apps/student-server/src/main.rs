//! Main REST API server for the student registry.
//!
//! Builds the student store and API router from command-line
//! configuration and serves until Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use student_store_api::config::{ApiConfig, CreateResponse};
use student_store_api::{router::Router, server::Server};
use student_store_core::{StoreConfig, StudentStore};
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Body returned by `POST` on the collection.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum CreateBody {
    /// The created student
    Record,
    /// The whole collection with its count
    Collection,
}

impl From<CreateBody> for CreateResponse {
    fn from(body: CreateBody) -> Self {
        match body {
            CreateBody::Record => CreateResponse::Record,
            CreateBody::Collection => CreateResponse::Collection,
        }
    }
}

/// Command-line arguments for the student server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path prefix of the student resource
    #[arg(long, default_value = "/api/students")]
    base_path: String,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,

    /// What a successful create returns
    #[arg(long, value_enum, default_value_t = CreateBody::Record)]
    create_response: CreateBody,

    /// Length of generated student ids
    #[arg(long, default_value_t = 16)]
    id_length: usize,

    /// Validate value types and reject unknown fields on update
    #[arg(long)]
    strict_updates: bool,

    /// Return an empty list instead of 404 for students without subjects
    #[arg(long)]
    allow_empty_subjects: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store_config = StoreConfig {
        id_length: args.id_length,
        strict_update_validation: args.strict_updates,
        empty_subjects_as_error: !args.allow_empty_subjects,
        ..Default::default()
    };
    if args.id_length < StoreConfig::MIN_ID_LENGTH {
        tracing::warn!(
            "id length {} below minimum, using {}",
            args.id_length,
            StoreConfig::MIN_ID_LENGTH
        );
    }
    let api_config = Arc::new(ApiConfig {
        base_path: args.base_path.clone(),
        request_timeout_ms: args.request_timeout_ms,
        create_response: args.create_response.into(),
    });

    let store = Arc::new(StudentStore::new(store_config));
    let router = Router::new(store, api_config.clone())
        .with_context(|| format!("Invalid base path '{}'", args.base_path))?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let server = Server::new(addr, router);

    tracing::info!(
        host = %args.host,
        port = args.port,
        base_path = %api_config.normalized_base_path(),
        request_timeout_ms = args.request_timeout_ms,
        strict_updates = args.strict_updates,
        "Starting student server"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    // Wait for Ctrl+C
    signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c")?;
    tracing::info!("Shutting down server...");
    server_handle.abort();

    Ok(())
}
