//! Employee API - CRUD service for employee records.
//!
//! Create, list, fetch, update and delete employees over HTTP, with email
//! addresses kept unique across all records.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Business rules (email uniqueness, update merging)
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, NewEmployee};
pub use errors::{AppError, AppResult};
