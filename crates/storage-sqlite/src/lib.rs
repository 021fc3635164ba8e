//! SQLite storage implementation for Budgetwise.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `budgetwise-core` and contains:
//! - Database connection pooling and the serialized write actor
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod spending;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::StorageError;

// Re-export from budgetwise-core for convenience
pub use budgetwise_core::errors::{DatabaseError, Error, Result};
