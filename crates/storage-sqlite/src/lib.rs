//! SQLite storage implementation for Centime.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `centime-core` and contains:
//! - Database connection pooling and migrations
//! - The single-writer actor serializing all mutations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. The core crate is database-agnostic and works
//! with traits.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod expenses;
pub mod instruments;
pub mod quotes;
pub mod splits;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, run_migrations, spawn_writer, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from centime-core for convenience
pub use centime_core::errors::{DatabaseError, Error, Result};
