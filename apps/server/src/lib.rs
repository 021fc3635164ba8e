//! Budgetwise HTTP server.
//!
//! Exposed as a library so integration tests can build the router against a
//! throwaway database.

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
