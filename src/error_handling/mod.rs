//! Error handling.
//!
//! This module provides the typed errors for initialization, Overpass fetches
//! and the local web server. Orchestration code wraps them in `anyhow` with
//! context.

mod types;

// Re-export public API
pub use types::{FetchError, FetchFailureKind, InitializationError, ServerError};
