//! Console side of the binary.
//!
//! This module provides the user-facing summary printed after a run and the
//! browser launcher used once the server is up.

mod browser;
mod summary;

// Re-export public API
pub use browser::open_browser;
pub use summary::{print_serving_banner, summary_lines};
