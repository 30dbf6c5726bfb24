//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **file_types**: content type inference and size formatting for uploads
//! - **validation**: field checks and input styling helpers

pub mod console_macros;
pub mod file_types;
pub mod validation;

pub use file_types::*;
pub use validation::*;
