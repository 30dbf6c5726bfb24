//! Infrastructure Services
//!
//! - **client**: multipart payload construction and the HTTP submitter
//! - **config**: endpoint and validation thresholds
//! - **errors**: submission error types
//!
//! The services are WASM-first: async traits carry no Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
