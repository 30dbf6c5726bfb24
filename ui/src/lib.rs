//! This crate contains the identity details form: state, validation,
//! submission and the Dioxus components that render it.

pub mod app;
pub use app::IdentityFormService;

pub mod components;
pub mod form;
pub mod services;
pub mod utils;
