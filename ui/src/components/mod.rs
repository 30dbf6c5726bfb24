//! User Interface Components
//!
//! Dioxus components for the identity form:
//!
//! - **forms**: personal details, addresses and the document upload list
//! - **display**: submission progress and the toast notification
//! - **input**: controlled inputs with inline validation messages
//!
//! Components receive the shared `Signal<FormState>` and a dispatch handler;
//! all mutations go through `FormAction`.

pub mod display;
pub mod forms;
pub mod input;
