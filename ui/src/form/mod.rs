//! Identity form controller
//!
//! Holds the single `FormState` record and everything that changes it:
//!
//! - **types**: form data, actions and the in-place reducer
//! - **validation**: pure checks producing per-field error messages
//! - **submission**: validate, send once, then reset or keep the data
//!
//! The flow is `Editing → Validating → Submitting → (reset | Failed)`; there
//! are no retries and no cancellation.

pub mod submission;
pub mod types;
pub mod validation;

pub use submission::{completion_action, deliver, submit, SubmitOutcome};
pub use types::*;
pub use validation::{age_in_years, validate_on, ErrorKey, FormErrors, ValidationReport};
