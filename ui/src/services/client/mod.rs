//! Outbound submission client
//!
//! Builds the multipart body from a validated `FormState` and posts it to the
//! submission endpoint through a `FormSubmitter`.

mod payload;
mod submitter;
mod types;

pub use payload::{MultipartPayload, DOCUMENTS_FIELD};
pub use submitter::{parse_submit_response, FormSubmitter, HttpFormSubmitter};
pub use types::{PayloadPart, SubmitResponse};
