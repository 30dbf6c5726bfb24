pub mod address_form;
pub mod document_type_selector;
pub mod documents_form;
pub mod personal_details_form;

pub use address_form::*;
pub use document_type_selector::*;
pub use documents_form::*;
pub use personal_details_form::*;
