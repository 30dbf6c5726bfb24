mod identity_form_service;

pub use identity_form_service::IdentityFormService;
