//! Multipart body construction for the identity form.
//!
//! Scalars go first, address lines use bracketed keys such as
//! `residentialAddress[street1]`, and every document file is appended
//! under the shared `documents` name.

use reqwest::multipart::{Form, Part};

use super::types::PayloadPart;
use crate::form::{Address, FormState};
use crate::services::errors::{SubmissionError, SubmissionResult};

pub const DOCUMENTS_FIELD: &str = "documents";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<PayloadPart>,
}

impl MultipartPayload {
    pub fn from_state(state: &FormState) -> SubmissionResult<Self> {
        let mut payload = Self::default();

        payload.push_text("firstName", &state.first_name);
        payload.push_text("lastName", &state.last_name);
        payload.push_text("email", &state.email);
        payload.push_text("dob", &state.dob);
        payload.push_address("residentialAddress", &state.residential_address);
        payload.push_address("permanentAddress", state.effective_permanent_address());

        for (index, document) in state.documents.iter().enumerate() {
            let file = document
                .file
                .as_ref()
                .ok_or(SubmissionError::MissingFile { index })?;
            payload.parts.push(PayloadPart::File {
                name: DOCUMENTS_FIELD.to_string(),
                file_name: file.name.clone(),
                content_type: file.content_type.clone(),
                bytes: file.bytes.clone(),
            });
        }

        Ok(payload)
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// Value of the first text part with this name
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            PayloadPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &PayloadPart> {
        self.parts
            .iter()
            .filter(|part| matches!(part, PayloadPart::File { .. }))
    }

    pub fn into_form(self) -> SubmissionResult<Form> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                PayloadPart::Text { name, value } => form.text(name, value),
                PayloadPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes.to_vec())
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| SubmissionError::InvalidPart {
                            field: name.clone(),
                            message: e.to_string(),
                        })?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }

    fn push_text(&mut self, name: &str, value: &str) {
        self.parts.push(PayloadPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn push_address(&mut self, prefix: &str, address: &Address) {
        self.push_text(&format!("{}[street1]", prefix), &address.street1);
        self.push_text(&format!("{}[street2]", prefix), &address.street2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DocumentEntry, DocumentType, UploadedFile};

    fn state_with_documents() -> FormState {
        let mut state = FormState::default();
        state.update_field("firstName", "Ada");
        state.update_field("lastName", "Lovelace");
        state.update_field("email", "ada@example.com");
        state.update_field("dob", "1990-12-10");
        state.update_field("residentialStreet1", "12 St James's Square");
        state.update_field("residentialStreet2", "London");
        state.update_field("permanentStreet1", "1 Farm Lane");
        state.update_field("permanentStreet2", "Ockham");
        state.documents = vec![
            DocumentEntry {
                file_name: "passport".to_string(),
                file_type: Some(DocumentType::Pdf),
                file: Some(UploadedFile::new("passport.pdf", b"%PDF".to_vec())),
                ..DocumentEntry::default()
            },
            DocumentEntry {
                file_name: "photo".to_string(),
                file_type: Some(DocumentType::Jpg),
                file: Some(UploadedFile::new("photo.jpg", b"\xff\xd8".to_vec())),
                ..DocumentEntry::new(1)
            },
        ];
        state
    }

    #[test]
    fn test_payload_uses_bracketed_address_keys() {
        let payload = MultipartPayload::from_state(&state_with_documents()).unwrap();

        let names: Vec<&str> = payload.parts().iter().map(PayloadPart::name).collect();
        assert_eq!(
            names,
            vec![
                "firstName",
                "lastName",
                "email",
                "dob",
                "residentialAddress[street1]",
                "residentialAddress[street2]",
                "permanentAddress[street1]",
                "permanentAddress[street2]",
                "documents",
                "documents",
            ]
        );
        assert_eq!(payload.text("dob"), Some("1990-12-10"));
        assert_eq!(payload.text("permanentAddress[street2]"), Some("Ockham"));
    }

    #[test]
    fn test_same_address_sends_residential_values_as_permanent() {
        let mut state = state_with_documents();
        state.set_same_address(true);

        let payload = MultipartPayload::from_state(&state).unwrap();
        assert_eq!(
            payload.text("permanentAddress[street1]"),
            Some("12 St James's Square")
        );
        assert_eq!(payload.text("permanentAddress[street2]"), Some("London"));
    }

    #[test]
    fn test_document_parts_carry_file_metadata() {
        let payload = MultipartPayload::from_state(&state_with_documents()).unwrap();
        let files: Vec<&PayloadPart> = payload.files().collect();

        assert_eq!(files.len(), 2);
        match files[0] {
            PayloadPart::File {
                file_name,
                content_type,
                bytes,
                ..
            } => {
                assert_eq!(file_name, "passport.pdf");
                assert_eq!(content_type, "application/pdf");
                assert_eq!(bytes.as_ref(), b"%PDF");
            }
            other => panic!("expected file part, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut state = state_with_documents();
        state.documents[1].file = None;

        assert_eq!(
            MultipartPayload::from_state(&state),
            Err(SubmissionError::MissingFile { index: 1 })
        );
    }

    #[test]
    fn test_into_form_accepts_inferred_content_types() {
        let payload = MultipartPayload::from_state(&state_with_documents()).unwrap();
        assert!(payload.into_form().is_ok());
    }
}
