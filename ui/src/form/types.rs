// Core types for the identity form - no dioxus imports needed here
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::validation::FormErrors;
use crate::utils::file_types::content_type_for;

/// Street lines of a postal address
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub street1: String,
    pub street2: String,
}

impl Address {
    pub fn clear(&mut self) {
        self.street1.clear();
        self.street2.clear();
    }

    fn line_mut(&mut self, line: AddressLine) -> &mut String {
        match line {
            AddressLine::Street1 => &mut self.street1,
            AddressLine::Street2 => &mut self.street2,
        }
    }
}

/// Declared type of an uploaded document, written as its extension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = ".pdf")]
    Pdf,
    #[serde(rename = ".doc")]
    Doc,
    #[serde(rename = ".jpg")]
    Jpg,
    #[serde(rename = ".webp")]
    Webp,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Pdf,
        DocumentType::Doc,
        DocumentType::Jpg,
        DocumentType::Webp,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentType::Pdf => ".pdf",
            DocumentType::Doc => ".doc",
            DocumentType::Jpg => ".jpg",
            DocumentType::Webp => ".webp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Doc => "DOC",
            DocumentType::Jpg => "JPG",
            DocumentType::Webp => "WEBP",
        }
    }

    /// Content types a file must carry to match this declared type.
    /// `None` means the type is not checked.
    pub fn accepted_content_types(&self) -> Option<&'static [&'static str]> {
        match self {
            DocumentType::Pdf => Some(&["application/pdf"]),
            DocumentType::Doc => Some(&[
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ]),
            DocumentType::Jpg => Some(&["image/jpeg", "image/jpg"]),
            // TODO: decide which content types a declared .webp accepts; it is unchecked for now
            DocumentType::Webp => None,
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        match self.accepted_content_types() {
            Some(accepted) => accepted.contains(&content_type),
            None => true,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|kind| kind.extension() == value)
            .ok_or_else(|| format!("Unknown document type: {}", value))
    }
}

/// A file picked in the browser, held in memory until submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Builds a file whose content type is inferred from its name
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();
        Self {
            name,
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Stable per-row id, used as the render key so file inputs remount
    pub id: u64,
    pub file_name: String,
    pub file_type: Option<DocumentType>,
    pub file: Option<UploadedFile>,
}

impl DocumentEntry {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast shown after a submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting form!";

// Submission phase management
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressLine {
    Street1,
    Street2,
}

/// Named scalar inputs of the form.
///
/// Input names follow the markup: address lines are prefixed with
/// `residential` or `permanent` and routed into the matching address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Dob,
    Residential(AddressLine),
    Permanent(AddressLine),
    SameAddress,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Dob => "dob",
            FormField::Residential(AddressLine::Street1) => "residentialStreet1",
            FormField::Residential(AddressLine::Street2) => "residentialStreet2",
            FormField::Permanent(AddressLine::Street1) => "permanentStreet1",
            FormField::Permanent(AddressLine::Street2) => "permanentStreet2",
            FormField::SameAddress => "sameAddress",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let address_line = |rest: &str| match rest.to_ascii_lowercase().as_str() {
            "street1" => Ok(AddressLine::Street1),
            "street2" => Ok(AddressLine::Street2),
            _ => Err(format!("Unknown address field: {}", name)),
        };

        if let Some(rest) = name.strip_prefix("residential") {
            return address_line(rest).map(FormField::Residential);
        }
        if let Some(rest) = name.strip_prefix("permanent") {
            return address_line(rest).map(FormField::Permanent);
        }

        match name {
            "firstName" => Ok(FormField::FirstName),
            "lastName" => Ok(FormField::LastName),
            "email" => Ok(FormField::Email),
            "dob" => Ok(FormField::Dob),
            "sameAddress" => Ok(FormField::SameAddress),
            _ => Err(format!("Unknown form field: {}", name)),
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum FormAction {
    UpdateField(FormField, String),
    SetSameAddress(bool),

    // Document list actions
    AddDocument,
    RemoveDocument(usize),
    SetDocumentName(usize, String),
    SetDocumentType(usize, Option<DocumentType>),
    SetDocumentFile(usize, Option<UploadedFile>),

    // Validation and submission
    SetErrors(FormErrors),
    SetPhase(SubmissionPhase),
    SubmissionSucceeded,
    SubmissionFailed(String),
    DismissNotification(u64),
}

/// Everything the user has entered, plus the validation and submission status
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw `YYYY-MM-DD` value of the date input
    pub dob: String,
    pub residential_address: Address,
    pub same_address: bool,
    pub permanent_address: Address,
    pub documents: Vec<DocumentEntry>,

    pub errors: FormErrors,
    pub phase: SubmissionPhase,
    pub notification: Option<Notification>,
    next_notification_id: u64,
    next_document_id: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            dob: String::new(),
            residential_address: Address::default(),
            same_address: false,
            permanent_address: Address::default(),
            documents: vec![DocumentEntry::new(0)],
            errors: FormErrors::default(),
            phase: SubmissionPhase::Editing,
            notification: None,
            next_notification_id: 0,
            next_document_id: 1,
        }
    }
}

impl FormState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::UpdateField(field, value) => self.set_field(field, value),
            FormAction::SetSameAddress(same) => self.set_same_address(same),

            FormAction::AddDocument => self.add_document(),
            FormAction::RemoveDocument(index) => self.remove_document(index),
            FormAction::SetDocumentName(index, name) => {
                if let Some(document) = self.documents.get_mut(index) {
                    document.file_name = name;
                }
            }
            FormAction::SetDocumentType(index, file_type) => {
                if let Some(document) = self.documents.get_mut(index) {
                    document.file_type = file_type;
                }
            }
            FormAction::SetDocumentFile(index, file) => {
                if let Some(document) = self.documents.get_mut(index) {
                    document.file = file;
                }
            }

            FormAction::SetErrors(errors) => {
                self.errors = errors;
            }
            FormAction::SetPhase(phase) => {
                debug!(from = ?self.phase, to = ?phase, "submission phase change");
                self.phase = phase;
            }
            FormAction::SubmissionSucceeded => {
                let notification = self.next_notification(NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE);
                // Fresh row id so the emptied upload row remounts its file input
                let first_document = DocumentEntry::new(self.next_document_id);
                *self = FormState {
                    documents: vec![first_document],
                    notification: Some(notification),
                    next_notification_id: self.next_notification_id,
                    next_document_id: self.next_document_id + 1,
                    ..FormState::default()
                };
            }
            FormAction::SubmissionFailed(reason) => {
                debug!(%reason, "submission failed, keeping entered data");
                self.notification = Some(self.next_notification(NotificationKind::Error, SUBMIT_ERROR_MESSAGE));
                self.phase = SubmissionPhase::Failed;
            }
            FormAction::DismissNotification(id) => {
                if self.notification.as_ref().is_some_and(|n| n.id == id) {
                    self.notification = None;
                }
            }
        }
    }

    /// Applies a raw input event by input name. Unknown names are ignored.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<FormField>() {
            Ok(field) => self.set_field(field, value.into()),
            Err(e) => debug!("ignoring input event: {}", e),
        }
    }

    fn set_field(&mut self, field: FormField, value: String) {
        if self.phase == SubmissionPhase::Failed {
            self.phase = SubmissionPhase::Editing;
        }

        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Dob => self.dob = value,
            FormField::Residential(line) => {
                *self.residential_address.line_mut(line) = value;
                if self.same_address {
                    self.permanent_address = self.residential_address.clone();
                }
            }
            FormField::Permanent(line) => {
                // Permanent inputs are locked while mirroring the residential address
                if !self.same_address {
                    *self.permanent_address.line_mut(line) = value;
                }
            }
            FormField::SameAddress => {
                self.set_same_address(matches!(value.as_str(), "true" | "on" | "checked"));
            }
        }
    }

    pub fn set_same_address(&mut self, same: bool) {
        self.same_address = same;
        if same {
            self.permanent_address = self.residential_address.clone();
        } else {
            self.permanent_address.clear();
        }
    }

    pub fn add_document(&mut self) {
        let id = self.next_document_id;
        self.next_document_id += 1;
        self.documents.push(DocumentEntry::new(id));
    }

    /// Removes a document entry; the first entry always stays
    pub fn remove_document(&mut self, index: usize) {
        if index == 0 || index >= self.documents.len() {
            return;
        }
        self.documents.remove(index);
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Address sent as the permanent one
    pub fn effective_permanent_address(&self) -> &Address {
        if self.same_address {
            &self.residential_address
        } else {
            &self.permanent_address
        }
    }

    fn next_notification(&mut self, kind: NotificationKind, message: &str) -> Notification {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        Notification {
            id,
            kind,
            message: message.to_string(),
        }
    }
}
