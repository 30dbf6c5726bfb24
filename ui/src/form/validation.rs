use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

use super::types::{DocumentEntry, FormState};
use crate::services::config::FormConfig;
use crate::utils::validation::{is_blank, is_valid_email};

/// Format of the `dob` value produced by a date input
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Field an inline validation message is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    FirstName,
    LastName,
    Email,
    Dob,
    ResidentialStreet1,
    ResidentialStreet2,
    PermanentStreet1,
    PermanentStreet2,
    Documents,
    DocumentFileName(usize),
    DocumentFileType(usize),
    DocumentFile(usize),
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKey::FirstName => f.write_str("firstName"),
            ErrorKey::LastName => f.write_str("lastName"),
            ErrorKey::Email => f.write_str("email"),
            ErrorKey::Dob => f.write_str("dob"),
            ErrorKey::ResidentialStreet1 => f.write_str("street1"),
            ErrorKey::ResidentialStreet2 => f.write_str("street2"),
            ErrorKey::PermanentStreet1 => f.write_str("permanentStreet1"),
            ErrorKey::PermanentStreet2 => f.write_str("permanentStreet2"),
            ErrorKey::Documents => f.write_str("documents"),
            ErrorKey::DocumentFileName(index) => write!(f, "documents_{}_fileName", index),
            ErrorKey::DocumentFileType(index) => write!(f, "documents_{}_fileType", index),
            ErrorKey::DocumentFile(index) => write!(f, "documents_{}_file", index),
        }
    }
}

/// Inline validation messages keyed by field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ErrorKey, String>);

impl FormErrors {
    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Owned copy of a message, convenient for component props
    pub fn message(&self, key: ErrorKey) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: FormErrors,
}

/// Validates the whole form; `today` anchors the age rule
pub fn validate_on(state: &FormState, config: &FormConfig, today: NaiveDate) -> ValidationReport {
    let mut errors = FormErrors::default();

    if is_blank(&state.first_name) {
        errors.insert(ErrorKey::FirstName, "First Name is required");
    }
    if is_blank(&state.last_name) {
        errors.insert(ErrorKey::LastName, "Last Name is required");
    }
    if is_blank(&state.email) {
        errors.insert(ErrorKey::Email, "Email is required");
    } else if !is_valid_email(&state.email) {
        errors.insert(ErrorKey::Email, "Please enter a valid email address");
    }

    if let Some(message) = dob_error(&state.dob, config.minimum_age, today) {
        errors.insert(ErrorKey::Dob, message);
    }

    if is_blank(&state.residential_address.street1) {
        errors.insert(ErrorKey::ResidentialStreet1, "Residential Street 1 is required");
    }
    if is_blank(&state.residential_address.street2) {
        errors.insert(ErrorKey::ResidentialStreet2, "Residential Street 2 is required");
    }
    if !state.same_address {
        if is_blank(&state.permanent_address.street1) {
            errors.insert(ErrorKey::PermanentStreet1, "Permanent Street 1 is required");
        }
        if is_blank(&state.permanent_address.street2) {
            errors.insert(ErrorKey::PermanentStreet2, "Permanent Street 2 is required");
        }
    }

    if state.documents.len() < config.minimum_documents {
        errors.insert(
            ErrorKey::Documents,
            format!(
                "At least {} documents are required",
                count_word(config.minimum_documents)
            ),
        );
    }
    for (index, document) in state.documents.iter().enumerate() {
        document_errors(index, document, &mut errors);
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Age is the difference between calendar years, so the birthday itself is not considered
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - dob.year()
}

fn dob_error(dob: &str, minimum_age: u32, today: NaiveDate) -> Option<String> {
    let dob = dob.trim();
    if dob.is_empty() {
        return Some("Date of Birth is required".to_string());
    }

    let Ok(date) = NaiveDate::parse_from_str(dob, DOB_FORMAT) else {
        return Some("Please enter a valid date of birth".to_string());
    };

    if age_in_years(date, today) < minimum_age as i32 {
        Some(format!("You must be at least {} years old", minimum_age))
    } else {
        None
    }
}

fn document_errors(index: usize, document: &DocumentEntry, errors: &mut FormErrors) {
    if is_blank(&document.file_name) {
        errors.insert(ErrorKey::DocumentFileName(index), "File Name is required");
    }
    if document.file_type.is_none() {
        errors.insert(ErrorKey::DocumentFileType(index), "File Type is required");
    }

    match (&document.file, document.file_type) {
        (None, _) => errors.insert(ErrorKey::DocumentFile(index), "File is required"),
        (Some(file), Some(file_type)) if !file_type.accepts(&file.content_type) => errors.insert(
            ErrorKey::DocumentFile(index),
            format!("File must be of type {}", file_type),
        ),
        _ => {}
    }
}

fn count_word(count: usize) -> String {
    match count {
        1 => "one".to_string(),
        2 => "two".to_string(),
        3 => "three".to_string(),
        n => n.to_string(),
    }
}
