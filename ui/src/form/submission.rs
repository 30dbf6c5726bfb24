use chrono::NaiveDate;
use tracing::{error, info};

use super::types::{FormAction, FormState, SubmissionPhase};
use super::validation::validate_on;
use crate::services::client::{FormSubmitter, MultipartPayload};
use crate::services::config::FormConfig;
use crate::services::errors::{SubmissionError, SubmissionResult};

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is already in flight; the attempt was ignored
    AlreadySubmitting,
    /// Validation failed and errors were stored on the state
    Invalid,
    Submitted,
    Failed(SubmissionError),
}

impl FormState {
    /// Runs validation and, when it passes, moves into `Submitting` and
    /// returns the payload to send.
    pub fn begin_submission(
        &mut self,
        config: &FormConfig,
        today: NaiveDate,
    ) -> Result<MultipartPayload, SubmitOutcome> {
        if self.is_submitting() {
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        self.reduce_in_place(FormAction::SetPhase(SubmissionPhase::Validating));
        let report = validate_on(self, config, today);
        self.reduce_in_place(FormAction::SetErrors(report.errors));
        if !report.is_valid {
            self.reduce_in_place(FormAction::SetPhase(SubmissionPhase::Editing));
            return Err(SubmitOutcome::Invalid);
        }

        match MultipartPayload::from_state(self) {
            Ok(payload) => {
                self.reduce_in_place(FormAction::SetPhase(SubmissionPhase::Submitting));
                Ok(payload)
            }
            Err(e) => {
                self.reduce_in_place(FormAction::SubmissionFailed(e.to_string()));
                Err(SubmitOutcome::Failed(e))
            }
        }
    }
}

/// Sends the payload once. A reply without the success flag counts as a failure.
pub async fn deliver<S>(submitter: &S, payload: MultipartPayload) -> SubmissionResult<()>
where
    S: FormSubmitter + ?Sized,
{
    let reply = submitter.submit(payload).await?;
    if reply.success {
        Ok(())
    } else {
        Err(SubmissionError::Rejected {
            message: reply
                .message
                .unwrap_or_else(|| "server reported failure".to_string()),
        })
    }
}

/// Action that closes a submission with the given result
pub fn completion_action(result: &SubmissionResult<()>) -> FormAction {
    match result {
        Ok(()) => {
            info!("form submitted successfully");
            FormAction::SubmissionSucceeded
        }
        Err(e) => {
            error!(
                severity = ?e.severity(),
                transport = e.is_transport(),
                "error submitting form: {}",
                e
            );
            FormAction::SubmissionFailed(e.to_string())
        }
    }
}

/// Whole submit flow on an owned state: validate, send, then reset or keep the data
pub async fn submit<S>(
    state: &mut FormState,
    submitter: &S,
    config: &FormConfig,
    today: NaiveDate,
) -> SubmitOutcome
where
    S: FormSubmitter + ?Sized,
{
    let payload = match state.begin_submission(config, today) {
        Ok(payload) => payload,
        Err(outcome) => return outcome,
    };

    let result = deliver(submitter, payload).await;
    state.reduce_in_place(completion_action(&result));

    match result {
        Ok(()) => SubmitOutcome::Submitted,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::types::{DocumentEntry, DocumentType, NotificationKind, UploadedFile};
    use crate::form::validation::ErrorKey;
    use crate::services::client::{PayloadPart, SubmitResponse};
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct MockSubmitter {
        reply: SubmissionResult<SubmitResponse>,
        sent: RefCell<Vec<MultipartPayload>>,
    }

    impl MockSubmitter {
        fn replying(reply: SubmissionResult<SubmitResponse>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormSubmitter for MockSubmitter {
        async fn submit(&self, payload: MultipartPayload) -> SubmissionResult<SubmitResponse> {
            self.sent.borrow_mut().push(payload);
            self.reply.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn filled_state() -> FormState {
        let mut state = FormState::default();
        state.update_field("firstName", "Ada");
        state.update_field("lastName", "Lovelace");
        state.update_field("email", "ada@example.com");
        state.update_field("dob", "1990-12-10");
        state.update_field("residentialStreet1", "12 St James's Square");
        state.update_field("residentialStreet2", "London");
        state.update_field("sameAddress", "true");
        state.documents = vec![
            DocumentEntry {
                file_name: "passport".to_string(),
                file_type: Some(DocumentType::Pdf),
                file: Some(UploadedFile::new("passport.pdf", b"%PDF".to_vec())),
                ..DocumentEntry::default()
            },
            DocumentEntry {
                file_name: "licence".to_string(),
                file_type: Some(DocumentType::Jpg),
                file: Some(UploadedFile::new("licence.jpeg", b"\xff\xd8".to_vec())),
                ..DocumentEntry::new(1)
            },
        ];
        state
    }

    #[tokio::test]
    async fn test_successful_submit_resets_state() {
        let submitter = MockSubmitter::replying(Ok(SubmitResponse::accepted()));
        let mut state = filled_state();

        let outcome = submit(&mut state, &submitter, &FormConfig::default(), today()).await;

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(submitter.sent.borrow().len(), 1);
        assert_eq!(state.first_name, "");
        assert!(!state.same_address);
        assert_eq!(state.documents.len(), 1);
        assert_eq!(state.documents[0].file_name, "");
        assert!(state.documents[0].file.is_none());
        assert_eq!(state.phase, SubmissionPhase::Editing);
        assert_eq!(
            state.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[tokio::test]
    async fn test_transport_failure_preserves_data() {
        let submitter = MockSubmitter::replying(Err(SubmissionError::Network {
            message: "connection refused".to_string(),
        }));
        let mut state = filled_state();
        let before = state.clone();

        let outcome = submit(&mut state, &submitter, &FormConfig::default(), today()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmissionError::Network { .. })));
        assert_eq!(state.first_name, before.first_name);
        assert_eq!(state.documents, before.documents);
        assert_eq!(state.residential_address, before.residential_address);
        assert_eq!(state.phase, SubmissionPhase::Failed);
        assert_eq!(
            state.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[tokio::test]
    async fn test_success_flag_false_is_a_failure() {
        let submitter = MockSubmitter::replying(Ok(SubmitResponse::rejected("duplicate")));
        let mut state = filled_state();

        let outcome = submit(&mut state, &submitter, &FormConfig::default(), today()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmissionError::Rejected {
                message: "duplicate".to_string()
            })
        );
        assert_eq!(state.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let submitter = MockSubmitter::replying(Ok(SubmitResponse::accepted()));
        let mut state = filled_state();
        state.documents.truncate(1);

        let outcome = submit(&mut state, &submitter, &FormConfig::default(), today()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(submitter.sent.borrow().is_empty());
        assert!(state.errors.contains(ErrorKey::Documents));
        assert_eq!(state.phase, SubmissionPhase::Editing);
        assert!(state.notification.is_none());
    }

    #[tokio::test]
    async fn test_sent_payload_mirrors_residential_address() {
        let submitter = MockSubmitter::replying(Ok(SubmitResponse::accepted()));
        let mut state = filled_state();

        submit(&mut state, &submitter, &FormConfig::default(), today()).await;

        let sent = submitter.sent.borrow();
        assert_eq!(sent[0].text("permanentAddress[street1]"), Some("12 St James's Square"));
        let file_names: Vec<&str> = sent[0]
            .files()
            .filter_map(|part| match part {
                PayloadPart::File { file_name, .. } => Some(file_name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(file_names, vec!["passport.pdf", "licence.jpeg"]);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut state = filled_state();

        let payload = state.begin_submission(&FormConfig::default(), today());
        assert!(payload.is_ok());
        assert!(state.is_submitting());

        assert_eq!(
            state.begin_submission(&FormConfig::default(), today()).err(),
            Some(SubmitOutcome::AlreadySubmitting)
        );
    }

    #[test]
    fn test_resubmit_clears_previous_errors() {
        let mut state = filled_state();
        state.update_field("firstName", "");
        assert_eq!(
            state.begin_submission(&FormConfig::default(), today()).err(),
            Some(SubmitOutcome::Invalid)
        );
        assert!(state.errors.contains(ErrorKey::FirstName));

        state.update_field("firstName", "Ada");
        assert!(state.begin_submission(&FormConfig::default(), today()).is_ok());
        assert!(state.errors.is_empty());
    }
}
