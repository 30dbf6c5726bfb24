use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::payload::MultipartPayload;
use super::types::SubmitResponse;
use crate::services::config::FormConfig;
use crate::services::errors::{SubmissionError, SubmissionResult};

/// Sends a finished payload somewhere and reports the server's verdict.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait FormSubmitter {
    async fn submit(&self, payload: MultipartPayload) -> SubmissionResult<SubmitResponse>;
}

/// Posts the payload as `multipart/form-data` to the configured endpoint
#[derive(Clone)]
pub struct HttpFormSubmitter {
    http_client: Client,
    endpoint: String,
}

impl HttpFormSubmitter {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: config.submit_endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl FormSubmitter for HttpFormSubmitter {
    #[instrument(skip_all, err)]
    async fn submit(&self, payload: MultipartPayload) -> SubmissionResult<SubmitResponse> {
        let file_count = payload.files().count();
        let form = payload.into_form()?;

        // reqwest sets the multipart content type together with its boundary
        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Network {
                message: format!("Failed to submit form: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Submission endpoint returned {}", status);
            return Err(SubmissionError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| SubmissionError::Network {
            message: format!("Failed to read response body: {}", e),
        })?;
        let reply = parse_submit_response(&body)?;

        info!(success = reply.success, file_count, endpoint = %self.endpoint, "form submission answered");
        Ok(reply)
    }
}

pub fn parse_submit_response(body: &str) -> SubmissionResult<SubmitResponse> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DocumentEntry, DocumentType, FormState, UploadedFile};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SUBMIT_PATH: &str = "/api/form/submit";

    fn payload() -> MultipartPayload {
        let mut state = FormState::default();
        state.update_field("firstName", "Ada");
        state.documents = vec![DocumentEntry {
            file_name: "passport".to_string(),
            file_type: Some(DocumentType::Pdf),
            file: Some(UploadedFile::new("passport.pdf", b"%PDF".to_vec())),
            ..DocumentEntry::default()
        }];
        MultipartPayload::from_state(&state).unwrap()
    }

    async fn submitter_replying(response: ResponseTemplate) -> (MockServer, HttpFormSubmitter) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SUBMIT_PATH))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;

        let config = FormConfig::default().with_endpoint(format!("{}{}", server.uri(), SUBMIT_PATH));
        (server, HttpFormSubmitter::new(&config))
    }

    #[tokio::test]
    async fn test_server_error_status_is_reported() {
        let (_server, submitter) = submitter_replying(ResponseTemplate::new(500)).await;

        let result = submitter.submit(payload()).await;

        assert_eq!(result, Err(SubmissionError::Server { status: 500 }));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_invalid_response() {
        let (_server, submitter) =
            submitter_replying(ResponseTemplate::new(200).set_body_string("<html>ok</html>")).await;

        let result = submitter.submit(payload()).await;

        assert!(matches!(result, Err(SubmissionError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_json_reply_is_decoded() {
        let (_server, submitter) = submitter_replying(
            ResponseTemplate::new(200).set_body_raw(r#"{"success":true}"#, "application/json"),
        )
        .await;

        let result = submitter.submit(payload()).await;

        assert_eq!(result, Ok(SubmitResponse::accepted()));
    }

    #[test]
    fn test_parse_submit_response() {
        assert_eq!(
            parse_submit_response(r#"{"success":true}"#),
            Ok(SubmitResponse::accepted())
        );
        assert_eq!(
            parse_submit_response(r#"{"success":false,"message":"duplicate email","id":7}"#),
            Ok(SubmitResponse::rejected("duplicate email"))
        );
        assert!(matches!(
            parse_submit_response("<html>502</html>"),
            Err(SubmissionError::InvalidResponse { .. })
        ));
        assert!(parse_submit_response(r#"{"message":"no flag"}"#).is_err());
    }

    #[test]
    fn test_http_submitter_uses_configured_endpoint() {
        let config = FormConfig::default().with_endpoint("https://forms.example.com/submit");
        let submitter = HttpFormSubmitter::new(&config);
        assert_eq!(submitter.endpoint(), "https://forms.example.com/submit");
    }
}
