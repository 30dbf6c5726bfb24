use thiserror::Error;

/// Failures of the outbound submission request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server responded with status {status}")]
    Server { status: u16 },

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },

    #[error("Submission rejected: {message}")]
    Rejected { message: String },

    #[error("Document {index} has no file attached")]
    MissingFile { index: usize },

    #[error("Invalid part {field}: {message}")]
    InvalidPart { field: String, message: String },
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

impl SubmissionError {
    /// Whether the request ever reached the server
    pub fn is_transport(&self) -> bool {
        matches!(self, SubmissionError::Network { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SubmissionError::Network { .. } => ErrorSeverity::Low,
            SubmissionError::Server { status } if *status >= 500 => ErrorSeverity::High,
            SubmissionError::MissingFile { .. } | SubmissionError::InvalidPart { .. } => {
                ErrorSeverity::High
            }
            _ => ErrorSeverity::Medium,
        }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(error: serde_json::Error) -> Self {
        SubmissionError::InvalidResponse {
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
