//! Errors surfaced by [`crate::checker::ContentChecker`].

use ai_llm_service::AiLlmError;
use services::web_page::FetchError;
use thiserror::Error;

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Wrong media type, missing field, blank input.
    #[error("{0}")]
    InvalidInput(String),

    /// The URL to classify could not be fetched.
    #[error("Could not fetch the URL: {0}")]
    UpstreamFetch(#[from] FetchError),

    /// The generative model call failed.
    #[error("Error generating content from Gemini: {0}")]
    ModelInvocation(#[from] AiLlmError),
}

impl CheckError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CheckError::InvalidInput(msg.into())
    }

    /// `true` when the caller (not the service) is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckError::InvalidInput(_) | CheckError::UpstreamFetch(_)
        )
    }
}
