//! Provider-agnostic seam for multimodal text generation.
//!
//! Callers build a [`GenerateRequest`] (prompt plus an optional inline image)
//! and hand it to any [`GenerativeModel`]. The application holds the model as
//! `Arc<dyn GenerativeModel>` so tests can swap in a scripted fake.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error_handler::AiLlmError;

/// Raw image bytes plus the media type declared by the uploader.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// Declared media type, e.g. `image/png`.
    pub mime_type: String,
    pub bytes: Bytes,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// A single, non-streaming generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
}

impl GenerateRequest {
    /// Text-only request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    /// Attaches an image to the request.
    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// Anything that turns a prompt (and optional image) into free text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Runs one generation and returns the model's raw reply text.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] for transport, status, or decoding failures.
    async fn generate(&self, request: GenerateRequest) -> Result<String, AiLlmError>;

    /// Short provider/model label for logs.
    fn describe(&self) -> String;
}
