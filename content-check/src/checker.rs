//! The four checks: build the instruction, call the model, decode the reply.

use std::sync::Arc;

use ai_llm_service::{GenerateRequest, GenerativeModel, InlineImage};
use services::web_page::PageFetcher;
use tracing::{debug, info, instrument};

use crate::{
    decoder::decode_reply,
    errors::{CheckError, CheckResult},
    prompts::{self, CheckKind},
    result::ClassificationResult,
};

pub const INVALID_IMAGE_MSG: &str = "Invalid file type. Please upload an image.";
pub const MISSING_CONTENT_MSG: &str = "Please provide text or an image to analyze.";
pub const MISSING_URL_MSG: &str = "Please provide a URL to analyze.";

/// Runs classification requests against a generative model.
///
/// Stateless apart from the shared clients, so one instance serves every request.
#[derive(Clone)]
pub struct ContentChecker {
    model: Arc<dyn GenerativeModel>,
    fetcher: PageFetcher,
}

impl ContentChecker {
    pub fn new(model: Arc<dyn GenerativeModel>, fetcher: PageFetcher) -> Self {
        Self { model, fetcher }
    }

    /// Scam or real, judged from a product/listing image.
    pub async fn classify_scam(&self, image: InlineImage) -> CheckResult<ClassificationResult> {
        ensure_image(&image)?;
        let request = GenerateRequest::text(prompts::scam_prompt()).with_image(image);
        self.run(CheckKind::Scam, request).await
    }

    /// Fake or genuine, judged from a product image.
    pub async fn verify_authenticity(
        &self,
        image: InlineImage,
    ) -> CheckResult<ClassificationResult> {
        ensure_image(&image)?;
        let request = GenerateRequest::text(prompts::authenticity_prompt()).with_image(image);
        self.run(CheckKind::Authenticity, request).await
    }

    /// Malicious or not, judged from free text, an image, or both.
    ///
    /// Blank text counts as absent.
    pub async fn classify_malicious(
        &self,
        text: Option<String>,
        image: Option<InlineImage>,
    ) -> CheckResult<ClassificationResult> {
        let text = text.filter(|t| !t.trim().is_empty());

        if text.is_none() && image.is_none() {
            return Err(CheckError::invalid_input(MISSING_CONTENT_MSG));
        }
        if let Some(image) = &image {
            ensure_image(image)?;
        }

        let prompt = prompts::malicious_content_prompt(text.as_deref(), image.is_some());
        let request = GenerateRequest { prompt, image };
        self.run(CheckKind::MaliciousContent, request).await
    }

    /// Malicious or not, judged from the page behind `url` (or the URL itself
    /// when the page has no readable text).
    pub async fn classify_url(&self, url: &str) -> CheckResult<ClassificationResult> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CheckError::invalid_input(MISSING_URL_MSG));
        }

        let page_text = self.fetcher.fetch_visible_text(url).await?;
        debug!(%url, text_len = page_text.len(), "page text extracted");

        let page_text = Some(page_text.as_str()).filter(|t| !t.trim().is_empty());
        let prompt = prompts::malicious_url_prompt(url, page_text);
        self.run(CheckKind::MaliciousUrl, GenerateRequest::text(prompt)).await
    }

    #[instrument(level = "debug", skip_all, fields(check = %kind, model = %self.model.describe()))]
    async fn run(
        &self,
        kind: CheckKind,
        request: GenerateRequest,
    ) -> CheckResult<ClassificationResult> {
        let raw = self.model.generate(request).await?;
        let result = decode_reply(&raw);

        info!(
            check = %kind,
            assessment = %result.assessment,
            confidence = result.confidence_score,
            "classification completed"
        );
        Ok(result)
    }
}

/// Only the declared media type is checked; the bytes go to the model as-is.
fn ensure_image(image: &InlineImage) -> CheckResult<()> {
    if image.mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(CheckError::invalid_input(INVALID_IMAGE_MSG))
    }
}
