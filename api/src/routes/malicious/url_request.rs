use serde::Deserialize;

/// Form payload for /api/v1/check-url-malicious-intent.
#[derive(Debug, Deserialize)]
pub struct UrlForm {
    /// Page to classify. Blank is rejected by the checker.
    #[serde(default)]
    pub url: String,
}
