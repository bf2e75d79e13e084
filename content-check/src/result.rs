use serde::{Deserialize, Serialize};

/// Structured verdict extracted from one model reply.
///
/// `confidence_score == 0` means "not determinable", not "0% confident".
/// Use [`ClassificationResult::confidence`] to read it safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "Assessment")]
    pub assessment: String,
    #[serde(rename = "Reasoning")]
    pub reasoning: String,
    /// Always within `0..=100`.
    #[serde(rename = "ConfidenceScore")]
    pub confidence_score: u8,
}

impl ClassificationResult {
    /// Self-reported confidence, or `None` when the reply did not carry a usable score.
    pub fn confidence(&self) -> Option<u8> {
        (self.confidence_score > 0).then_some(self.confidence_score)
    }
}
