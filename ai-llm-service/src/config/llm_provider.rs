/// Represents the provider (backend) used for generative model inference.
///
/// Only Google Gemini is wired today; new providers are added by extending
/// this enum and implementing [`crate::generative_model::GenerativeModel`]
/// for their service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Gemini `generateContent` API (multimodal).
    Gemini,
}
