//! Instructions sent to the model, one per check kind.
//!
//! Every prompt ends with the same output-format sentence so the decoder's
//! anchors line up with what the model is asked to emit.

use std::fmt;

/// The four checks the service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Product or listing image: scam or real.
    Scam,
    /// Product image: fake or genuine.
    Authenticity,
    /// Free text and/or image: malicious or not.
    MaliciousContent,
    /// Web page behind a URL: malicious or not.
    MaliciousUrl,
}

impl CheckKind {
    /// The closed label set the model is asked to choose from.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            CheckKind::Scam => ("Scam", "Real"),
            CheckKind::Authenticity => ("Fake", "Genuine"),
            CheckKind::MaliciousContent | CheckKind::MaliciousUrl => ("Malicious", "Not Malicious"),
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckKind::Scam => "scam",
            CheckKind::Authenticity => "authenticity",
            CheckKind::MaliciousContent => "malicious-content",
            CheckKind::MaliciousUrl => "malicious-url",
        };
        f.write_str(s)
    }
}

fn output_format(kind: CheckKind) -> String {
    let (a, b) = kind.labels();
    format!(
        "Output your response in a clear, easy-to-read format, starting with 'Assessment: ' \
         (either '{a}' or '{b}'), then 'Reasoning: ', and finally 'ConfidenceScore: ' \
         (a number from 1-100)."
    )
}

pub fn scam_prompt() -> String {
    format!(
        "Analyze this image of a product or product listing. \
         Based on visual cues, common sense, and general knowledge, \
         determine if the product appears to be a scam or if it can genuinely do what it claims. \
         Provide a concise assessment and explain your reasoning. \
         Focus on whether the product's claims seem plausible or exaggerated/deceptive. \
         {}",
        output_format(CheckKind::Scam)
    )
}

pub fn authenticity_prompt() -> String {
    format!(
        "Analyze this image of a product. \
         Based on visual cues, branding, packaging, and general knowledge, \
         determine if this product appears to be a genuine/official version or a fake/unofficial one. \
         Provide a concise assessment and explain your reasoning. \
         Focus on details that indicate authenticity or lack thereof, such as logos, quality, and design. \
         {}",
        output_format(CheckKind::Authenticity)
    )
}

/// `text` and `has_image` describe what the user submitted; at least one is present.
pub fn malicious_content_prompt(text: Option<&str>, has_image: bool) -> String {
    let subject = match (text, has_image) {
        (Some(_), true) => "the following text and the attached image",
        (Some(_), false) => "the following text",
        (None, _) => "the attached image",
    };

    let mut prompt = format!(
        "Analyze {subject}. \
         Determine if the content is malicious, e.g. phishing, fraud, social engineering, \
         impersonation, malware distribution, or harassment, or if it is benign. \
         Provide a concise assessment and explain your reasoning, pointing at the concrete \
         signals you relied on. \
         {}",
        output_format(CheckKind::MaliciousContent)
    );

    if let Some(text) = text {
        prompt.push_str("\n\nText to analyze:\n---\n");
        prompt.push_str(text);
        prompt.push_str("\n---");
    }
    prompt
}

/// Built from the page's visible text when there is any, else from the URL alone.
pub fn malicious_url_prompt(url: &str, page_text: Option<&str>) -> String {
    match page_text {
        Some(text) => format!(
            "Analyze the following text extracted from the web page at {url}. \
             Determine if the page shows malicious intent, e.g. phishing, credential harvesting, \
             fake shops, fraud, or malware distribution, or if it is benign. \
             Provide a concise assessment and explain your reasoning. \
             {}\n\nPage text:\n---\n{text}\n---",
            output_format(CheckKind::MaliciousUrl)
        ),
        None => format!(
            "Analyze this URL: {url}. \
             No readable text could be extracted from the page, so judge from the URL itself: \
             domain, spelling, look-alike brands, suspicious paths or parameters. \
             Determine if it shows malicious intent or if it is benign. \
             Provide a concise assessment and explain your reasoning. \
             {}",
            output_format(CheckKind::MaliciousUrl)
        ),
    }
}
