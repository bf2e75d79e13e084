//! Turns the model's free-text reply into a [`ClassificationResult`].
//!
//! The prompts ask the model to answer as
//!
//! ```text
//! Assessment: <label>
//! Reasoning: <text>
//! ConfidenceScore: <1-100>
//! ```
//!
//! and this module pulls the three fields back out by anchor literal. It never
//! fails: anything that does not match degrades to fallback values.

use crate::result::ClassificationResult;

pub const ASSESSMENT_ANCHOR: &str = "Assessment:";
pub const REASONING_ANCHOR: &str = "Reasoning:";
pub const CONFIDENCE_ANCHOR: &str = "ConfidenceScore:";

/// Placeholder for a field the reply did not contain.
pub const NOT_AVAILABLE: &str = "N/A";
/// Assessment used when no anchor at all was found.
pub const UNPARSED_ASSESSMENT: &str = "Could not parse assessment.";

/// Decodes one raw reply. Anchors are case-sensitive; first matching rule wins:
///
/// 1. all three anchors: assessment before `Reasoning:`, reasoning up to
///    `ConfidenceScore:`, integer score after it;
/// 2. only `Assessment:` (possibly with one other anchor): whole text is the assessment;
/// 3. only `Reasoning:`: whole text is the reasoning;
/// 4. none: fallback assessment, raw reply as reasoning.
pub fn decode_reply(raw: &str) -> ClassificationResult {
    let has_assessment = raw.contains(ASSESSMENT_ANCHOR);
    let has_reasoning = raw.contains(REASONING_ANCHOR);
    let has_confidence = raw.contains(CONFIDENCE_ANCHOR);

    if has_assessment && has_reasoning && has_confidence {
        if let Some(result) = decode_full(raw) {
            return result;
        }
    }

    if has_assessment {
        return ClassificationResult {
            assessment: raw.replace(ASSESSMENT_ANCHOR, "").trim().to_string(),
            reasoning: NOT_AVAILABLE.to_string(),
            confidence_score: 0,
        };
    }

    if has_reasoning {
        return ClassificationResult {
            assessment: NOT_AVAILABLE.to_string(),
            reasoning: raw.replace(REASONING_ANCHOR, "").trim().to_string(),
            confidence_score: 0,
        };
    }

    ClassificationResult {
        assessment: UNPARSED_ASSESSMENT.to_string(),
        reasoning: raw.to_string(),
        confidence_score: 0,
    }
}

/// Rule 1. Returns `None` only when `ConfidenceScore:` occurs solely before
/// `Reasoning:`, which the caller then treats like a reply without it.
fn decode_full(raw: &str) -> Option<ClassificationResult> {
    let (head, tail) = raw.split_once(REASONING_ANCHOR)?;
    let (reasoning, score) = tail.split_once(CONFIDENCE_ANCHOR)?;

    Some(ClassificationResult {
        assessment: head.replace(ASSESSMENT_ANCHOR, "").trim().to_string(),
        reasoning: reasoning.trim().to_string(),
        confidence_score: parse_confidence(score),
    })
}

/// Base-10 integer in `0..=100`; anything else is "unknown" (0).
fn parse_confidence(text: &str) -> u8 {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|v| (0..=100).contains(v))
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(assessment: &str, reasoning: &str, score: u8) -> ClassificationResult {
        ClassificationResult {
            assessment: assessment.into(),
            reasoning: reasoning.into(),
            confidence_score: score,
        }
    }

    #[test]
    fn well_formed_reply() {
        let got = decode_reply("Assessment: Scam\nReasoning: Price too low\nConfidenceScore: 87");
        assert_eq!(got, result("Scam", "Price too low", 87));
        assert_eq!(got.confidence(), Some(87));
    }

    #[test]
    fn surrounding_noise_and_multiline_reasoning_are_kept_verbatim() {
        let raw = "  Assessment:   Not Malicious \n\nReasoning:\n- looks fine\n- known brand\n\nConfidenceScore:  +42 \n";
        assert_eq!(
            decode_reply(raw),
            result("Not Malicious", "- looks fine\n- known brand", 42)
        );
    }

    #[test]
    fn markdown_prefixes_end_up_in_assessment() {
        // Whatever sits around the anchor is accepted as-is, including markup.
        let got = decode_reply("**Assessment:** Real\nReasoning: ok\nConfidenceScore: 10");
        assert_eq!(got.assessment, "**** Real");
    }

    #[test]
    fn only_assessment() {
        assert_eq!(decode_reply("Assessment: Real"), result("Real", "N/A", 0));
    }

    #[test]
    fn only_reasoning() {
        assert_eq!(
            decode_reply("Reasoning: cannot see the product"),
            result("N/A", "cannot see the product", 0)
        );
    }

    #[test]
    fn assessment_and_reasoning_without_score_take_assessment_branch() {
        let got = decode_reply("Assessment: Fake\nReasoning: blurry logo");
        assert_eq!(got, result("Fake\nReasoning: blurry logo", "N/A", 0));
    }

    #[test]
    fn no_anchors_falls_back_to_raw_text() {
        assert_eq!(
            decode_reply("garbled nonsense"),
            result("Could not parse assessment.", "garbled nonsense", 0)
        );
    }

    #[test]
    fn empty_reply() {
        assert_eq!(decode_reply(""), result(UNPARSED_ASSESSMENT, "", 0));
    }

    #[test]
    fn unparsable_or_out_of_range_score_is_unknown() {
        for tail in ["high", "87%", "", "8.5", "-3", "101", "99999999999999999999"] {
            let raw = format!("Assessment: Scam\nReasoning: r\nConfidenceScore: {tail}");
            let got = decode_reply(&raw);
            assert_eq!(got.confidence_score, 0, "tail {tail:?}");
            assert_eq!(got.confidence(), None);
            assert_eq!(got.assessment, "Scam");
            assert_eq!(got.reasoning, "r");
        }
    }

    #[test]
    fn boundary_scores() {
        let zero = decode_reply("Assessment: A\nReasoning: r\nConfidenceScore: 0");
        assert_eq!(zero.confidence_score, 0);
        let hundred = decode_reply("Assessment: A\nReasoning: r\nConfidenceScore: 100");
        assert_eq!(hundred.confidence_score, 100);
    }

    #[test]
    fn splits_on_first_occurrences() {
        let raw = "Assessment: Scam\nReasoning: says Reasoning: twice\nConfidenceScore: 5\nConfidenceScore: 9";
        let got = decode_reply(raw);
        assert_eq!(got.reasoning, "says Reasoning: twice");
        // "5\nConfidenceScore: 9" is not an integer.
        assert_eq!(got.confidence_score, 0);
    }

    #[test]
    fn score_before_reasoning_degrades_to_assessment_branch() {
        let raw = "ConfidenceScore: 80\nAssessment: Real\nReasoning: fine";
        let got = decode_reply(raw);
        assert_eq!(got.assessment, "ConfidenceScore: 80\n Real\nReasoning: fine");
        assert_eq!(got.reasoning, NOT_AVAILABLE);
        assert_eq!(got.confidence_score, 0);
    }

    #[test]
    fn anchors_are_case_sensitive() {
        let got = decode_reply("assessment: scam\nreasoning: r\nconfidencescore: 5");
        assert_eq!(got.assessment, UNPARSED_ASSESSMENT);
    }

    #[test]
    fn decoding_fallback_output_is_stable() {
        let first = decode_reply("garbled nonsense");
        let second = decode_reply(&first.reasoning);
        assert_eq!(first, second);

        let third = decode_reply(&second.assessment);
        assert_eq!(third.assessment, UNPARSED_ASSESSMENT);
        assert_eq!(third.reasoning, UNPARSED_ASSESSMENT);
    }
}
