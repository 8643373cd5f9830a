//! Line Item Number extraction.

use crate::form::vocab::is_valid_lin_prefix;

use super::patterns::{LIN_LABELED, LIN_PARENS, LIN_STANDALONE};
use super::{ExtractionMatch, FieldExtractor};

/// LIN field extractor.
///
/// A LIN is a 6-character code: one letter followed by five alphanumerics.
/// Candidates are accepted only when the first character is in the curated
/// prefix set. The bare standalone form additionally requires at least one
/// digit, so ordinary six-letter words are not misread as codes.
pub struct LinExtractor;

impl LinExtractor {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> [(&'static regex::Regex, bool, f32); 3] {
        // (pattern, require_digit, confidence)
        [
            (&LIN_LABELED, false, 0.95),
            (&LIN_PARENS, false, 0.85),
            (&LIN_STANDALONE, true, 0.7),
        ]
    }

    fn validate(candidate: &str, require_digit: bool) -> bool {
        let mut chars = candidate.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !is_valid_lin_prefix(first) {
            return false;
        }
        !require_digit || candidate[1..].chars().any(|c| c.is_ascii_digit())
    }
}

impl Default for LinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LinExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for (pattern, require_digit, confidence) in Self::candidates() {
            if let Some(caps) = pattern.captures(text) {
                let candidate = caps[1].to_uppercase();
                if Self::validate(&candidate, require_digit) {
                    let full_match = caps.get(0).unwrap();
                    return Some(
                        ExtractionMatch::new(candidate, confidence, full_match.as_str())
                            .with_position(full_match.start(), full_match.end()),
                    );
                }
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for (pattern, require_digit, confidence) in Self::candidates() {
            for caps in pattern.captures_iter(text) {
                let candidate = caps[1].to_uppercase();
                if !Self::validate(&candidate, require_digit) {
                    continue;
                }
                if results.iter().any(|r| r.value == candidate) {
                    continue;
                }
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(candidate, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the first valid LIN from text.
pub fn extract_lin(text: &str) -> Option<String> {
    LinExtractor::new().extract(text).map(|m| m.value)
}
