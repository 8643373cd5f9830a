//! Unit-of-issue extraction.

use crate::form::vocab::UNIT_OF_ISSUE_TABLE;

use super::patterns::UNIT_TOKEN;
use super::{ExtractionMatch, FieldExtractor};

/// Unit-of-issue field extractor.
///
/// Scans word tokens against the fixed vocabulary of standard abbreviations
/// and their full-word equivalents, case-insensitive, with optional trailing
/// period. Matches normalize to the canonical 2-3 letter code.
pub struct UnitOfIssueExtractor;

impl UnitOfIssueExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnitOfIssueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for UnitOfIssueExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for caps in UNIT_TOKEN.captures_iter(text) {
            let token = caps[1].to_uppercase();
            let Some(&code) = UNIT_OF_ISSUE_TABLE.get(token.as_str()) else {
                continue;
            };

            // Abbreviation hits are stronger than full-word hits.
            let confidence = if token == code { 0.9 } else { 0.85 };
            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(code.to_string(), confidence, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        results
    }
}

/// Extract the first unit of issue from text, as its canonical code.
pub fn extract_unit_of_issue(text: &str) -> Option<String> {
    UnitOfIssueExtractor::new().extract(text).map(|m| m.value)
}
