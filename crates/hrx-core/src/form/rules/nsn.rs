//! National Stock Number extraction and normalization.

use super::patterns::{NSN_CANONICAL, NSN_CONTIGUOUS, NSN_HYPHENATED, NSN_LABELED, NSN_SPACED};
use super::{ExtractionMatch, FieldExtractor};

/// NSN field extractor.
///
/// Candidate shapes in priority order: hyphenated, 13 contiguous digits,
/// space-delimited, labeled (`NSN: ...`). Digit-only and space-delimited
/// matches are renormalized into the hyphenated canonical form before the
/// validity check.
pub struct NsnExtractor;

impl NsnExtractor {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> [(&'static regex::Regex, f32); 4] {
        [
            (&NSN_HYPHENATED, 0.95),
            (&NSN_CONTIGUOUS, 0.85),
            (&NSN_SPACED, 0.8),
            (&NSN_LABELED, 0.9),
        ]
    }
}

impl Default for NsnExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NsnExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for (pattern, confidence) in Self::candidates() {
            if let Some(caps) = pattern.captures(text) {
                if let Some(nsn) = normalize_nsn(&caps[1]) {
                    let full_match = caps.get(0).unwrap();
                    return Some(
                        ExtractionMatch::new(nsn, confidence, full_match.as_str())
                            .with_position(full_match.start(), full_match.end()),
                    );
                }
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for (pattern, confidence) in Self::candidates() {
            for caps in pattern.captures_iter(text) {
                let Some(nsn) = normalize_nsn(&caps[1]) else {
                    continue;
                };
                if results.iter().any(|r| r.value == nsn) {
                    continue;
                }
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(nsn, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the first valid NSN from text, in canonical form.
pub fn extract_nsn(text: &str) -> Option<String> {
    NsnExtractor::new().extract(text).map(|m| m.value)
}

/// Normalize a raw NSN candidate into NNNN-NN-NNN-NNNN canonical form.
///
/// Strips all non-digits; anything other than exactly 13 digits is rejected.
pub fn normalize_nsn(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 13 {
        return None;
    }

    let nsn = format!(
        "{}-{}-{}-{}",
        &digits[0..4],
        &digits[4..6],
        &digits[6..9],
        &digits[9..13]
    );

    NSN_CANONICAL.is_match(&nsn).then_some(nsn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hyphenated() {
        assert_eq!(
            extract_nsn("1 1005-01-584-1079 RIFLE M4"),
            Some("1005-01-584-1079".to_string())
        );
    }

    #[test]
    fn test_extract_contiguous_digits() {
        assert_eq!(
            extract_nsn("NSN 5180004482362 TOOL KIT"),
            Some("5180-00-448-2362".to_string())
        );
    }

    #[test]
    fn test_extract_space_delimited() {
        assert_eq!(
            extract_nsn("5180 00 448 2362 TOOL KIT"),
            Some("5180-00-448-2362".to_string())
        );
    }

    #[test]
    fn test_extract_labeled_mixed_grouping() {
        // Labeled form catches digit groupings the positional shapes miss.
        assert_eq!(
            extract_nsn("NSN: 5180 00 4482362"),
            Some("5180-00-448-2362".to_string())
        );
    }

    #[test]
    fn test_canonical_round_trip() {
        for nsn in ["1005-01-584-1079", "4710-00-000-1234", "9999-99-999-9999"] {
            let line = format!("3 {nsn} SOME ITEM EA 1");
            assert_eq!(extract_nsn(&line), Some(nsn.to_string()));
        }
    }

    #[test]
    fn test_rejects_wrong_digit_count() {
        assert_eq!(extract_nsn("123456789012 WIDGET"), None);
        assert_eq!(extract_nsn("1234-56-789-012 WIDGET"), None);
    }

    #[test]
    fn test_normalize_nsn() {
        assert_eq!(
            normalize_nsn("5180004482362"),
            Some("5180-00-448-2362".to_string())
        );
        assert_eq!(normalize_nsn("12345"), None);
    }

    #[test]
    fn test_match_retains_source_span() {
        let extractor = NsnExtractor::new();
        let text = "2 1005 01 584 1079 CARBINE";
        let m = extractor.extract(text).unwrap();
        assert_eq!(m.value, "1005-01-584-1079");
        assert_eq!(m.source, "1005 01 584 1079");
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "1005 01 584 1079");
    }
}
