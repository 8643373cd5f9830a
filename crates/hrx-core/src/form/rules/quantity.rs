//! Quantity extraction.
//!
//! This is a heuristic, not a guaranteed-correct extraction: a standalone
//! integer near a unit-of-issue token is the strongest signal, a bare small
//! number is a weak one, and anything else falls back to quantity 1. The
//! paired confidence score is how ambiguity surfaces to the caller.

use super::patterns::QUANTITY_TOKEN;

/// An extracted quantity with its heuristic confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityMatch {
    /// Quantity value, always in 1..=999.
    pub value: u32,
    /// Heuristic confidence: 0.9 for 1-99, 0.7 for 100-999, 0.3 fallback.
    pub confidence: f32,
    /// Byte span of the winning number, if one was found.
    pub position: Option<(usize, usize)>,
}

impl QuantityMatch {
    /// The default when no quantity is recoverable.
    pub fn fallback() -> Self {
        Self {
            value: 1,
            confidence: 0.3,
            position: None,
        }
    }
}

fn magnitude_confidence(value: u32) -> f32 {
    if value <= 99 { 0.9 } else { 0.7 }
}

/// Extract a quantity from text.
///
/// A number within `window` characters of the unit-of-issue span wins;
/// otherwise the first bare number in 1..=100 is accepted as a weaker
/// candidate. Values >= 1000 never match, and bare large numbers without
/// unit context are rejected.
pub fn extract_quantity(
    text: &str,
    unit_span: Option<(usize, usize)>,
    window: usize,
) -> QuantityMatch {
    let candidates: Vec<(u32, usize, usize)> = QUANTITY_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let value: u32 = m.as_str().parse().ok()?;
            (value >= 1).then_some((value, m.start(), m.end()))
        })
        .collect();

    // Strong candidate: nearest number inside the proximity window.
    if let Some((unit_start, unit_end)) = unit_span {
        let near = candidates
            .iter()
            .filter_map(|&(value, start, end)| {
                let distance = if end <= unit_start {
                    unit_start - end
                } else if start >= unit_end {
                    start - unit_end
                } else {
                    0
                };
                (distance <= window).then_some((distance, value, start, end))
            })
            .min_by_key(|&(distance, _, start, _)| (distance, start));

        if let Some((_, value, start, end)) = near {
            return QuantityMatch {
                value,
                confidence: magnitude_confidence(value),
                position: Some((start, end)),
            };
        }
    }

    // Weak candidate: first bare number in 1..=100.
    if let Some(&(value, start, end)) = candidates.iter().find(|&&(value, _, _)| value <= 100) {
        return QuantityMatch {
            value,
            confidence: magnitude_confidence(value),
            position: Some((start, end)),
        };
    }

    QuantityMatch::fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proximity_to_unit_wins() {
        // "2" sits next to the unit token; the leading "1" is farther away.
        let text = "1 RIFLE M4 CARBINE EA 2";
        let unit_span = Some((19, 21));
        let m = extract_quantity(text, unit_span, 12);
        assert_eq!(m.value, 2);
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn test_bare_small_number() {
        let m = extract_quantity("CANTEEN COVER 47", None, 12);
        assert_eq!(m.value, 47);
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn test_large_quantity_near_unit() {
        let text = "BX 250 ROUNDS";
        let m = extract_quantity(text, Some((0, 2)), 12);
        assert_eq!(m.value, 250);
        assert_eq!(m.confidence, 0.7);
    }

    #[test]
    fn test_bare_large_number_rejected() {
        // 250 without unit context is not trusted as a quantity.
        let m = extract_quantity("TRUCK CARGO 250", None, 12);
        assert_eq!(m.value, 1);
        assert_eq!(m.confidence, 0.3);
    }

    #[test]
    fn test_thousands_never_match() {
        let m = extract_quantity("1000 FEET WIRE", None, 12);
        assert_eq!(m, QuantityMatch::fallback());
    }

    #[test]
    fn test_no_number_falls_back() {
        let m = extract_quantity("PROTECTIVE MASK", None, 12);
        assert_eq!(m.value, 1);
        assert_eq!(m.confidence, 0.3);
        assert_eq!(m.position, None);
    }
}
