//! Item construction and confidence scoring.
//!
//! Takes one grouped set of lines and runs every field extractor over it,
//! then scores the result with an additive heuristic: a base score plus
//! bonuses for corroborating signals (validated NSN, plausible description,
//! explicit serial, military vocabulary), clamped to 1.0.

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::form::{ExtractedItem, DEFAULT_CONDITION, DEFAULT_UNIT_OF_ISSUE};

use super::grouper::LineGroup;
use super::rules::patterns::WHITESPACE;
use super::rules::{
    extract_quantity, extract_serial, FieldExtractor, LinExtractor, NsnExtractor,
    UnitOfIssueExtractor,
};
use super::vocab::{military_category_count, requires_serial_number};

/// Builds scored [`ExtractedItem`]s from line groups.
pub struct ItemBuilder<'a> {
    config: &'a ExtractionConfig,
}

impl<'a> ItemBuilder<'a> {
    pub fn new(config: &'a ExtractionConfig) -> Self {
        Self { config }
    }

    /// Build an item from one line group.
    ///
    /// Returns `None` when the group carries no usable signal: no NSN and a
    /// description of three characters or fewer.
    pub fn build(&self, group: &LineGroup, line_number: u32) -> Option<ExtractedItem> {
        let full_text = group.full_text();

        let nsn = NsnExtractor::new().extract(&full_text);

        // Blank the NSN's source substring before the other extractors run,
        // so its digit groups cannot be misread as quantities or codes.
        let working = match &nsn {
            Some(m) => full_text.replacen(&m.source, " ", 1),
            None => full_text.clone(),
        };

        let description = WHITESPACE.replace_all(working.trim(), " ").into_owned();

        if nsn.is_none() && description.len() <= 3 {
            debug!(text = %full_text, "discarding group with no usable signal");
            return None;
        }

        let lin = LinExtractor::new().extract(&working);
        let unit = UnitOfIssueExtractor::new().extract(&working);
        let quantity = extract_quantity(
            &working,
            unit.as_ref().and_then(|m| m.position),
            self.config.quantity_window,
        );
        let serial = extract_serial(&group.lines);

        let weights = &self.config.weights;
        let mut confidence = weights.base;
        if nsn.is_some() {
            confidence += weights.nsn_bonus;
        }
        if description.len() > 5 && description.len() < 100 {
            confidence += weights.description_bonus;
        }
        if serial.as_ref().is_some_and(|s| s.explicit) {
            confidence += weights.explicit_serial_bonus;
        }
        let categories = military_category_count(&description.to_uppercase());
        confidence += (weights.military_term_bonus * categories as f32)
            .min(weights.military_term_cap);
        let confidence = confidence.clamp(0.0, 1.0);

        let mut verification_reasons = Vec::new();
        if nsn.is_none() {
            verification_reasons.push("no stock number recognized".to_string());
        }
        if description.len() <= 3 {
            verification_reasons.push("description missing or too short".to_string());
        }
        if let Some(nsn) = &nsn {
            if requires_serial_number(&nsn.value) && serial.is_none() {
                verification_reasons.push("serial-tracked item missing serial number".to_string());
            }
        }
        let requires_verification =
            confidence < self.config.review_threshold || !verification_reasons.is_empty();

        let item_description = match &lin {
            Some(lin) => format!("[LIN: {}] {}", lin.value, description),
            None => description,
        };

        Some(ExtractedItem {
            line_number,
            stock_number: nsn.map(|m| m.value),
            item_description,
            quantity: quantity.value,
            quantity_confidence: quantity.confidence,
            unit_of_issue: unit
                .map(|m| m.value)
                .unwrap_or_else(|| DEFAULT_UNIT_OF_ISSUE.to_string()),
            serial_number: serial.as_ref().map(|s| s.value.clone()),
            has_explicit_serial: serial.is_some_and(|s| s.explicit),
            condition: DEFAULT_CONDITION.to_string(),
            confidence,
            verification_reasons,
            requires_verification,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(lines: &[&str]) -> LineGroup {
        LineGroup {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn build(lines: &[&str]) -> Option<ExtractedItem> {
        let config = ExtractionConfig::default();
        ItemBuilder::new(&config).build(&group(lines), 1)
    }

    #[test]
    fn test_full_item_line() {
        let item = build(&["1 1005-01-584-1079 RIFLE M4 CARBINE EA 2 S/N: M4123456"]).unwrap();

        assert_eq!(item.stock_number.as_deref(), Some("1005-01-584-1079"));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.quantity_confidence, 0.9);
        assert_eq!(item.unit_of_issue, "EA");
        assert_eq!(item.serial_number.as_deref(), Some("M4123456"));
        assert!(item.has_explicit_serial);
        assert_eq!(item.condition, DEFAULT_CONDITION);
        // 0.5 base + 0.2 nsn + 0.15 desc + 0.15 serial + 0.1 military, clamped.
        assert_eq!(item.confidence, 1.0);
        assert!(!item.requires_verification);
        assert!(item.verification_reasons.is_empty());
    }

    #[test]
    fn test_nsn_bonus_is_exact() {
        let without = build(&["9 PLIERS HANDTOOL STEEL"]).unwrap();
        let with = build(&["9 PLIERS HANDTOOL STEEL 5110-00-222-3333"]).unwrap();

        let weights = ExtractionConfig::default().weights;
        assert!((with.confidence - without.confidence - weights.nsn_bonus).abs() < 1e-6);
    }

    #[test]
    fn test_discards_group_without_signal() {
        assert_eq!(build(&["77"]), None);
        assert_eq!(build(&["2 X"]), None);
    }

    #[test]
    fn test_short_description_kept_when_nsn_present() {
        let item = build(&["4730-00-001-0002"]).unwrap();
        assert_eq!(item.stock_number.as_deref(), Some("4730-00-001-0002"));
        assert!(item
            .verification_reasons
            .iter()
            .any(|r| r.contains("description")));
        assert!(item.requires_verification);
    }

    #[test]
    fn test_lin_prefixes_description() {
        let item = build(&["LIN: R95035 RIFLE M4 CARBINE"]).unwrap();
        assert!(item.item_description.starts_with("[LIN: R95035] "));
    }

    #[test]
    fn test_serial_tracked_item_without_serial_flagged() {
        let item = build(&["1 1005-01-584-1079 RIFLE"]).unwrap();
        assert_eq!(item.serial_number, None);
        assert!(item
            .verification_reasons
            .iter()
            .any(|r| r.contains("serial")));
        assert!(item.requires_verification);
    }

    #[test]
    fn test_serial_from_continuation_line() {
        let item = build(&["1 5855-01-534-6458 MONOCULAR NIGHT VISION", "S/N: NV778899"]).unwrap();
        assert_eq!(item.serial_number.as_deref(), Some("NV778899"));
        assert!(item.has_explicit_serial);
        assert!(item.verification_reasons.is_empty());
    }

    #[test]
    fn test_defaults_without_unit_or_quantity() {
        let item = build(&["6 PROTECTIVE MASK CHEMICAL"]).unwrap();
        assert_eq!(item.unit_of_issue, DEFAULT_UNIT_OF_ISSUE);
        // Leading item number is the only bare small number.
        assert_eq!(item.quantity, 6);
    }
}
