//! Form-level aggregation.
//!
//! Consumes recognized text lines in reading order and produces a complete
//! [`Da2062Form`]: header fields, grouped and scored line items, and an
//! overall confidence that reflects recognition quality across the whole
//! page, not just the lines that survived filtering.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::form::{Da2062Form, FormMetadata, RecognizedLine};

use super::builder::ItemBuilder;
use super::classifier::is_header_line;
use super::grouper::group_lines;
use super::rules::patterns::FORM_NUMBER;

/// A parser that turns recognized lines into a structured form.
pub trait FormParser {
    fn parse(&self, lines: &[RecognizedLine]) -> Da2062Form;

    /// Parse raw text, treating every non-empty line as fully recognized.
    fn parse_text(&self, text: &str) -> Da2062Form {
        let lines: Vec<RecognizedLine> = text
            .lines()
            .map(|line| RecognizedLine::new(line, 1.0))
            .collect();
        self.parse(&lines)
    }
}

/// Rule-based DA 2062 parser.
pub struct Da2062Parser {
    config: ExtractionConfig,
}

impl Da2062Parser {
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    fn extract_header_field(line: &str, keywords: &[&str]) -> Option<String> {
        let upper = line.to_uppercase();
        if !keywords.iter().any(|k| upper.contains(k)) {
            return None;
        }
        let value = line.splitn(2, ':').nth(1)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

impl Default for Da2062Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl FormParser for Da2062Parser {
    fn parse(&self, lines: &[RecognizedLine]) -> Da2062Form {
        if lines.is_empty() {
            return Da2062Form::empty();
        }

        // Overall confidence covers every line, rejected ones included.
        let confidence = lines
            .iter()
            .map(|l| l.recognition_confidence.clamp(0.0, 1.0))
            .sum::<f32>()
            / lines.len() as f32;

        let accepted: Vec<&RecognizedLine> = lines
            .iter()
            .filter(|l| l.recognition_confidence >= self.config.min_recognition_confidence)
            .collect();
        let low_confidence_lines = lines.len() - accepted.len();

        let mut form = Da2062Form::empty();
        form.confidence = confidence;

        for line in &accepted {
            if form.unit_name.is_none() {
                form.unit_name =
                    Self::extract_header_field(&line.text, &["UNIT:", "ORGANIZATION:"]);
            }
            if form.dodaac.is_none() {
                form.dodaac = Self::extract_header_field(&line.text, &["DODAAC", "UIC:"]);
            }
            if form.form_number.is_none() {
                form.form_number = FORM_NUMBER
                    .captures(&line.text)
                    .map(|caps| caps[1].to_string());
            }
        }

        let item_lines: Vec<&str> = accepted
            .iter()
            .map(|l| l.text.as_str())
            .filter(|text| !text.trim().is_empty() && !is_header_line(text))
            .collect();

        let groups = group_lines(&item_lines);
        debug!(
            lines = lines.len(),
            accepted = accepted.len(),
            groups = groups.len(),
            "grouped item lines"
        );

        let builder = ItemBuilder::new(&self.config);
        for group in &groups {
            let line_number = form.items.len() as u32 + 1;
            if let Some(item) = builder.build(group, line_number) {
                form.items.push(item);
            }
        }

        let requires_verification = confidence < self.config.review_threshold
            || form.items.iter().any(|i| i.requires_verification);
        form.metadata = FormMetadata {
            total_lines: lines.len(),
            low_confidence_lines,
            requires_verification,
        };

        info!(
            items = form.items.len(),
            confidence = form.confidence,
            requires_verification,
            "parsed form"
        );

        form
    }
}
