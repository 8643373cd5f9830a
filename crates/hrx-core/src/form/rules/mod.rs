//! Rule-based field extractors for DA 2062 line items.
//!
//! Every extractor evaluates an ordered list of candidate patterns, most
//! specific first. The first pattern that matches and passes its domain
//! validity check wins; no extractor backtracks across the list once a
//! validated match is found. A miss is `None`, never an error.

pub mod lin;
pub mod nsn;
pub mod patterns;
pub mod quantity;
pub mod serial;
pub mod unit_of_issue;

pub use lin::{extract_lin, LinExtractor};
pub use nsn::{extract_nsn, normalize_nsn, NsnExtractor};
pub use quantity::{extract_quantity, QuantityMatch};
pub use serial::{extract_serial, SerialMatch};
pub use unit_of_issue::{extract_unit_of_issue, UnitOfIssueExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A validated field match with pattern-level confidence.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted (normalized) value.
    pub value: T,
    /// Confidence score (0.0 - 1.0) of the matching pattern.
    pub confidence: f32,
    /// Byte span of the match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched, pre-normalization.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
