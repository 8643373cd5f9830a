//! DA Form 2062 data models.
//!
//! Field names serialize as camelCase to match the wire format consumed by
//! the downstream batch-import API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single line of text produced by an external text-recognition component.
///
/// Lines arrive in reading order (top to bottom on the page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedLine {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub recognition_confidence: f32,
}

impl RecognizedLine {
    pub fn new(text: impl Into<String>, recognition_confidence: f32) -> Self {
        Self {
            text: text.into(),
            recognition_confidence,
        }
    }
}

/// A single extracted property line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedItem {
    /// 1-based sequence position among emitted items (not raw lines).
    pub line_number: u32,

    /// Normalized National Stock Number in canonical NNNN-NN-NNN-NNNN form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_number: Option<String>,

    /// Free-text description, possibly prefixed with a `[LIN: xxxxxx]` tag.
    pub item_description: String,

    /// Item quantity, always >= 1.
    pub quantity: u32,

    /// Confidence in the extracted quantity (0.0 - 1.0).
    pub quantity_confidence: f32,

    /// Canonical two/three-letter unit-of-issue code (default "EA").
    pub unit_of_issue: String,

    /// Serial number, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// True only when the serial came from an explicit label (S/N:, SERIAL:).
    pub has_explicit_serial: bool,

    /// Condition code. No extraction logic exists for this field; it is a
    /// constant placeholder the downstream importer expects.
    pub condition: String,

    /// Aggregate item-level confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Reasons this item should be manually verified before import.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_reasons: Vec<String>,

    /// Whether the item falls below the review threshold or has open
    /// verification reasons.
    pub requires_verification: bool,
}

/// Default condition for items on a hand receipt.
pub const DEFAULT_CONDITION: &str = "Serviceable";

/// Default unit of issue when none is recognized.
pub const DEFAULT_UNIT_OF_ISSUE: &str = "EA";

/// A fully extracted DA Form 2062.
///
/// Created once per processed document and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Da2062Form {
    /// Unit name from the form header, when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,

    /// DODAAC/UIC from the form header, when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dodaac: Option<String>,

    /// Form number token (2062 variant), when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_number: Option<String>,

    /// When this form object was created.
    pub date_created: DateTime<Utc>,

    /// Extracted line items in top-to-bottom order.
    pub items: Vec<ExtractedItem>,

    /// Overall form confidence: the mean of all per-line recognition
    /// confidences, including lines excluded from extraction.
    pub confidence: f32,

    /// Extraction metadata.
    pub metadata: FormMetadata,
}

/// Metadata about the extraction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetadata {
    /// Total recognized lines consumed, including rejected ones.
    pub total_lines: usize,

    /// Lines excluded from extraction for low recognition confidence.
    pub low_confidence_lines: usize,

    /// Whether the form or any of its items should be manually verified.
    pub requires_verification: bool,
}

impl Da2062Form {
    /// Create an empty form with zero confidence.
    pub fn empty() -> Self {
        Self {
            unit_name: None,
            dodaac: None,
            form_number: None,
            date_created: Utc::now(),
            items: Vec::new(),
            confidence: 0.0,
            metadata: FormMetadata::default(),
        }
    }

    /// Serialize the form as pretty-printed JSON for the batch importer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
