//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HrxError, Result};

/// Main configuration for DA 2062 extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// Minimum recognition confidence for a line to participate in
    /// extraction. Rejected lines still count toward form confidence.
    pub min_recognition_confidence: f32,

    /// Items (and forms) below this confidence are flagged for manual
    /// review rather than silently imported.
    pub review_threshold: f32,

    /// Maximum character distance between a quantity candidate and a
    /// unit-of-issue token for the proximity heuristic.
    pub quantity_window: usize,

    /// Additive confidence bonus weights.
    pub weights: ConfidenceWeights,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_recognition_confidence: 0.5,
            review_threshold: 0.7,
            quantity_window: 12,
            weights: ConfidenceWeights::default(),
        }
    }
}

/// Bonus weights for the additive item confidence score.
///
/// These are heuristic tuning constants, not calibrated probabilities. The
/// defaults are load-bearing for behavioral parity with the production
/// scoring and should only be changed deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfidenceWeights {
    /// Score every surviving item starts from.
    pub base: f32,

    /// Bonus for a validated NSN.
    pub nsn_bonus: f32,

    /// Bonus for a description in the reasonable length range (6..100).
    pub description_bonus: f32,

    /// Bonus for a label-based (explicit) serial number.
    pub explicit_serial_bonus: f32,

    /// Bonus per distinct military-vocabulary category in the description.
    pub military_term_bonus: f32,

    /// Cap on the total military-vocabulary bonus.
    pub military_term_cap: f32,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            nsn_bonus: 0.2,
            description_bonus: 0.15,
            explicit_serial_bonus: 0.15,
            military_term_bonus: 0.1,
            military_term_cap: 0.2,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that thresholds are within [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_recognition_confidence) {
            return Err(HrxError::Config(format!(
                "minRecognitionConfidence out of range: {}",
                self.min_recognition_confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.review_threshold) {
            return Err(HrxError::Config(format!(
                "reviewThreshold out of range: {}",
                self.review_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = ConfidenceWeights::default();
        assert_eq!(w.base, 0.5);
        assert_eq!(w.nsn_bonus, 0.2);
        assert_eq!(w.description_bonus, 0.15);
        assert_eq!(w.explicit_serial_bonus, 0.15);
        assert_eq!(w.military_term_cap, 0.2);
    }

    #[test]
    fn test_default_thresholds() {
        let config = ExtractionConfig::default();
        assert_eq!(config.min_recognition_confidence, 0.5);
        assert_eq!(config.review_threshold, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = ExtractionConfig {
            review_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
