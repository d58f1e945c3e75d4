//! Output of the intent parser.

use crate::enums::TemplateId;
use serde::{Deserialize, Serialize};

/// Result of parsing a raw user request into a template choice, constraints,
/// artifact references and the cleaned input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub template_id: TemplateId,
    /// Stored as millipercent (`0..=1000`) to avoid a bare float in the data
    /// model; `confidence()` converts back to the `[0.0, 1.0]` range.
    confidence_millis: u16,
    pub constraints: Vec<String>,
    pub artifact_refs: Vec<String>,
    pub cleaned_input: String,
}

impl ParsedIntent {
    pub fn new(
        template_id: TemplateId,
        confidence: f64,
        constraints: Vec<String>,
        artifact_refs: Vec<String>,
        cleaned_input: String,
    ) -> Self {
        let clamped = confidence.clamp(0.0, 1.0);
        Self {
            template_id,
            confidence_millis: (clamped * 1000.0).round() as u16,
            constraints,
            artifact_refs,
            cleaned_input,
        }
    }

    pub fn confidence(&self) -> f64 {
        self.confidence_millis as f64 / 1000.0
    }
}
