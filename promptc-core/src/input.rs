//! The external `CompileInput` boundary type.

use crate::enums::{DialLevel, TemplateId};
use crate::error::InputError;
use serde::{Deserialize, Serialize};

/// Input to one invocation of the pipeline driver (`promptc_compiler::compile`).
///
/// `dial` and `token_budget` are pre-validated via [`CompileInput::validate`]
/// before anything in the pipeline runs — a validation failure is fatal to
/// the call and surfaced before any pipeline stage does any work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileInput {
    /// Raw user request, preserved byte-for-byte downstream as
    /// `PromptSpec::raw_input`. Whitespace-only strings are valid —
    /// whitespace is not treated as below some minimum length.
    pub raw_input: String,
    pub dial: i64,
    /// `0` means unlimited.
    pub token_budget: i64,
    pub template_override: Option<TemplateId>,
    /// Artifact names to resolve even if absent from `raw_input`.
    #[serde(default)]
    pub force_artifacts: Vec<String>,
}

impl CompileInput {
    /// Validate the boundary schema: `raw_input` non-empty (whitespace-only
    /// permitted), `dial` an integer in `[0, 5]`, `token_budget >= 0`.
    pub fn validate(&self) -> Result<DialLevel, InputError> {
        if self.raw_input.is_empty() {
            return Err(InputError::RequiredFieldMissing {
                field: "rawInput".to_string(),
            });
        }
        if self.token_budget < 0 {
            return Err(InputError::InvalidValue {
                field: "tokenBudget".to_string(),
                value: self.token_budget.to_string(),
                reason: "tokenBudget must be >= 0 (0 means unlimited)".to_string(),
            });
        }
        DialLevel::try_from(self.dial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CompileInput {
        CompileInput {
            raw_input: "Write a report on AI".to_string(),
            dial: 3,
            token_budget: 1000,
            template_override: None,
            force_artifacts: vec![],
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn rejects_empty_raw_input() {
        let mut input = base();
        input.raw_input = String::new();
        assert_eq!(
            input.validate(),
            Err(InputError::RequiredFieldMissing {
                field: "rawInput".to_string()
            })
        );
    }

    #[test]
    fn accepts_whitespace_only_raw_input() {
        let mut input = base();
        input.raw_input = "   ".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_negative_token_budget() {
        let mut input = base();
        input.token_budget = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_dial() {
        let mut input = base();
        input.dial = 7;
        assert!(input.validate().is_err());
    }
}
