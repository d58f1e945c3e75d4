//! Closed-set enum types for the promptc data model.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// DIAL LEVEL
// ============================================================================

/// Verbosity dial controlling how many template sections are emitted.
///
/// Integer in the closed interval `[0, 5]`; values outside the range (or
/// non-integers, at the `CompileInput` boundary) are rejected rather than
/// clamped. `validate_and_repair` is the one place a bad dial gets
/// clamped, and only to the literal `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DialLevel(u8);

impl DialLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    /// The repair-pass fallback value for an out-of-range dial.
    pub const REPAIR_DEFAULT: DialLevel = DialLevel(3);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for DialLevel {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(InputError::InvalidValue {
                field: "dial".to_string(),
                value: value.to_string(),
                reason: format!("dial must be an integer in [{}, {}]", Self::MIN, Self::MAX),
            });
        }
        Ok(DialLevel(value as u8))
    }
}

impl From<DialLevel> for i64 {
    fn from(d: DialLevel) -> i64 {
        d.0 as i64
    }
}

impl fmt::Display for DialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// TEMPLATE ID
// ============================================================================

/// The closed set of prompt templates.
///
/// Catalog order below is the deterministic tie-break order used by the
/// intent parser's template scorer — declaration order here is the
/// single source of truth for that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    AcademicReport,
    Prd,
    DecisionMemo,
    Critique,
    ResearchBrief,
}

impl TemplateId {
    /// All templates in deterministic catalog order (the intent parser's
    /// tie-break rule).
    pub const CATALOG_ORDER: [TemplateId; 5] = [
        TemplateId::AcademicReport,
        TemplateId::Prd,
        TemplateId::DecisionMemo,
        TemplateId::Critique,
        TemplateId::ResearchBrief,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::AcademicReport => "academic-report",
            TemplateId::Prd => "prd",
            TemplateId::DecisionMemo => "decision-memo",
            TemplateId::Critique => "critique",
            TemplateId::ResearchBrief => "research-brief",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::CATALOG_ORDER
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InputError::InvalidValue {
                field: "templateId".to_string(),
                value: s.to_string(),
                reason: "not one of the five recognized templates".to_string(),
            })
    }
}

// ============================================================================
// LINT SEVERITY
// ============================================================================

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Score deduction for one finding of this severity.
    pub fn score_penalty(self) -> u32 {
        match self {
            Severity::Error => 25,
            Severity::Warning => 10,
            Severity::Info => 3,
        }
    }
}
