//! The central `PromptSpec` artifact and everything hung off it.

use crate::artifact::InjectedBlock;
use crate::enums::{DialLevel, Severity, TemplateId};
use crate::ids::{SpecId, Timestamp};
use serde::{Deserialize, Serialize};

/// One emitted section of a compiled prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpecSection {
    pub heading: String,
    pub instruction: String,
    pub injected_blocks: Vec<InjectedBlock>,
}

/// Metadata stamped by the driver after the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMeta {
    pub total_tokens: u32,
    pub compile_duration_ms: u64,
    pub compiled_at: Timestamp,
    /// `[0, 100]`.
    pub lint_score: u8,
}

impl PromptMeta {
    /// The placeholder meta a freshly generated spec carries before the
    /// driver overwrites it with real measurements.
    pub fn placeholder(now: Timestamp) -> Self {
        Self {
            total_tokens: 0,
            compile_duration_ms: 0,
            compiled_at: now,
            lint_score: 100,
        }
    }
}

/// The central artifact of compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub id: SpecId,
    /// The original user string, preserving literal `@references`. Never
    /// replaced by `cleaned_input` — the `no-template-match` lint rule and
    /// the determinism tests depend on this field being untouched.
    pub raw_input: String,
    pub template_id: TemplateId,
    pub dial: DialLevel,
    /// `0` means unlimited.
    pub token_budget: u32,
    pub system_instruction: String,
    pub sections: Vec<PromptSpecSection>,
    pub constraints: Vec<String>,
    pub artifact_refs: Vec<crate::artifact::ArtifactRef>,
    pub meta: PromptMeta,
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    pub rule_id: String,
    pub rule_name: String,
    pub severity: Severity,
    pub message: String,
    pub fix: Option<String>,
}

/// The full output of the lint engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    pub results: Vec<LintResult>,
    /// `[0, 100]`.
    pub score: u8,
    pub passed: bool,
}

impl LintReport {
    /// `passed = score >= 70`.
    pub const PASS_THRESHOLD: u8 = 70;

    pub fn from_results(results: Vec<LintResult>) -> Self {
        let score = Self::score_for(&results);
        Self {
            passed: score >= Self::PASS_THRESHOLD,
            results,
            score,
        }
    }

    fn score_for(results: &[LintResult]) -> u8 {
        let deduction: u32 = results.iter().map(|r| r.severity.score_penalty()).sum();
        100u32.saturating_sub(deduction) as u8
    }
}

/// Provenance record for one candidate block considered during selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionEntry {
    pub artifact_id: crate::ids::ArtifactId,
    pub artifact_name: String,
    pub block_id: crate::ids::BlockId,
    pub block_label: String,
    pub included: bool,
    pub reason: Option<String>,
    pub token_count: u32,
}

/// Aggregate report over every [`InjectionEntry`] produced during a compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionReport {
    pub entries: Vec<InjectionEntry>,
    pub blocks_included: usize,
    pub blocks_omitted: usize,
    pub total_tokens_used: u32,
    pub total_tokens_budget: u32,
}

impl InjectionReport {
    /// Builds the aggregate counts from a flat entry list, preserving the
    /// invariant `blocks_included + blocks_omitted == entries.len()` and
    /// `total_tokens_used == sum(token_count over included)`.
    pub fn from_entries(entries: Vec<InjectionEntry>, total_tokens_budget: u32) -> Self {
        let blocks_included = entries.iter().filter(|e| e.included).count();
        let blocks_omitted = entries.len() - blocks_included;
        let total_tokens_used = entries.iter().filter(|e| e.included).map(|e| e.token_count).sum();
        Self {
            entries,
            blocks_included,
            blocks_omitted,
            total_tokens_used,
            total_tokens_budget,
        }
    }
}

/// The full return value of one `compile` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOutput {
    pub spec: PromptSpec,
    pub rendered: String,
    pub lint: LintReport,
    pub injection: InjectionReport,
}
