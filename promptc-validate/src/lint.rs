//! Lint engine: a fixed set of scoring rules over a compiled prompt.
//!
//! A fixed, compile-time ordered rule set — each rule a pure function
//! `(spec, rendered) -> Option<LintResult>` — collected in declaration
//! order. No global mutable registry.

use promptc_core::{estimate_tokens, LintReport, LintResult, PromptSpec, Severity};

type Rule = fn(&PromptSpec, &str) -> Option<LintResult>;

const DO_NOT_SEND_TAGS: [&str; 4] = ["do-not-send", "donotsend", "sensitive", "internal-only"];

fn vague_input(spec: &PromptSpec, _rendered: &str) -> Option<LintResult> {
    let word_count = spec.raw_input.split_whitespace().count();
    (word_count < 10).then(|| LintResult {
        rule_id: "vague-input".to_string(),
        rule_name: "Vague Input".to_string(),
        severity: Severity::Warning,
        message: format!("Raw input has only {word_count} word(s); the request may be too vague."),
        fix: Some("Add more detail about the desired output.".to_string()),
    })
}

fn missing_constraints(spec: &PromptSpec, _rendered: &str) -> Option<LintResult> {
    spec.constraints.is_empty().then(|| LintResult {
        rule_id: "missing-constraints".to_string(),
        rule_name: "Missing Constraints".to_string(),
        severity: Severity::Warning,
        message: "No tone, audience, or length constraints were detected.".to_string(),
        fix: Some("Specify a tone, audience, or length cap in the request.".to_string()),
    })
}

fn no_template_match(spec: &PromptSpec, _rendered: &str) -> Option<LintResult> {
    let template = promptc_templates::template(spec.template_id);
    let lowered = spec.raw_input.to_lowercase();
    let any_match = template.keywords.iter().any(|kw| lowered.contains(&kw.to_lowercase()));
    (!any_match).then(|| LintResult {
        rule_id: "no-template-match".to_string(),
        rule_name: "Weak Template Match".to_string(),
        severity: Severity::Warning,
        message: format!("None of {}'s keywords appear in the raw input.", template.name),
        fix: None,
    })
}

fn budget_exceeded(spec: &PromptSpec, rendered: &str) -> Option<LintResult> {
    if spec.token_budget == 0 {
        return None;
    }
    let used = estimate_tokens(rendered);
    (used > spec.token_budget).then(|| LintResult {
        rule_id: "budget-exceeded".to_string(),
        rule_name: "Budget Exceeded".to_string(),
        severity: Severity::Error,
        message: format!("Rendered prompt uses {used} estimated tokens, over the {} budget.", spec.token_budget),
        fix: Some("Raise the token budget or trim injected content.".to_string()),
    })
}

fn empty_sections(spec: &PromptSpec, _rendered: &str) -> Option<LintResult> {
    let has_empty = spec
        .sections
        .iter()
        .any(|s| s.instruction.trim().is_empty() && s.injected_blocks.is_empty());
    has_empty.then(|| LintResult {
        rule_id: "empty-sections".to_string(),
        rule_name: "Empty Section".to_string(),
        severity: Severity::Warning,
        message: "At least one section has no instruction text and no injected content.".to_string(),
        fix: None,
    })
}

fn do_not_send_leak(spec: &PromptSpec, _rendered: &str) -> Option<LintResult> {
    let leaked = spec.sections.iter().any(|section| {
        section.injected_blocks.iter().any(|block| {
            block
                .tags
                .iter()
                .any(|tag| DO_NOT_SEND_TAGS.contains(&tag.to_lowercase().as_str()))
        })
    });
    leaked.then(|| LintResult {
        rule_id: "do-not-send-leak".to_string(),
        rule_name: "Do-Not-Send Leak".to_string(),
        severity: Severity::Error,
        message: "An injected block carries a do-not-send class tag.".to_string(),
        fix: None,
    })
}

const RULES: &[Rule] = &[
    vague_input,
    missing_constraints,
    no_template_match,
    budget_exceeded,
    empty_sections,
    do_not_send_leak,
];

/// Run every rule, in declaration order, and fold the findings into a
/// [`LintReport`] (score: `100 - 25*errors - 10*warnings - 3*info`,
/// floored at `0`; `passed = score >= 70`).
pub fn run(spec: &PromptSpec, rendered: &str) -> LintReport {
    let results: Vec<LintResult> = RULES.iter().filter_map(|rule| rule(spec, rendered)).collect();
    LintReport::from_results(results)
}
