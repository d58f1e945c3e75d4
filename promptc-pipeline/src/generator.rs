//! Spec generator: assembles a [`PromptSpec`] from a parsed intent, a
//! template, and the blocks already selected per section.

use promptc_core::{ArtifactRef, InjectedBlock, ParsedIntent, PromptMeta, PromptSpec, PromptSpecSection, SpecId, Timestamp};
use promptc_templates::TemplateDefinition;
use std::collections::HashMap;

/// `generate(rawInput, ParsedIntent, TemplateDefinition, dial, tokenBudget,
/// blocksByHeading, artifactRefs) -> PromptSpec`.
///
/// `now` is threaded in rather than read from the clock here so the
/// generator itself stays a pure function; the driver supplies the one
/// permitted timestamp source.
pub fn generate(
    raw_input: &str,
    parsed: &ParsedIntent,
    template: &TemplateDefinition,
    dial: promptc_core::DialLevel,
    token_budget: u32,
    mut blocks_by_heading: HashMap<String, Vec<InjectedBlock>>,
    artifact_refs: Vec<ArtifactRef>,
    now: Timestamp,
) -> PromptSpec {
    let sections: Vec<PromptSpecSection> = template
        .sections
        .iter()
        .filter(|section| section.min_dial <= dial)
        .map(|section| PromptSpecSection {
            heading: section.heading.to_string(),
            instruction: section.instruction.to_string(),
            injected_blocks: blocks_by_heading.remove(section.heading).unwrap_or_default(),
        })
        .collect();

    PromptSpec {
        id: SpecId::generate(),
        raw_input: raw_input.to_string(),
        template_id: template.id,
        dial,
        token_budget,
        system_instruction: template.system_instruction.to_string(),
        sections,
        constraints: parsed.constraints.clone(),
        artifact_refs,
        meta: PromptMeta::placeholder(now),
    }
}
