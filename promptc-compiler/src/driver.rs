//! Pipeline driver: the async glue that runs intent parsing, artifact
//! resolution, block selection, spec generation, rendering, and lint
//! scoring in sequence, then stamps the result's metadata. The only
//! suspension points are the two `ArtifactHost` callbacks.

use crate::error::CompileError;
use crate::host::ArtifactHost;
use chrono::Utc;
use futures_util::future::join_all;
use promptc_core::{estimate_tokens, Artifact, ArtifactId, CompileInput, CompileOutput, InjectionEntry, InjectionReport};
use std::collections::HashMap;
use std::time::Instant;

/// Dedup a sequence of names, preserving first-seen order.
fn dedup_preserve_order(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for name in names {
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }
    out
}

/// `compile(input, resolveRefs, fetchArtifact) -> CompileOutput`.
#[tracing::instrument(skip(input, host), fields(dial = input.dial, token_budget = input.token_budget))]
pub async fn compile(input: &CompileInput, host: &dyn ArtifactHost) -> Result<CompileOutput, CompileError> {
    let started = Instant::now();

    let dial = input.validate()?;

    let parsed = promptc_pipeline::parse(&input.raw_input, input.template_override);
    tracing::debug!(template_id = %parsed.template_id, ref_count = parsed.artifact_refs.len(), "parsed intent");

    let all_refs = dedup_preserve_order(parsed.artifact_refs.iter().cloned().chain(input.force_artifacts.iter().cloned()));

    let resolved_refs = if all_refs.is_empty() {
        Vec::new()
    } else {
        host.resolve_refs(&all_refs).await?
    };

    // Fan out concurrent fetches for every resolved ref; unresolved refs
    // are skipped entirely.
    let fetch_futures = resolved_refs.iter().filter_map(|r| {
        r.artifact_id.clone().map(|id| async move {
            let fetched = host.fetch_artifact(&id).await;
            (id, fetched)
        })
    });
    let fetched: HashMap<ArtifactId, Artifact> = {
        let mut map = HashMap::new();
        for (id, result) in join_all(fetch_futures).await {
            if let Some(artifact) = result? {
                map.insert(id, artifact);
            }
        }
        map
    };

    let template_id = input.template_override.unwrap_or(parsed.template_id);
    let template = promptc_templates::template(template_id);

    let emitted_sections: Vec<&promptc_templates::TemplateSection> =
        template.sections.iter().filter(|section| section.min_dial <= dial).collect();

    let mut tokens_used_total: u32 = 0;
    let mut entries: Vec<InjectionEntry> = Vec::new();
    let mut blocks_by_heading: HashMap<String, Vec<promptc_core::InjectedBlock>> = HashMap::new();

    // Budget accounting is global across every (section, artifact) pair
    // in this compilation.
    for section in &emitted_sections {
        let section_tags = vec![section.heading.to_lowercase()];

        for ref_entry in &resolved_refs {
            let Some(artifact_id) = &ref_entry.artifact_id else { continue };
            let Some(artifact) = fetched.get(artifact_id) else { continue };

            // `None` means unlimited; `Some(0)` means the global budget is
            // fully spent and must still block every further block, not
            // fall through to `select`'s own "unlimited" reading of `0`.
            let remaining_budget = (input.token_budget > 0)
                .then(|| (input.token_budget as u32).saturating_sub(tokens_used_total));

            let result = promptc_pipeline::select(&artifact.blocks, &section_tags, remaining_budget, artifact.id.clone(), &artifact.name);
            tokens_used_total += result.tokens_used;

            for block in &result.included {
                entries.push(InjectionEntry {
                    artifact_id: artifact.id.clone(),
                    artifact_name: artifact.name.clone(),
                    block_id: block.block_id.clone(),
                    block_label: block.label.clone(),
                    included: true,
                    reason: None,
                    token_count: block.token_count,
                });
            }
            for omitted in &result.omitted {
                entries.push(InjectionEntry {
                    artifact_id: artifact.id.clone(),
                    artifact_name: artifact.name.clone(),
                    block_id: omitted.block.id.clone(),
                    block_label: omitted.block.label.clone(),
                    included: false,
                    reason: Some(omitted.reason.to_string()),
                    token_count: omitted.block.token_count,
                });
            }

            if !result.included.is_empty() {
                blocks_by_heading.entry(section.heading.to_string()).or_default().extend(result.included);
            }
        }
    }

    let now = Utc::now();
    let mut spec = promptc_pipeline::generate(
        &input.raw_input,
        &parsed,
        template,
        dial,
        input.token_budget as u32,
        blocks_by_heading,
        resolved_refs,
        now,
    );

    let rendered = promptc_pipeline::render(&spec);
    let lint = promptc_validate::run_lints(&spec, &rendered);

    spec.meta.total_tokens = estimate_tokens(&rendered);
    spec.meta.compile_duration_ms = started.elapsed().as_millis() as u64;
    spec.meta.lint_score = lint.score;
    spec.meta.compiled_at = now;

    if !lint.passed {
        tracing::warn!(score = lint.score, "compiled prompt scored below the pass threshold");
    }

    let injection = InjectionReport::from_entries(entries, input.token_budget as u32);

    Ok(CompileOutput { spec, rendered, lint, injection })
}
