//! Block selector: per-section, pure selection of which blocks of one
//! artifact are injected, in what order, and why the rest were excluded.

use promptc_core::{ArtifactBlock, ArtifactId, InjectedBlock};

/// One candidate that did not make it into the section, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmittedBlock {
    pub block: ArtifactBlock,
    pub reason: &'static str,
}

/// Output of one `select` call, scoped to a single (section, artifact) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub included: Vec<InjectedBlock>,
    pub omitted: Vec<OmittedBlock>,
    pub tokens_used: u32,
}

/// `select(blocks, sectionTags, tokenBudget, artifactId, artifactName)`.
/// `token_budget == None` means unlimited; `Some(0)` means the budget is
/// already fully spent and only zero-token blocks can still fit — callers
/// must not collapse an exhausted budget into "unlimited" by passing `0`.
pub fn select(
    blocks: &[ArtifactBlock],
    section_tags: &[String],
    token_budget: Option<u32>,
    artifact_id: ArtifactId,
    artifact_name: &str,
) -> SelectionResult {
    let lowered_section_tags: Vec<String> = section_tags.iter().map(|t| t.to_lowercase()).collect();

    let mut omitted = Vec::new();
    let mut candidates: Vec<&ArtifactBlock> = Vec::new();

    for block in blocks {
        if block.do_not_send {
            omitted.push(OmittedBlock {
                block: block.clone(),
                reason: "do_not_send flag",
            });
            continue;
        }
        if !lowered_section_tags.is_empty() {
            let tag_hit = block.tags.iter().any(|tag| lowered_section_tags.contains(&tag.to_lowercase()));
            if !tag_hit {
                omitted.push(OmittedBlock {
                    block: block.clone(),
                    reason: "no matching tags",
                });
                continue;
            }
        }
        candidates.push(block);
    }

    // Stable sort by priority descending; declaration order is the
    // implicit secondary key because the sort is stable and `candidates`
    // was built by walking `blocks` in declaration order.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut included = Vec::new();
    let mut tokens_used: u32 = 0;
    for block in candidates {
        if let Some(budget) = token_budget {
            if tokens_used + block.token_count > budget {
                omitted.push(OmittedBlock {
                    block: block.clone(),
                    reason: "exceeded token budget",
                });
                continue;
            }
        }
        let position = included.len();
        included.push(InjectedBlock::from_block(block, artifact_id.clone(), artifact_name, position));
        tokens_used += block.token_count;
    }

    SelectionResult {
        included,
        omitted,
        tokens_used,
    }
}
