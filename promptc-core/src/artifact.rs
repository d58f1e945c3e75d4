//! Artifact and block types.
//!
//! These are read-only from the core's perspective: the host store owns
//! their lifecycle, the core only ever receives snapshots through the
//! `ArtifactHost` callbacks (`promptc-compiler`).

use crate::ids::{ArtifactId, BlockId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The atomic unit of injectable content.
///
/// `token_count` is computed once, at block-creation time, via
/// [`crate::estimator::estimate_tokens`] and then persisted — the pipeline
/// never re-estimates it during a compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBlock {
    pub id: BlockId,
    pub label: String,
    pub content: String,
    /// Ordered for deterministic iteration.
    pub tags: BTreeSet<String>,
    /// `[0, 100]`.
    pub priority: u8,
    pub do_not_send: bool,
    pub token_count: u32,
}

/// A named, versioned bundle of blocks, owned and mutated only by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub aliases: BTreeSet<String>,
    pub description: String,
    /// Declaration order is the block selector's tie-break secondary key.
    pub blocks: Vec<ArtifactBlock>,
    pub version: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_seed: bool,
}

/// One `@name` occurrence in a raw input, resolved (or not) to an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// The original `@name` token, including the `@`.
    pub raw: String,
    pub artifact_id: Option<ArtifactId>,
    pub artifact_name: Option<String>,
    pub resolved: bool,
}

impl ArtifactRef {
    pub fn unresolved(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            artifact_id: None,
            artifact_name: None,
            resolved: false,
        }
    }

    pub fn resolved(raw: impl Into<String>, artifact_id: ArtifactId, artifact_name: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            artifact_id: Some(artifact_id),
            artifact_name: Some(artifact_name.into()),
            resolved: true,
        }
    }
}

/// An [`ArtifactBlock`] joined with its parent artifact's identity and a
/// per-spec position; the unit actually rendered into a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectedBlock {
    pub block_id: BlockId,
    pub artifact_id: ArtifactId,
    pub artifact_name: String,
    pub label: String,
    pub content: String,
    pub tags: BTreeSet<String>,
    pub priority: u8,
    pub token_count: u32,
    pub position: usize,
}

impl InjectedBlock {
    pub fn from_block(block: &ArtifactBlock, artifact_id: ArtifactId, artifact_name: impl Into<String>, position: usize) -> Self {
        Self {
            block_id: block.id.clone(),
            artifact_id,
            artifact_name: artifact_name.into(),
            label: block.label.clone(),
            content: block.content.clone(),
            tags: block.tags.clone(),
            priority: block.priority,
            token_count: block.token_count,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block(id: &str, priority: u8, do_not_send: bool) -> ArtifactBlock {
        ArtifactBlock {
            id: BlockId::from(id),
            label: "Sample".to_string(),
            content: "sample content".to_string(),
            tags: BTreeSet::from(["background".to_string()]),
            priority,
            do_not_send,
            token_count: 3,
        }
    }

    #[test]
    fn injected_block_copies_by_value_from_block() {
        let block = sample_block("blk-1", 5, false);
        let injected = InjectedBlock::from_block(&block, ArtifactId::from("art-1"), "Sample Artifact", 0);
        assert_eq!(injected.label, block.label);
        assert_eq!(injected.token_count, block.token_count);
        assert_eq!(injected.artifact_name, "Sample Artifact");
    }

    #[test]
    fn artifact_ref_unresolved_has_no_identity() {
        let r = ArtifactRef::unresolved("@missing");
        assert!(!r.resolved);
        assert!(r.artifact_id.is_none());
    }
}
