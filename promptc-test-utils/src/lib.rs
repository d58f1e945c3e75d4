//! Shared test infrastructure for the promptc workspace: proptest
//! generators for the core entity types, plus a fixed in-memory
//! `ArtifactHost` fixture used by the cross-crate scenario tests.

use promptc_compiler::{AdapterError, ArtifactHost};
use promptc_core::{Artifact, ArtifactBlock, ArtifactId, ArtifactRef, BlockId};
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Proptest strategies for generating core entity types.
pub mod generators {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    /// Generate an opaque `ArtifactId` from a small alphanumeric alphabet,
    /// biased toward collisions so selection/budget tests see repeats.
    pub fn arb_artifact_id() -> impl Strategy<Value = ArtifactId> {
        "[a-z]{3,8}".prop_map(|s| ArtifactId::from(format!("art-{s}")))
    }

    pub fn arb_block_id() -> impl Strategy<Value = BlockId> {
        "[a-z]{3,8}".prop_map(|s| BlockId::from(format!("blk-{s}")))
    }

    pub fn arb_tags() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::vec(prop_oneof!["background", "context", "requirements", "risks"], 0..3)
            .prop_map(|v| v.into_iter().map(str::to_string).collect())
    }

    /// Generate one `ArtifactBlock` with a token count consistent with its
    /// own content (estimated, not arbitrary — keeps budget tests honest).
    pub fn arb_artifact_block() -> impl Strategy<Value = ArtifactBlock> {
        (
            arb_block_id(),
            "[A-Za-z ]{3,40}",
            "[A-Za-z0-9 .,]{5,120}",
            arb_tags(),
            0u8..=100,
            proptest::bool::ANY,
        )
            .prop_map(|(id, label, content, tags, priority, do_not_send)| {
                let token_count = promptc_core::estimate_tokens(&content);
                ArtifactBlock {
                    id,
                    label,
                    content,
                    tags,
                    priority,
                    do_not_send,
                    token_count,
                }
            })
    }

    /// Generate a full `Artifact` with 1-6 blocks.
    pub fn arb_artifact() -> impl Strategy<Value = Artifact> {
        (
            arb_artifact_id(),
            "[A-Za-z ]{3,30}",
            prop::collection::vec(arb_artifact_block(), 1..6),
        )
            .prop_map(|(id, name, blocks)| {
                let now = Utc::now();
                Artifact {
                    id,
                    name,
                    aliases: BTreeSet::new(),
                    description: String::new(),
                    blocks,
                    version: 1,
                    created_at: now,
                    updated_at: now,
                    is_seed: false,
                }
            })
    }

    /// Generate a well-formed `CompileInput` (no artifact refs; dial and
    /// token budget both in-range so `validate()` always succeeds).
    pub fn arb_compile_input() -> impl Strategy<Value = promptc_core::CompileInput> {
        ("[A-Za-z0-9 ]{1,80}", 0i64..=5, 0i64..=5000).prop_map(|(raw_input, dial, token_budget)| {
            promptc_core::CompileInput {
                raw_input,
                dial,
                token_budget,
                template_override: None,
                force_artifacts: vec![],
            }
        })
    }
}

/// The fixed "AI" artifact fixture used across the scenario tests: two
/// blocks, "AI Safety" (priority 5, 10 tokens, tags background+context) and
/// "AI Ethics" (priority 4, 8 tokens, tag background), resolvable via `@ai`.
pub fn ai_safety_fixture() -> Artifact {
    let now = chrono::Utc::now();
    Artifact {
        id: ArtifactId::from("art-ai"),
        name: "AI".to_string(),
        aliases: BTreeSet::from(["ai".to_string()]),
        description: "AI safety and ethics reference material".to_string(),
        blocks: vec![
            ArtifactBlock {
                id: BlockId::from("blk-safety"),
                label: "AI Safety".to_string(),
                content: "a b c d e f g".to_string(),
                tags: BTreeSet::from(["background".to_string(), "context".to_string()]),
                priority: 5,
                do_not_send: false,
                token_count: 10,
            },
            ArtifactBlock {
                id: BlockId::from("blk-ethics"),
                label: "AI Ethics".to_string(),
                content: "a b c d e f".to_string(),
                tags: BTreeSet::from(["background".to_string()]),
                priority: 4,
                do_not_send: false,
                token_count: 8,
            },
        ],
        version: 1,
        created_at: now,
        updated_at: now,
        is_seed: true,
    }
}

/// A fixed in-memory `ArtifactHost` seeded with [`ai_safety_fixture`] and
/// whatever extra artifacts a test registers, keyed by both id and name.
#[derive(Debug, Clone, Default)]
pub struct TestHost {
    artifacts: HashMap<ArtifactId, Artifact>,
    by_name: HashMap<String, ArtifactId>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the `@ai` fixture used by the scenario tests.
    pub fn with_ai_fixture() -> Self {
        let mut host = Self::new();
        host.insert(ai_safety_fixture());
        host
    }

    pub fn insert(&mut self, artifact: Artifact) -> &mut Self {
        self.by_name.insert(artifact.name.to_lowercase(), artifact.id.clone());
        for alias in &artifact.aliases {
            self.by_name.insert(alias.to_lowercase(), artifact.id.clone());
        }
        self.artifacts.insert(artifact.id.clone(), artifact);
        self
    }
}

#[async_trait::async_trait]
impl ArtifactHost for TestHost {
    async fn resolve_refs(&self, names: &[String]) -> Result<Vec<ArtifactRef>, AdapterError> {
        Ok(names
            .iter()
            .map(|name| match self.by_name.get(&name.to_lowercase()) {
                Some(id) => {
                    let artifact_name = self.artifacts.get(id).map(|a| a.name.clone()).unwrap_or_default();
                    ArtifactRef::resolved(format!("@{name}"), id.clone(), artifact_name)
                }
                None => ArtifactRef::unresolved(format!("@{name}")),
            })
            .collect())
    }

    async fn fetch_artifact(&self, id: &ArtifactId) -> Result<Option<Artifact>, AdapterError> {
        Ok(self.artifacts.get(id).cloned())
    }
}

/// Wraps a [`TestHost`], counting `resolve_refs` invocations — used to
/// verify the "at most once per compilation" contract on the driver side.
#[derive(Debug, Clone, Default)]
pub struct CountingHost {
    inner: TestHost,
    resolve_refs_calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl CountingHost {
    pub fn with_ai_fixture() -> Self {
        Self {
            inner: TestHost::with_ai_fixture(),
            resolve_refs_calls: std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0)),
        }
    }

    pub fn resolve_refs_call_count(&self) -> usize {
        self.resolve_refs_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ArtifactHost for CountingHost {
    async fn resolve_refs(&self, names: &[String]) -> Result<Vec<ArtifactRef>, AdapterError> {
        self.resolve_refs_calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.inner.resolve_refs(names).await
    }

    async fn fetch_artifact(&self, id: &ArtifactId) -> Result<Option<Artifact>, AdapterError> {
        self.inner.fetch_artifact(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_fixture_resolves_by_name_case_insensitively() {
        let host = TestHost::with_ai_fixture();
        assert!(host.by_name.contains_key("ai"));
    }

    #[tokio::test]
    async fn resolve_refs_marks_unknown_names_unresolved() {
        let host = TestHost::with_ai_fixture();
        let refs = host.resolve_refs(&["ai".to_string(), "nope".to_string()]).await.unwrap();
        assert!(refs[0].resolved);
        assert!(!refs[1].resolved);
    }

    #[tokio::test]
    async fn fetch_artifact_returns_none_for_missing_id() {
        let host = TestHost::with_ai_fixture();
        let result = host.fetch_artifact(&ArtifactId::from("art-missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn counting_host_tallies_resolve_refs_calls() {
        let host = CountingHost::with_ai_fixture();
        assert_eq!(host.resolve_refs_call_count(), 0);
        host.resolve_refs(&["ai".to_string()]).await.unwrap();
        host.resolve_refs(&["ai".to_string()]).await.unwrap();
        assert_eq!(host.resolve_refs_call_count(), 2);
    }
}
