//! Cross-crate scenario tests exercising the full `compile()` pipeline
//! against a fixed in-memory artifact host.

use promptc_core::CompileInput;
use promptc_test_utils::{CountingHost, TestHost};

fn input(raw_input: &str, dial: i64, token_budget: i64) -> CompileInput {
    CompileInput {
        raw_input: raw_input.to_string(),
        dial,
        token_budget,
        template_override: None,
        force_artifacts: vec![],
    }
}

#[tokio::test]
async fn s1_plain_report_request_produces_nine_sections_no_constraints() {
    let host = TestHost::with_ai_fixture();
    let output = promptc_compiler::compile(&input("Write a report on AI", 3, 1000), &host)
        .await
        .unwrap();

    assert_eq!(output.spec.template_id, promptc_core::TemplateId::AcademicReport);
    assert!(output.spec.artifact_refs.is_empty());
    assert_eq!(output.spec.sections.len(), 9);
    assert!(output.rendered.contains("[System Instruction]"));
    for section in &output.spec.sections {
        assert!(output.rendered.contains(&format!("# {}", section.heading)));
    }
    assert!(!output.rendered.contains("[Constraints]"));

    let rule_ids: Vec<&str> = output.lint.results.iter().map(|r| r.rule_id.as_str()).collect();
    assert!(rule_ids.contains(&"vague-input"));
    assert!(rule_ids.contains(&"missing-constraints"));
    assert_eq!(output.lint.score, 80);
    assert!(output.lint.passed);
}

#[tokio::test]
async fn s2_artifact_reference_injects_both_blocks_in_priority_order() {
    let host = TestHost::with_ai_fixture();
    let output = promptc_compiler::compile(&input("Explain @ai safety", 4, 500), &host)
        .await
        .unwrap();

    assert_eq!(output.spec.artifact_refs.iter().map(|r| r.raw.as_str()).collect::<Vec<_>>(), vec!["@ai"]);
    assert_eq!(output.spec.sections.len(), 10);

    let background = output.spec.sections.iter().find(|s| s.heading == "Background").unwrap();
    let labels: Vec<&str> = background.injected_blocks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["AI Safety", "AI Ethics"]);

    assert!(output.rendered.contains("## [Context: AI Safety]"));
    assert!(output.rendered.contains("a b c d e f g"));
    assert_eq!(output.injection.total_tokens_used, 18);
}

#[tokio::test]
async fn s3_tight_budget_admits_only_the_higher_priority_block() {
    let host = TestHost::with_ai_fixture();
    let output = promptc_compiler::compile(&input("Explain @ai safety", 4, 10), &host)
        .await
        .unwrap();

    let background = output.spec.sections.iter().find(|s| s.heading == "Background").unwrap();
    assert_eq!(background.injected_blocks.len(), 1);
    assert_eq!(background.injected_blocks[0].label, "AI Safety");
    assert_eq!(output.injection.total_tokens_used, 10);

    let ethics_entry = output.injection.entries.iter().find(|e| e.block_label == "AI Ethics").unwrap();
    assert!(!ethics_entry.included);
    assert_eq!(ethics_entry.reason.as_deref(), Some("exceeded token budget"));
}

#[tokio::test]
async fn s4_whitespace_only_input_with_dial_zero_and_unlimited_budget() {
    let host = TestHost::with_ai_fixture();
    let output = promptc_compiler::compile(&input("   ", 0, 0), &host).await.unwrap();

    assert_eq!(output.spec.sections.len(), 3);
    assert_eq!(output.spec.raw_input, "   ");

    let rule_ids: Vec<&str> = output.lint.results.iter().map(|r| r.rule_id.as_str()).collect();
    assert!(rule_ids.contains(&"vague-input"));
    assert!(!rule_ids.contains(&"budget-exceeded"));
}

#[tokio::test]
async fn s5_do_not_send_block_never_reaches_the_rendered_output() {
    let mut host = TestHost::new();
    let now = chrono::Utc::now();
    host.insert(promptc_core::Artifact {
        id: promptc_core::ArtifactId::from("art-secret"),
        name: "Secret".to_string(),
        aliases: std::collections::BTreeSet::from(["secret".to_string()]),
        description: String::new(),
        blocks: vec![promptc_core::ArtifactBlock {
            id: promptc_core::BlockId::from("blk-secret"),
            label: "Internal Notes".to_string(),
            content: "classified internal roadmap details".to_string(),
            tags: std::collections::BTreeSet::from(["background".to_string()]),
            priority: 10,
            do_not_send: true,
            token_count: 5,
        }],
        version: 1,
        created_at: now,
        updated_at: now,
        is_seed: true,
    });

    let output = promptc_compiler::compile(&input("Explain @secret plans", 3, 0), &host)
        .await
        .unwrap();

    assert!(!output.rendered.contains("classified internal roadmap details"));
    let entry = output.injection.entries.iter().find(|e| e.block_label == "Internal Notes").unwrap();
    assert!(!entry.included);
    assert_eq!(entry.reason.as_deref(), Some("do_not_send flag"));

    let rule_ids: Vec<&str> = output.lint.results.iter().map(|r| r.rule_id.as_str()).collect();
    assert!(!rule_ids.contains(&"do-not-send-leak"));
}

#[tokio::test]
async fn s6_ten_repeated_compiles_agree_on_everything_but_spec_id() {
    let host = TestHost::with_ai_fixture();
    let mut ids = std::collections::HashSet::new();
    let mut rendered_set = std::collections::HashSet::new();
    let mut scores = std::collections::HashSet::new();

    for _ in 0..10 {
        let output = promptc_compiler::compile(&input("Write a report on AI", 3, 1000), &host)
            .await
            .unwrap();
        ids.insert(output.spec.id.clone());
        rendered_set.insert(output.rendered.clone());
        scores.insert(output.lint.score);
    }

    assert_eq!(ids.len(), 10, "every compile must mint a distinct spec id");
    assert_eq!(rendered_set.len(), 1, "rendered output must be identical across compiles");
    assert_eq!(scores, std::collections::HashSet::from([80]));
}

#[tokio::test]
async fn unresolved_artifact_reference_contributes_no_blocks_but_does_not_fail() {
    let host = TestHost::with_ai_fixture();
    let output = promptc_compiler::compile(&input("Explain @nonexistent topic", 3, 1000), &host)
        .await
        .unwrap();

    assert!(output.spec.artifact_refs.iter().any(|r| !r.resolved));
    assert!(output.spec.sections.iter().all(|s| s.injected_blocks.is_empty()));
}

#[tokio::test]
async fn force_artifacts_are_resolved_even_without_an_inline_reference() {
    let host = TestHost::with_ai_fixture();
    let mut compile_input = input("Write a report on AI", 4, 1000);
    compile_input.force_artifacts = vec!["ai".to_string()];

    let output = promptc_compiler::compile(&compile_input, &host).await.unwrap();
    let background = output.spec.sections.iter().find(|s| s.heading == "Background").unwrap();
    assert!(!background.injected_blocks.is_empty());
}

#[tokio::test]
async fn invalid_dial_is_rejected_before_any_pipeline_stage_runs() {
    let host = TestHost::with_ai_fixture();
    let result = promptc_compiler::compile(&input("Write a report on AI", 9, 1000), &host).await;
    assert!(matches!(result, Err(promptc_compiler::CompileError::Input(_))));
}

#[tokio::test]
async fn resolve_refs_is_never_called_when_there_is_nothing_to_resolve() {
    let host = CountingHost::with_ai_fixture();
    promptc_compiler::compile(&input("Write a report on AI", 3, 1000), &host)
        .await
        .unwrap();
    assert_eq!(host.resolve_refs_call_count(), 0);
}

#[tokio::test]
async fn resolve_refs_is_called_exactly_once_when_refs_are_present() {
    let host = CountingHost::with_ai_fixture();
    promptc_compiler::compile(&input("Explain @ai safety and @ai ethics", 3, 1000), &host)
        .await
        .unwrap();
    assert_eq!(host.resolve_refs_call_count(), 1);
}

#[tokio::test]
async fn resolve_refs_is_called_exactly_once_for_a_force_artifact_with_no_inline_ref() {
    let host = CountingHost::with_ai_fixture();
    let mut compile_input = input("Write a report on AI", 3, 1000);
    compile_input.force_artifacts = vec!["ai".to_string()];
    promptc_compiler::compile(&compile_input, &host).await.unwrap();
    assert_eq!(host.resolve_refs_call_count(), 1);
}
