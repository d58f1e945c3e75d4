//! Strict schema validation and best-effort repair over a `PromptSpec`.
//!
//! Two operations: a strict schema check over an already-typed
//! [`PromptSpec`], and a best-effort repair pass over an arbitrary
//! [`serde_json::Value`] — the shape a persisted or hand-authored spec
//! might arrive in — that runs before the strict check.

use promptc_core::{DialLevel, PromptSpec, SchemaError, SpecId};
use serde_json::{json, Value};

/// `validate(spec) -> { valid, errors? }`.
///
/// Everything the Rust type system already forecloses (`dial` out of
/// `[0,5]`, `templateId` outside the closed set, a negative token count)
/// needs no runtime check here; this function covers only the invariants
/// `PromptSpec`'s field types don't themselves enforce.
pub fn validate(spec: &PromptSpec) -> Result<(), Vec<SchemaError>> {
    let mut errors = Vec::new();

    if spec.sections.is_empty() {
        errors.push(SchemaError::new("sections", "must contain at least one section"));
    }

    if spec.meta.lint_score > 100 {
        errors.push(SchemaError::new("meta.lintScore", "must be in [0, 100]"));
    }

    for (section_idx, section) in spec.sections.iter().enumerate() {
        for (block_idx, block) in section.injected_blocks.iter().enumerate() {
            if block.priority > 100 {
                errors.push(SchemaError::new(
                    format!("sections[{section_idx}].injectedBlocks[{block_idx}].priority"),
                    "must be in [0, 100]",
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Result of [`validate_and_repair`].
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub valid: bool,
    pub repaired: bool,
    pub data: Option<PromptSpec>,
    pub errors: Option<Vec<SchemaError>>,
}

/// `validateAndRepair(maybeSpec) -> { valid, repaired, data?, errors? }`.
/// Repairs, in order, never touching a field that is present but wrongly
/// typed:
///
/// 1. fresh `id` if missing
/// 2. `tokenBudget = 0` if missing
/// 3. `constraints = []`, `artifactRefs = []` if missing
/// 4. `meta` defaults (`0, 0, now, 0`) if missing
/// 5. `injectedBlocks = []` per section if missing
/// 6. clamp an out-of-range finite `dial` to the literal `3`
pub fn validate_and_repair(mut value: Value, now: promptc_core::Timestamp) -> RepairOutcome {
    let mut repaired = false;

    let Some(obj) = value.as_object_mut() else {
        return RepairOutcome {
            valid: false,
            repaired: false,
            data: None,
            errors: Some(vec![SchemaError::new("<root>", "expected a JSON object")]),
        };
    };

    if !obj.contains_key("id") {
        obj.insert("id".to_string(), json!(SpecId::generate()));
        repaired = true;
    }
    if !obj.contains_key("token_budget") {
        obj.insert("token_budget".to_string(), json!(0));
        repaired = true;
    }
    if !obj.contains_key("constraints") {
        obj.insert("constraints".to_string(), json!([]));
        repaired = true;
    }
    if !obj.contains_key("artifact_refs") {
        obj.insert("artifact_refs".to_string(), json!([]));
        repaired = true;
    }
    if !obj.contains_key("meta") {
        obj.insert(
            "meta".to_string(),
            json!({
                "total_tokens": 0,
                "compile_duration_ms": 0,
                "compiled_at": now,
                "lint_score": 0,
            }),
        );
        repaired = true;
    }

    if let Some(Value::Array(sections)) = obj.get_mut("sections") {
        for section in sections.iter_mut() {
            if let Some(section_obj) = section.as_object_mut() {
                if !section_obj.contains_key("injected_blocks") {
                    section_obj.insert("injected_blocks".to_string(), json!([]));
                    repaired = true;
                }
            }
        }
    }

    if let Some(dial_value) = obj.get("dial").and_then(|d| d.as_i64()) {
        if DialLevel::try_from(dial_value).is_err() {
            obj.insert("dial".to_string(), json!(i64::from(DialLevel::REPAIR_DEFAULT)));
            repaired = true;
        }
    }

    match serde_json::from_value::<PromptSpec>(value) {
        Ok(spec) => match validate(&spec) {
            Ok(()) => RepairOutcome {
                valid: true,
                repaired,
                data: Some(spec),
                errors: None,
            },
            Err(errors) => RepairOutcome {
                valid: false,
                repaired,
                data: None,
                errors: Some(errors),
            },
        },
        Err(err) => RepairOutcome {
            valid: false,
            repaired,
            data: None,
            errors: Some(vec![SchemaError::new("<root>", err.to_string())]),
        },
    }
}
