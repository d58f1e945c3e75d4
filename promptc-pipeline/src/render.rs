//! Renderer: turns a [`PromptSpec`] into the final prompt string.
//!
//! Pure and deterministic: no sanitization, no escaping, no whitespace
//! normalization. The layout is part of the external contract — change
//! it only with a declared version bump.

use promptc_core::PromptSpec;

/// `render(spec) -> string`.
pub fn render(spec: &PromptSpec) -> String {
    let mut out = String::new();

    out.push_str("[System Instruction]\n");
    out.push_str(&spec.system_instruction);
    out.push_str("\n---\n");

    for section in &spec.sections {
        out.push_str(&format!("# {}\n", section.heading));
        out.push_str(&section.instruction);
        out.push('\n');
        for block in &section.injected_blocks {
            out.push_str(&format!("## [Context: {}]\n", block.label));
            out.push_str(&block.content);
            out.push('\n');
        }
        out.push_str("---\n");
    }

    if !spec.constraints.is_empty() {
        out.push_str("[Constraints]\n");
        for constraint in &spec.constraints {
            out.push_str(constraint);
            out.push('\n');
        }
    }

    out
}
