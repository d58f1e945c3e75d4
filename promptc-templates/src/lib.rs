//! The fixed catalog of prompt templates.
//!
//! Templates are immutable, process-wide state, built once behind
//! [`once_cell::sync::Lazy`] and never mutated; runtime extension of the
//! catalog is not supported.

use once_cell::sync::Lazy;
use promptc_core::{DialLevel, TemplateId};

/// One ordered section of a [`TemplateDefinition`].
///
/// Invariant: headings are unique within a template; declaration order is
/// render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSection {
    pub heading: &'static str,
    pub min_dial: DialLevel,
    pub instruction: &'static str,
    pub required: bool,
}

/// A fixed skeleton: a system instruction plus an ordered, dial-gated list
/// of sections, plus the keyword list both the intent parser's scorer and
/// the lint engine's weak-match rule read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub system_instruction: &'static str,
    pub sections: Vec<TemplateSection>,
    pub keywords: Vec<&'static str>,
}

fn dial(n: u8) -> DialLevel {
    DialLevel::try_from(n as i64).expect("template-authored dial is always in range")
}

fn section(heading: &'static str, min_dial: u8, instruction: &'static str, required: bool) -> TemplateSection {
    TemplateSection {
        heading,
        min_dial: dial(min_dial),
        instruction,
        required,
    }
}

static ACADEMIC_REPORT: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    id: TemplateId::AcademicReport,
    name: "Academic Report",
    description: "A structured academic-style report with literature grounding.",
    system_instruction: "You are an academic writing assistant producing a rigorous, well-cited report.",
    sections: vec![
        section("Title & Abstract", 0, "State the report's title and a concise abstract.", true),
        section("Background", 0, "Summarize the background and context for the topic.", true),
        section("Introduction", 0, "Introduce the problem and its significance.", true),
        section("Literature Review", 1, "Survey relevant prior work.", false),
        section("Methodology", 1, "Describe the approach used.", false),
        section("Results", 2, "Present the findings.", false),
        section("Discussion", 2, "Interpret the findings in context.", false),
        section("Limitations", 3, "Note limitations of the work.", false),
        section("Conclusion", 3, "Summarize conclusions and implications.", true),
        section("Future Work", 4, "Suggest directions for further study.", false),
        section("Appendix", 5, "Include supplementary material.", false),
    ],
    keywords: vec!["report", "study", "academic", "literature", "thesis"],
});

static PRD: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    id: TemplateId::Prd,
    name: "Product Requirements Document",
    description: "A product requirements document covering goals, scope, and success metrics.",
    system_instruction: "You are a senior product manager writing a precise, unambiguous PRD.",
    sections: vec![
        section("Problem Statement", 0, "Describe the problem this product addresses.", true),
        section("Goals", 0, "List the goals and non-goals.", true),
        section("User Stories", 1, "Enumerate key user stories.", false),
        section("Requirements", 1, "Specify functional and non-functional requirements.", false),
        section("Success Metrics", 2, "Define how success will be measured.", false),
        section("Risks", 3, "Call out risks and open questions.", false),
        section("Timeline", 4, "Outline a rough delivery timeline.", false),
        section("Appendix", 5, "Include supplementary material.", false),
    ],
    keywords: vec!["requirements", "product", "feature", "roadmap", "prd"],
});

static DECISION_MEMO: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    id: TemplateId::DecisionMemo,
    name: "Decision Memo",
    description: "A memo recommending a decision among considered options.",
    system_instruction: "You are a strategy advisor writing a decision memo for an executive audience.",
    sections: vec![
        section("Context", 0, "Describe the situation requiring a decision.", true),
        section("Decision", 0, "State the recommended decision up front.", true),
        section("Options Considered", 1, "List the alternatives that were weighed.", false),
        section("Recommendation", 2, "Justify the recommendation.", false),
        section("Risks", 3, "Call out risks of the recommended path.", false),
        section("Next Steps", 4, "List concrete next steps.", false),
    ],
    keywords: vec!["decision", "recommend", "tradeoff", "options", "memo"],
});

static CRITIQUE: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    id: TemplateId::Critique,
    name: "Critique",
    description: "A structured critique covering strengths, weaknesses, and suggestions.",
    system_instruction: "You are a rigorous, constructive reviewer critiquing the given work.",
    sections: vec![
        section("Summary", 0, "Summarize what is being critiqued.", true),
        section("Strengths", 0, "List notable strengths.", true),
        section("Weaknesses", 1, "List notable weaknesses.", false),
        section("Suggestions", 2, "Offer concrete suggestions for improvement.", false),
        section("Overall Assessment", 3, "Give an overall verdict.", false),
    ],
    keywords: vec!["critique", "review", "feedback", "assess", "evaluate"],
});

static RESEARCH_BRIEF: Lazy<TemplateDefinition> = Lazy::new(|| TemplateDefinition {
    id: TemplateId::ResearchBrief,
    name: "Research Brief",
    description: "A short brief summarizing research findings and their implications.",
    system_instruction: "You are a research analyst producing a concise, evidence-based brief.",
    sections: vec![
        section("Overview", 0, "Summarize the research question.", true),
        section("Key Findings", 0, "List the key findings.", true),
        section("Methodology", 1, "Describe how the research was conducted.", false),
        section("Implications", 2, "Discuss implications of the findings.", false),
        section("Open Questions", 4, "List unresolved questions.", false),
    ],
    keywords: vec!["research", "brief", "findings", "investigate", "analysis"],
});

/// Look up a template's fixed definition.
pub fn template(id: TemplateId) -> &'static TemplateDefinition {
    match id {
        TemplateId::AcademicReport => &ACADEMIC_REPORT,
        TemplateId::Prd => &PRD,
        TemplateId::DecisionMemo => &DECISION_MEMO,
        TemplateId::Critique => &CRITIQUE,
        TemplateId::ResearchBrief => &RESEARCH_BRIEF,
    }
}

/// All five templates, in catalog order (the intent parser's tie-break rule).
pub fn all() -> Vec<&'static TemplateDefinition> {
    TemplateId::CATALOG_ORDER.iter().map(|&id| template(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_at_least_one_zero_dial_section() {
        for t in all() {
            assert!(
                t.sections.iter().any(|s| s.min_dial.value() == 0),
                "{} has no minDial=0 section",
                t.name
            );
        }
    }

    #[test]
    fn every_template_has_unique_headings() {
        for t in all() {
            let mut seen = std::collections::HashSet::new();
            for s in &t.sections {
                assert!(seen.insert(s.heading), "duplicate heading {} in {}", s.heading, t.name);
            }
        }
    }

    #[test]
    fn academic_report_dial_gating_matches_fixture_scenarios() {
        let t = template(TemplateId::AcademicReport);
        let count_at = |dial: u8| t.sections.iter().filter(|s| s.min_dial.value() <= dial).count();
        assert_eq!(count_at(0), 3);
        assert_eq!(count_at(3), 9);
        assert_eq!(count_at(4), 10);
    }

    #[test]
    fn academic_report_has_background_section() {
        let t = template(TemplateId::AcademicReport);
        assert!(t.sections.iter().any(|s| s.heading == "Background"));
    }

    #[test]
    fn catalog_order_is_stable_and_complete() {
        let ids: Vec<TemplateId> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids, TemplateId::CATALOG_ORDER.to_vec());
    }
}
