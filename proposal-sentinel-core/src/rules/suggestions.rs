use super::specs::{
    BUDGET_VAGUE, ETHICS_PERSONAL_DATA, IMPACT_WEAK, NOVELTY_UNCLEAR, OBJECTIVES_UNCLEAR,
};

pub const EVAL_MISSING_EXPLANATION: &str = "No clear evaluation, metrics, or baseline described. Define measurable success criteria (metric, baseline, timeframe).";

pub const EVAL_MISSING_SUGGESTION: &str = "Add explicit evaluation metrics: e.g., \"increase yield by 10% within 12 months measured by randomized field trials against baseline.\"";

pub const FALLBACK_SUGGESTION: &str = "Please clarify this section with specifics.";

/// Canned remediation text for a flag id.
pub fn suggestion_for(id: &str) -> &'static str {
    match id {
        OBJECTIVES_UNCLEAR => "Make objectives specific and measurable: use verbs + metrics + timeline (e.g., \"By month 12, increase X by Y% measured by Z\").",
        ETHICS_PERSONAL_DATA => "If collecting personal data, add consent procedures, anonymization, and data storage/retention details.",
        BUDGET_VAGUE => "Replace vague phrases with line items: unit cost, quantity, justification for each cost.",
        NOVELTY_UNCLEAR => "Clarify the unique contribution relative to cited literature; say how this differs or improves upon prior work.",
        IMPACT_WEAK => "Expand the impact statement with concrete beneficiaries and measurable outcomes.",
        _ => FALLBACK_SUGGESTION,
    }
}

pub fn explanation_for(title: &str) -> String {
    format!("Possible issue: {title}. See excerpt.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::specs::EVAL_MISSING;

    #[test]
    fn test_known_ids_have_specific_text() {
        for id in [
            OBJECTIVES_UNCLEAR,
            ETHICS_PERSONAL_DATA,
            BUDGET_VAGUE,
            NOVELTY_UNCLEAR,
            IMPACT_WEAK,
        ] {
            assert_ne!(suggestion_for(id), FALLBACK_SUGGESTION, "{id}");
        }
    }

    #[test]
    fn test_fallback() {
        assert_eq!(suggestion_for("something_else"), FALLBACK_SUGGESTION);
        // eval_missing carries its own canned suggestion
        assert_eq!(suggestion_for(EVAL_MISSING), FALLBACK_SUGGESTION);
    }

    #[test]
    fn test_explanation() {
        assert_eq!(
            explanation_for("Vague budget phrases"),
            "Possible issue: Vague budget phrases. See excerpt."
        );
    }
}
