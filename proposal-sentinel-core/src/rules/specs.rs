use super::suggestions::{explanation_for, suggestion_for};
use crate::types::{Finding, Severity};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

pub const EVAL_MISSING: &str = "eval_missing";
pub const OBJECTIVES_UNCLEAR: &str = "objectives_unclear";
pub const ETHICS_PERSONAL_DATA: &str = "ethics_personal_data";
pub const BUDGET_VAGUE: &str = "budget_vague";
pub const NOVELTY_UNCLEAR: &str = "novelty_unclear";
pub const IMPACT_WEAK: &str = "impact_weak";

/// A named rule definition. Built once per process, read-only afterwards.
#[derive(Debug)]
pub struct FlagSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Case-insensitive trigger patterns, tried in order
    pub patterns: Vec<Regex>,
    pub severity: Severity,
}

impl FlagSpec {
    fn new(
        id: &'static str,
        title: &'static str,
        patterns: &[&str],
        severity: Severity,
    ) -> Self {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
            })
            .collect();

        Self {
            id,
            title,
            patterns,
            severity,
        }
    }

    /// Build the finding this spec reports, with the generic explanation
    /// and the canned suggestion for its id.
    pub fn to_finding(&self, excerpt: impl Into<String>) -> Finding {
        Finding {
            id: self.id.to_string(),
            title: self.title.to_string(),
            severity: self.severity,
            excerpt: excerpt.into(),
            explanation: explanation_for(self.title),
            suggestion: suggestion_for(self.id).to_string(),
        }
    }
}

// id, title, patterns, severity
// Order is evaluation order and output order.
static FLAG_SPECS: LazyLock<Vec<FlagSpec>> = LazyLock::new(|| {
    vec![
        FlagSpec::new(
            EVAL_MISSING,
            "Missing evaluation metrics",
            &["measure success", "evaluate", "evaluation", "success will be"],
            Severity::High,
        ),
        FlagSpec::new(
            OBJECTIVES_UNCLEAR,
            "Unclear / non-measurable objectives",
            &["objective", "aim to", "we aim to", "we will"],
            Severity::High,
        ),
        FlagSpec::new(
            ETHICS_PERSONAL_DATA,
            "Potential personal / sensitive data collection",
            &[
                "income",
                "name",
                "address",
                "personal data",
                "survey.*income",
                "phone",
            ],
            Severity::Medium,
        ),
        FlagSpec::new(
            BUDGET_VAGUE,
            "Vague budget phrases",
            &[
                "misc",
                "other costs",
                "sundry",
                "unspecified",
                "miscellaneous",
                "to be determined",
            ],
            Severity::Medium,
        ),
        FlagSpec::new(
            NOVELTY_UNCLEAR,
            "Novelty / contribution unclear",
            &[
                "well[- ]studied",
                "extensive literature",
                "has been studied",
                "many studies",
                "however existing",
            ],
            Severity::Medium,
        ),
        FlagSpec::new(
            IMPACT_WEAK,
            "Impact statement too short or generic",
            &[],
            Severity::Low,
        ),
    ]
});

/// The process-wide specification table.
pub fn flag_specs() -> &'static [FlagSpec] {
    &FLAG_SPECS
}

pub fn find_spec(id: &str) -> Option<&'static FlagSpec> {
    flag_specs().iter().find(|spec| spec.id == id)
}

pub fn is_known_rule(id: &str) -> bool {
    find_spec(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let ids: Vec<&str> = flag_specs().iter().map(|spec| spec.id).collect();
        assert_eq!(
            ids,
            vec![
                EVAL_MISSING,
                OBJECTIVES_UNCLEAR,
                ETHICS_PERSONAL_DATA,
                BUDGET_VAGUE,
                NOVELTY_UNCLEAR,
                IMPACT_WEAK,
            ]
        );
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let spec = find_spec(NOVELTY_UNCLEAR).unwrap();
        assert!(spec.patterns[0].is_match("This topic is WELL-STUDIED."));
        assert!(spec.patterns[0].is_match("a Well Studied area"));
    }

    #[test]
    fn test_impact_weak_has_no_patterns() {
        let spec = find_spec(IMPACT_WEAK).unwrap();
        assert!(spec.patterns.is_empty());
        assert_eq!(spec.severity, Severity::Low);
    }

    #[test]
    fn test_unknown_rule() {
        assert!(!is_known_rule("not_a_rule"));
        assert!(is_known_rule(BUDGET_VAGUE));
    }
}
