use crate::config::AnalyzerConfig;
use crate::types::{Finding, Strength};

use super::evaluation::EvaluationMissingRule;
use super::impact::ImpactWeaknessRule;
use super::pattern::PatternRule;
use super::specs::{flag_specs, EVAL_MISSING, IMPACT_WEAK};
use super::strengths::StrengthScanner;

/// The text under analysis: the raw input plus its sentences, segmented once.
#[derive(Debug, Clone, Copy)]
pub struct ProposalText<'a> {
    pub raw: &'a str,
    pub sentences: &'a [String],
}

impl<'a> ProposalText<'a> {
    pub fn new(raw: &'a str, sentences: &'a [String]) -> Self {
        Self { raw, sentences }
    }
}

// Flag rule infrastructure
pub trait ProposalRule {
    /// Produce at most one finding for the whole document
    fn evaluate(&self, text: &ProposalText<'_>) -> Option<Finding>;
    fn id(&self) -> &str;
}

/// Holds the ordered rule list for one configuration.
///
/// Rules run in table order, which is also output order:
/// 1. `eval_missing` (whole-text keyword check)
/// 2. the generic trigger-pattern rules
/// 3. `impact_weak` (sentence-level impact check)
pub struct RuleEngine<'a> {
    rules: Vec<Box<dyn ProposalRule + 'a>>,
    strengths: StrengthScanner<'a>,
}

impl<'a> RuleEngine<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        let mut rules: Vec<Box<dyn ProposalRule + 'a>> = Vec::new();

        for spec in flag_specs() {
            if !config.is_rule_enabled(spec.id) {
                tracing::debug!(rule = spec.id, "rule disabled by config");
                continue;
            }
            let rule: Box<dyn ProposalRule + 'a> = match spec.id {
                EVAL_MISSING => Box::new(EvaluationMissingRule::new(spec, config)),
                IMPACT_WEAK => Box::new(ImpactWeaknessRule::new(spec, config)),
                _ => Box::new(PatternRule::new(spec)),
            };
            rules.push(rule);
        }

        Self {
            rules,
            strengths: StrengthScanner::new(config),
        }
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn apply_rules(&self, text: &ProposalText<'_>) -> Vec<Finding> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let finding = rule.evaluate(text);
                if let Some(finding) = &finding {
                    tracing::debug!(
                        rule = rule.id(),
                        severity = %finding.severity,
                        excerpt = %finding.excerpt,
                        "rule triggered"
                    );
                }
                finding
            })
            .collect()
    }

    pub fn detect_strengths(&self, text: &ProposalText<'_>) -> Vec<Strength> {
        self.strengths.scan(text)
    }
}
