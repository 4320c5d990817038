use super::contains_any;
use super::engine::{ProposalRule, ProposalText};
use super::specs::FlagSpec;
use crate::config::{AnalyzerConfig, ImpactConfig};
use crate::segmenter::word_count;
use crate::types::Finding;

pub const NO_IMPACT_SENTENCE: &str = "No explicit impact sentence found.";

// ImpactWeaknessRule - flags a missing impact statement, or the first impact
// sentence that is too short or leans on generic filler words
pub struct ImpactWeaknessRule<'a> {
    spec: &'a FlagSpec,
    config: &'a ImpactConfig,
}

impl<'a> ImpactWeaknessRule<'a> {
    pub fn new(spec: &'a FlagSpec, config: &'a AnalyzerConfig) -> Self {
        Self {
            spec,
            config: &config.impact,
        }
    }

    fn is_impact_sentence(&self, lowered: &str) -> bool {
        contains_any(lowered, &self.config.keywords)
    }

    fn is_weak(&self, sentence: &str, lowered: &str) -> bool {
        let words = word_count(sentence);
        words < self.config.min_words
            || (contains_any(lowered, &self.config.generic_words)
                && words < self.config.generic_max_words)
    }

    /// The excerpt to flag, if any
    fn weak_excerpt(&self, sentences: &[String]) -> Option<String> {
        let mut saw_impact = false;

        for sentence in sentences {
            let lowered = sentence.to_lowercase();
            if !self.is_impact_sentence(&lowered) {
                continue;
            }
            saw_impact = true;
            if self.is_weak(sentence, &lowered) {
                return Some(sentence.clone());
            }
        }

        (!saw_impact).then(|| NO_IMPACT_SENTENCE.to_string())
    }
}

impl<'a> ProposalRule for ImpactWeaknessRule<'a> {
    fn evaluate(&self, text: &ProposalText<'_>) -> Option<Finding> {
        self.weak_excerpt(text.sentences)
            .map(|excerpt| self.spec.to_finding(excerpt))
    }

    fn id(&self) -> &str {
        self.spec.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::specs::{find_spec, IMPACT_WEAK};
    use crate::segmenter::segment;
    use crate::types::Severity;

    fn evaluate(raw: &str) -> Option<Finding> {
        evaluate_with(&AnalyzerConfig::default(), raw)
    }

    fn evaluate_with(config: &AnalyzerConfig, raw: &str) -> Option<Finding> {
        let spec = find_spec(IMPACT_WEAK).unwrap();
        let sentences = segment(raw);
        ImpactWeaknessRule::new(spec, config).evaluate(&ProposalText::new(raw, &sentences))
    }

    #[test]
    fn test_no_impact_sentence() {
        let finding = evaluate("We plant trees. They grow tall.").unwrap();
        assert_eq!(finding.excerpt, NO_IMPACT_SENTENCE);
        assert_eq!(finding.severity, Severity::Low);
        assert_eq!(
            finding.suggestion,
            "Expand the impact statement with concrete beneficiaries and measurable outcomes."
        );
    }

    #[test]
    fn test_empty_text_has_no_impact_sentence() {
        assert_eq!(evaluate("").unwrap().excerpt, NO_IMPACT_SENTENCE);
    }

    #[test]
    fn test_short_impact_sentence() {
        // 5 words
        let finding = evaluate("It will improve lives greatly.").unwrap();
        assert_eq!(finding.excerpt, "It will improve lives greatly.");
    }

    #[test]
    fn test_generic_impact_sentence_under_twelve_words() {
        // 7 words, contains "significant"
        let raw = "This work will have a significant impact.";
        assert_eq!(evaluate(raw).unwrap().excerpt, raw);
    }

    #[test]
    fn test_generic_but_long_sentence_passes() {
        // 12 words: generic filler is tolerated at this length
        let raw = "This project has a significant impact on farmers across three rural districts.";
        assert!(evaluate(raw).is_none());
    }

    #[test]
    fn test_specific_impact_sentence_passes() {
        let raw = "The project will reduce irrigation losses for two thousand smallholder farms.";
        assert!(evaluate(raw).is_none());
    }

    #[test]
    fn test_first_weak_sentence_is_flagged() {
        let raw = "The project will reduce irrigation losses for two thousand smallholder farms. \
                   Benefits are clear. Impact matters.";
        assert_eq!(evaluate(raw).unwrap().excerpt, "Benefits are clear.");
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "reduced" contains "reduce"
        assert_eq!(evaluate("Costs reduced.").unwrap().excerpt, "Costs reduced.");
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let mut config = AnalyzerConfig::default();
        config.impact.min_words = 2;
        assert!(evaluate_with(&config, "It will improve lives greatly.").is_none());
    }
}
